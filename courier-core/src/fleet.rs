//! Delivery vehicles and their availability.
//!
//! Every vehicle in a run shares one speed and one carrying capacity. Each
//! vehicle tracks the simulated hour at which it is next free; the value only
//! ever moves forward.

use thiserror::Error;

/// Fleet-wide parameters for a scheduling run.
///
/// # Examples
///
/// ```
/// use courier_core::FleetSpec;
///
/// # fn main() -> Result<(), courier_core::FleetError> {
/// let spec = FleetSpec::new(2, 70, 200)?;
/// assert_eq!(spec.capacity_kg(), 200);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FleetSpec {
    vehicle_count: u32,
    speed_kmh: u32,
    capacity_kg: u32,
}

/// Errors returned by [`FleetSpec::new`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FleetError {
    /// The fleet had no vehicles.
    #[error("fleet must contain at least one vehicle")]
    NoVehicles,
    /// Vehicles could not move.
    #[error("vehicle speed must be positive")]
    ZeroSpeed,
    /// Vehicles could not carry anything.
    #[error("vehicle capacity must be positive")]
    ZeroCapacity,
}

impl FleetSpec {
    /// Validates and constructs a [`FleetSpec`].
    ///
    /// # Errors
    ///
    /// Returns a [`FleetError`] when any parameter is zero.
    pub const fn new(
        vehicle_count: u32,
        speed_kmh: u32,
        capacity_kg: u32,
    ) -> Result<Self, FleetError> {
        if vehicle_count == 0 {
            return Err(FleetError::NoVehicles);
        }
        if speed_kmh == 0 {
            return Err(FleetError::ZeroSpeed);
        }
        if capacity_kg == 0 {
            return Err(FleetError::ZeroCapacity);
        }
        Ok(Self {
            vehicle_count,
            speed_kmh,
            capacity_kg,
        })
    }

    /// Number of vehicles available.
    #[must_use]
    pub const fn vehicle_count(&self) -> u32 {
        self.vehicle_count
    }

    /// Shared travel speed in km/h.
    #[must_use]
    pub const fn speed_kmh(&self) -> u32 {
        self.speed_kmh
    }

    /// Shared carrying capacity in kilograms.
    #[must_use]
    pub const fn capacity_kg(&self) -> u32 {
        self.capacity_kg
    }

    /// One-way travel time in hours for `distance_km` at fleet speed.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "simulated time is tracked in fractional hours"
    )]
    pub fn leg_hours(&self, distance_km: u32) -> f64 {
        f64::from(distance_km) / f64::from(self.speed_kmh)
    }
}

/// One vehicle and the hour at which it is next free.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Vehicle {
    /// One-based vehicle number.
    pub id: u32,
    /// Simulated hour at which the vehicle can start its next trip.
    pub available_at: f64,
}

impl Vehicle {
    /// Send the vehicle out on a trip whose slowest leg takes `trip_hours`
    /// and return the hour it is back at the depot.
    ///
    /// The return journey mirrors the outbound leg, so the vehicle is away
    /// for twice the trip duration.
    #[expect(
        clippy::float_arithmetic,
        reason = "simulated time is tracked in fractional hours"
    )]
    pub fn dispatch(&mut self, trip_hours: f64) -> f64 {
        self.available_at += 2.0 * trip_hours;
        self.available_at
    }
}

/// Mutable availability state for every vehicle in a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Create a fleet where every vehicle is free at hour zero.
    #[must_use]
    pub fn new(spec: &FleetSpec) -> Self {
        Self::with_vehicles(spec.vehicle_count())
    }

    /// Create only the vehicles a run over `parcels` parcels can dispatch.
    ///
    /// Every trip carries at least one parcel, so vehicles beyond the parcel
    /// count would never leave the depot. Ids still start at 1, so the
    /// lowest-id tie-break matches [`Fleet::new`].
    #[must_use]
    pub fn for_parcels(spec: &FleetSpec, parcels: usize) -> Self {
        let count = u32::try_from(parcels)
            .map_or(spec.vehicle_count(), |limit| limit.min(spec.vehicle_count()));
        Self::with_vehicles(count)
    }

    fn with_vehicles(count: u32) -> Self {
        let vehicles = (1..=count)
            .map(|id| Vehicle {
                id,
                available_at: 0.0,
            })
            .collect();
        Self { vehicles }
    }

    /// All vehicles in id order.
    #[must_use]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The vehicle that frees up first, preferring the lowest id on ties.
    #[must_use]
    pub fn next_available(&self) -> Option<&Vehicle> {
        self.vehicles
            .iter()
            .min_by(|lhs, rhs| lhs.available_at.total_cmp(&rhs.available_at))
    }

    /// Send vehicle `id` out for `trip_hours` and return when it is back.
    ///
    /// Returns `None` when no vehicle has that id.
    pub fn dispatch(&mut self, id: u32, trip_hours: f64) -> Option<f64> {
        self.vehicles
            .iter_mut()
            .find(|vehicle| vehicle.id == id)
            .map(|vehicle| vehicle.dispatch(trip_hours))
    }
}
