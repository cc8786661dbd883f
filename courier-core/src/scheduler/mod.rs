//! Assign priced parcels to vehicles and simulate delivery times.
//!
//! The [`Scheduler`] repeatedly takes the vehicle that frees up first, asks
//! its [`BatchSelector`] for the parcels to load, and advances that vehicle's
//! clock by a round trip to the farthest parcel. The loop ends when nothing
//! is left at the depot.
//!
//! Inputs that could never finish are rejected before the first trip: a
//! parcel heavier than the vehicles can carry would otherwise sit in the
//! pending set forever.

mod schedule;

use std::collections::HashSet;

use thiserror::Error;

use crate::{BatchSelector, Consignment, ExhaustiveSelector, Fleet, FleetSpec};

pub use schedule::{DeliveryResult, Schedule, Trip};

/// Errors returned by [`Scheduler::schedule`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// Two parcels shared an identifier.
    #[error("package {id} appears more than once")]
    DuplicatePackage {
        /// The repeated identifier.
        id: String,
    },
    /// A parcel could never fit in a vehicle.
    #[error("package {id} weighs {weight_kg} kg, above the vehicle capacity of {capacity_kg} kg")]
    ExceedsCapacity {
        /// Identifier of the oversized parcel.
        id: String,
        /// Its weight.
        weight_kg: u32,
        /// Fleet capacity.
        capacity_kg: u32,
    },
    /// The selector cannot search a pending set this large.
    #[error("{count} packages exceed the selector limit of {limit}")]
    TooManyPending {
        /// Parcels submitted.
        count: usize,
        /// Largest pending set the selector accepts.
        limit: usize,
    },
    /// The selector returned an empty batch while parcels were waiting.
    #[error("no progress possible with {pending} packages still pending")]
    Stalled {
        /// Parcels left undelivered.
        pending: usize,
    },
}

/// Drives a [`BatchSelector`] over a fleet until every parcel is delivered.
///
/// # Examples
///
/// ```
/// use courier_core::{price_all, FleetSpec, GreedySelector, Package, Scheduler, Tariff};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tariff = Tariff::new(Vec::new(), 10, 5)?;
/// let packages = vec![
///     Package::new("PKG1", 50, 30, "")?,
///     Package::new("PKG2", 75, 125, "")?,
///     Package::new("PKG3", 175, 100, "")?,
/// ];
/// let fleet = FleetSpec::new(2, 70, 200)?;
/// let consignments = price_all(packages, 100, &tariff);
/// let schedule = Scheduler::new(GreedySelector).schedule(consignments, &fleet)?;
/// assert_eq!(schedule.trips.len(), 2);
/// assert_eq!(schedule.delivery("PKG3").map(|d| d.vehicle_id), Some(1));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scheduler<S = ExhaustiveSelector> {
    selector: S,
}

impl<S> Scheduler<S>
where
    S: BatchSelector,
{
    /// Construct a scheduler around `selector`.
    #[must_use]
    pub const fn new(selector: S) -> Self {
        Self { selector }
    }

    /// The selection strategy in use.
    #[must_use]
    pub const fn selector(&self) -> &S {
        &self.selector
    }

    /// Deliver every consignment with the given fleet.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::DuplicatePackage`],
    /// [`ScheduleError::ExceedsCapacity`] or
    /// [`ScheduleError::TooManyPending`] before any trip is planned, and
    /// [`ScheduleError::Stalled`] if the selector stops making progress.
    pub fn schedule(
        &self,
        consignments: Vec<Consignment>,
        fleet: &FleetSpec,
    ) -> Result<Schedule, ScheduleError> {
        preflight(&consignments, fleet, self.selector.pending_limit())?;

        let mut vehicles = Fleet::for_parcels(fleet, consignments.len());
        let mut pending = consignments;
        let mut schedule = Schedule {
            deliveries: Vec::with_capacity(pending.len()),
            trips: Vec::new(),
        };

        while !pending.is_empty() {
            let Some((vehicle_id, dispatched_at)) = vehicles
                .next_available()
                .map(|vehicle| (vehicle.id, vehicle.available_at))
            else {
                return Err(ScheduleError::Stalled {
                    pending: pending.len(),
                });
            };

            let batch = self.selector.select(&pending, fleet.capacity_kg());
            let (loaded, waiting) = take_batch(pending, batch.indices());
            pending = waiting;
            if loaded.is_empty() {
                return Err(ScheduleError::Stalled {
                    pending: pending.len(),
                });
            }

            let farthest_km = loaded
                .iter()
                .map(Consignment::distance_km)
                .max()
                .unwrap_or_default();
            let Some(returns_at) = vehicles.dispatch(vehicle_id, fleet.leg_hours(farthest_km))
            else {
                return Err(ScheduleError::Stalled {
                    pending: pending.len().saturating_add(loaded.len()),
                });
            };

            let trip = Trip {
                vehicle_id,
                dispatched_at,
                returns_at,
                package_ids: loaded.iter().map(|item| item.id().to_owned()).collect(),
                load_kg: loaded.iter().map(|item| u64::from(item.weight_kg())).sum(),
            };
            log::debug!(
                "vehicle {vehicle_id} leaves at {dispatched_at:.2} h with {} parcels ({} kg), back at {returns_at:.2} h",
                trip.package_ids.len(),
                trip.load_kg
            );
            debug_assert!(
                trip.load_kg <= u64::from(fleet.capacity_kg()),
                "selector overloaded vehicle {vehicle_id}"
            );

            schedule.deliveries.extend(
                loaded
                    .iter()
                    .map(|item| deliver(item, vehicle_id, dispatched_at, returns_at, fleet)),
            );
            schedule.trips.push(trip);
        }

        log::info!(
            "scheduled {} parcels over {} trips, last arrival at {:.2} h",
            schedule.deliveries.len(),
            schedule.trips.len(),
            schedule.last_completion()
        );
        Ok(schedule)
    }
}

/// Schedule with the default [`ExhaustiveSelector`].
///
/// # Errors
///
/// See [`Scheduler::schedule`].
pub fn schedule_all(
    consignments: Vec<Consignment>,
    fleet: &FleetSpec,
) -> Result<Schedule, ScheduleError> {
    Scheduler::<ExhaustiveSelector>::default().schedule(consignments, fleet)
}

fn preflight(
    pending: &[Consignment],
    fleet: &FleetSpec,
    limit: Option<usize>,
) -> Result<(), ScheduleError> {
    let mut seen = HashSet::with_capacity(pending.len());
    for item in pending {
        if !seen.insert(item.id()) {
            return Err(ScheduleError::DuplicatePackage {
                id: item.id().to_owned(),
            });
        }
        if item.weight_kg() > fleet.capacity_kg() {
            return Err(ScheduleError::ExceedsCapacity {
                id: item.id().to_owned(),
                weight_kg: item.weight_kg(),
                capacity_kg: fleet.capacity_kg(),
            });
        }
    }
    if let Some(limit) = limit
        && pending.len() > limit
    {
        return Err(ScheduleError::TooManyPending {
            count: pending.len(),
            limit,
        });
    }
    Ok(())
}

/// Split `pending` into the selected parcels and those left waiting, both in
/// their original order. `indices` must be ascending.
fn take_batch(
    pending: Vec<Consignment>,
    indices: &[usize],
) -> (Vec<Consignment>, Vec<Consignment>) {
    let mut loaded = Vec::with_capacity(indices.len());
    let mut waiting = Vec::with_capacity(pending.len().saturating_sub(indices.len()));
    for (idx, item) in pending.into_iter().enumerate() {
        if indices.binary_search(&idx).is_ok() {
            loaded.push(item);
        } else {
            waiting.push(item);
        }
    }
    (loaded, waiting)
}

fn deliver(
    item: &Consignment,
    vehicle_id: u32,
    dispatched_at: f64,
    returns_at: f64,
    fleet: &FleetSpec,
) -> DeliveryResult {
    let completed_at = arrival(dispatched_at, fleet.leg_hours(item.distance_km()));
    DeliveryResult {
        weight_kg: item.weight_kg(),
        discount: item.quote.discount,
        final_cost: item.quote.final_cost,
        package_id: item.id().to_owned(),
        vehicle_id,
        dispatched_at,
        completed_at,
        vehicle_available_at: returns_at,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "simulated time is tracked in fractional hours"
)]
fn arrival(dispatched_at: f64, leg_hours: f64) -> f64 {
    dispatched_at + leg_hours
}
