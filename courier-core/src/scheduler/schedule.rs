//! Output records produced by a scheduling run.

/// Timing and pricing for one delivered parcel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeliveryResult {
    /// Identifier of the delivered parcel.
    pub package_id: String,
    /// Vehicle that carried it.
    pub vehicle_id: u32,
    /// Parcel weight in kilograms.
    pub weight_kg: u32,
    /// Amount taken off the undiscounted cost.
    pub discount: f64,
    /// Amount payable after the discount.
    pub final_cost: f64,
    /// Hour the carrying vehicle left the depot.
    pub dispatched_at: f64,
    /// Hour the parcel reached its destination.
    pub completed_at: f64,
    /// Hour the carrying vehicle was back at the depot.
    pub vehicle_available_at: f64,
}

/// One vehicle dispatch cycle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trip {
    /// Vehicle sent out.
    pub vehicle_id: u32,
    /// Hour the vehicle left the depot.
    pub dispatched_at: f64,
    /// Hour the vehicle returned.
    pub returns_at: f64,
    /// Parcels carried, in pending order.
    pub package_ids: Vec<String>,
    /// Combined weight carried.
    pub load_kg: u64,
}

/// Complete result of a scheduling run.
///
/// Deliveries appear in trip order and, within a trip, in the order the
/// parcels were submitted.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Schedule {
    /// One record per parcel.
    pub deliveries: Vec<DeliveryResult>,
    /// One record per dispatch.
    pub trips: Vec<Trip>,
}

impl Schedule {
    /// Find the delivery for `package_id`.
    #[must_use]
    pub fn delivery(&self, package_id: &str) -> Option<&DeliveryResult> {
        self.deliveries
            .iter()
            .find(|delivery| delivery.package_id == package_id)
    }

    /// Hour the last parcel arrives, or zero for an empty run.
    #[must_use]
    pub fn last_completion(&self) -> f64 {
        self.deliveries
            .iter()
            .map(|delivery| delivery.completed_at)
            .fold(0.0, f64::max)
    }

    /// Whether no parcels were scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }
}
