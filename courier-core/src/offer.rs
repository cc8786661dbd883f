//! Discount offers keyed by promotional code.

/// A discount rule applied when a parcel's weight and distance both fall
/// inside the offer's inclusive ranges.
///
/// Field names follow the JSON layout of the tariff file (`minDistance`,
/// `maxWeight`, ...).
///
/// # Examples
///
/// ```
/// use courier_core::Offer;
///
/// let offer = Offer {
///     code: "OFR003".into(),
///     discount: 0.05,
///     min_distance: 50,
///     max_distance: 250,
///     min_weight: 10,
///     max_weight: 150,
/// };
/// assert!(offer.applies_to(10, 100));
/// assert!(!offer.applies_to(10, 251));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Offer {
    /// Code quoted by the customer.
    pub code: String,
    /// Discount as a fraction of the total cost, in `[0.0, 1.0]`.
    pub discount: f64,
    /// Smallest qualifying distance in kilometres.
    pub min_distance: u32,
    /// Largest qualifying distance in kilometres.
    pub max_distance: u32,
    /// Smallest qualifying weight in kilograms.
    pub min_weight: u32,
    /// Largest qualifying weight in kilograms.
    pub max_weight: u32,
}

impl Offer {
    /// Whether a parcel of the given weight and distance qualifies.
    #[must_use]
    pub const fn applies_to(&self, weight_kg: u32, distance_km: u32) -> bool {
        weight_kg >= self.min_weight
            && weight_kg <= self.max_weight
            && distance_km >= self.min_distance
            && distance_km <= self.max_distance
    }
}
