//! Per-run pricing reference data.
//!
//! A [`Tariff`] bundles the offer table with the per-kilogram and
//! per-kilometre rates. It is passed explicitly into pricing so that each
//! run works from an immutable snapshot rather than process-wide state.

use std::collections::HashSet;

use thiserror::Error;

use crate::Offer;

/// Offer table and unit rates used to price parcels.
///
/// # Examples
///
/// ```
/// use courier_core::{Offer, Tariff};
///
/// # fn main() -> Result<(), courier_core::TariffError> {
/// let offers = vec![Offer {
///     code: "OFR003".into(),
///     discount: 0.05,
///     min_distance: 50,
///     max_distance: 250,
///     min_weight: 10,
///     max_weight: 150,
/// }];
/// let tariff = Tariff::new(offers, 10, 5)?;
/// assert!(tariff.offer("OFR003").is_some());
/// assert!(tariff.offer("ofr003").is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tariff {
    offers: Vec<Offer>,
    #[cfg_attr(feature = "serde", serde(rename = "weightCostPerKG"))]
    weight_cost_per_kg: u32,
    #[cfg_attr(feature = "serde", serde(rename = "distanceCostPerKM"))]
    distance_cost_per_km: u32,
}

/// Reasons a tariff is rejected by [`Tariff::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TariffError {
    /// The per-kilogram rate was zero.
    #[error("weight cost per kg must be positive")]
    ZeroWeightRate,
    /// The per-kilometre rate was zero.
    #[error("distance cost per km must be positive")]
    ZeroDistanceRate,
    /// An offer had a blank code.
    #[error("offer at position {position} has an empty code")]
    EmptyOfferCode {
        /// One-based position of the offer in the table.
        position: usize,
    },
    /// Two offers shared a code, making lookups ambiguous.
    #[error("offer code {code} is defined more than once")]
    DuplicateOffer {
        /// The repeated code.
        code: String,
    },
    /// A discount fell outside `[0.0, 1.0]` or was not finite.
    #[error("offer {code} has discount {discount}, expected a fraction between 0 and 1")]
    DiscountOutOfRange {
        /// Offending offer code.
        code: String,
        /// Discount read from the table.
        discount: f64,
    },
    /// `minWeight` exceeded `maxWeight`.
    #[error("offer {code} has minWeight above maxWeight")]
    InvertedWeightRange {
        /// Offending offer code.
        code: String,
    },
    /// `minDistance` exceeded `maxDistance`.
    #[error("offer {code} has minDistance above maxDistance")]
    InvertedDistanceRange {
        /// Offending offer code.
        code: String,
    },
}

impl Tariff {
    /// Validates and constructs a [`Tariff`].
    ///
    /// # Errors
    ///
    /// Returns the first [`TariffError`] found by [`Tariff::validate`].
    pub fn new(
        offers: Vec<Offer>,
        weight_cost_per_kg: u32,
        distance_cost_per_km: u32,
    ) -> Result<Self, TariffError> {
        let tariff = Self {
            offers,
            weight_cost_per_kg,
            distance_cost_per_km,
        };
        tariff.validate()?;
        Ok(tariff)
    }

    /// Check rates and offers for consistency.
    ///
    /// Deserialised tariffs bypass [`Tariff::new`], so loaders must call this
    /// before using the value.
    ///
    /// # Errors
    ///
    /// Returns a [`TariffError`] describing the first inconsistency found.
    pub fn validate(&self) -> Result<(), TariffError> {
        if self.weight_cost_per_kg == 0 {
            return Err(TariffError::ZeroWeightRate);
        }
        if self.distance_cost_per_km == 0 {
            return Err(TariffError::ZeroDistanceRate);
        }
        let mut seen = HashSet::with_capacity(self.offers.len());
        for (index, offer) in self.offers.iter().enumerate() {
            validate_offer(offer, index.saturating_add(1))?;
            if !seen.insert(offer.code.as_str()) {
                return Err(TariffError::DuplicateOffer {
                    code: offer.code.clone(),
                });
            }
        }
        Ok(())
    }

    /// All configured offers, in file order.
    #[must_use]
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Look up an offer by exact, case-sensitive code.
    #[must_use]
    pub fn offer(&self, code: &str) -> Option<&Offer> {
        self.offers.iter().find(|offer| offer.code == code)
    }

    /// Cost charged per kilogram of parcel weight.
    #[must_use]
    pub const fn weight_cost_per_kg(&self) -> u32 {
        self.weight_cost_per_kg
    }

    /// Cost charged per kilometre of delivery distance.
    #[must_use]
    pub const fn distance_cost_per_km(&self) -> u32 {
        self.distance_cost_per_km
    }
}

fn validate_offer(offer: &Offer, position: usize) -> Result<(), TariffError> {
    if offer.code.trim().is_empty() {
        return Err(TariffError::EmptyOfferCode { position });
    }
    if !offer.discount.is_finite() || !(0.0..=1.0).contains(&offer.discount) {
        return Err(TariffError::DiscountOutOfRange {
            code: offer.code.clone(),
            discount: offer.discount,
        });
    }
    if offer.min_weight > offer.max_weight {
        return Err(TariffError::InvertedWeightRange {
            code: offer.code.clone(),
        });
    }
    if offer.min_distance > offer.max_distance {
        return Err(TariffError::InvertedDistanceRange {
            code: offer.code.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn offer() -> Offer {
        Offer {
            code: "OFR001".into(),
            discount: 0.1,
            min_distance: 0,
            max_distance: 200,
            min_weight: 70,
            max_weight: 200,
        }
    }

    #[rstest]
    fn accepts_well_formed_table(offer: Offer) {
        let tariff = Tariff::new(vec![offer], 10, 5).expect("valid tariff");
        assert_eq!(tariff.offers().len(), 1);
        assert_eq!(tariff.weight_cost_per_kg(), 10);
        assert_eq!(tariff.distance_cost_per_km(), 5);
    }

    #[rstest]
    #[case(0, 5, TariffError::ZeroWeightRate)]
    #[case(10, 0, TariffError::ZeroDistanceRate)]
    fn rejects_zero_rates(
        offer: Offer,
        #[case] per_kg: u32,
        #[case] per_km: u32,
        #[case] expected: TariffError,
    ) {
        assert_eq!(Tariff::new(vec![offer], per_kg, per_km), Err(expected));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn rejects_discount_outside_unit_interval(mut offer: Offer, #[case] discount: f64) {
        offer.discount = discount;
        let err = Tariff::new(vec![offer], 10, 5).expect_err("bad discount");
        assert!(matches!(err, TariffError::DiscountOutOfRange { .. }));
    }

    #[rstest]
    fn rejects_inverted_ranges(offer: Offer) {
        let mut heavy = offer.clone();
        heavy.min_weight = 300;
        assert!(matches!(
            Tariff::new(vec![heavy], 10, 5),
            Err(TariffError::InvertedWeightRange { .. })
        ));

        let mut far = offer;
        far.min_distance = 300;
        assert!(matches!(
            Tariff::new(vec![far], 10, 5),
            Err(TariffError::InvertedDistanceRange { .. })
        ));
    }

    #[rstest]
    fn rejects_duplicate_and_blank_codes(offer: Offer) {
        let duplicate = Tariff::new(vec![offer.clone(), offer.clone()], 10, 5);
        assert_eq!(
            duplicate,
            Err(TariffError::DuplicateOffer {
                code: "OFR001".into()
            })
        );

        let mut blank = offer.clone();
        blank.code = String::new();
        assert_eq!(
            Tariff::new(vec![offer, blank], 10, 5),
            Err(TariffError::EmptyOfferCode { position: 2 })
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_tariff_file_layout() {
        let json = r#"{
            "offers": [
                {
                    "code": "OFR003",
                    "discount": 0.05,
                    "minDistance": 50,
                    "maxDistance": 250,
                    "minWeight": 10,
                    "maxWeight": 150
                }
            ],
            "distanceCostPerKM": 5,
            "weightCostPerKG": 10
        }"#;
        let tariff: Tariff = serde_json::from_str(json).expect("parse tariff");
        tariff.validate().expect("valid tariff");
        let offer = tariff.offer("OFR003").expect("offer present");
        assert_eq!(offer.max_distance, 250);
        assert_eq!(tariff.distance_cost_per_km(), 5);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn missing_rates_fail_to_deserialise() {
        let json = r#"{ "offers": [], "distanceCostPerKM": 5 }"#;
        assert!(serde_json::from_str::<Tariff>(json).is_err());
    }
}
