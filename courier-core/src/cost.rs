//! Delivery cost and discount calculation.
//!
//! Pricing is a flat formula over the [`Tariff`]:
//! `base + weight * per_kg + distance * per_km`, less the matched offer's
//! discount when the parcel falls inside both of the offer's ranges.

use std::fmt;

use crate::{Package, Tariff};

/// Why a discount was or was not granted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "outcome", rename_all = "snake_case")
)]
pub enum DiscountOutcome {
    /// The offer matched and its discount was applied.
    Applied {
        /// Discount as a fraction of the total cost.
        rate: f64,
    },
    /// The code matched an offer but weight or distance fell outside it.
    CriteriaNotMet,
    /// No offer uses the supplied code.
    ///
    /// Reported as "Offer code not recognised". The legacy tool used the
    /// criteria-not-met text for unknown codes too, so scripts matching that
    /// text must also accept this one.
    UnknownCode,
}

impl fmt::Display for DiscountOutcome {
    #[expect(
        clippy::float_arithmetic,
        reason = "percentages are rendered from fractional discount rates"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied { rate } => write!(f, "Discount of {:.0}% applied", rate * 100.0),
            Self::CriteriaNotMet => f.write_str("Offer not applicable as criteria not met"),
            Self::UnknownCode => f.write_str("Offer code not recognised"),
        }
    }
}

/// Itemised price for one parcel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Quote {
    /// Flat base delivery charge.
    pub base_cost: f64,
    /// Weight component of the charge.
    pub weight_cost: f64,
    /// Distance component of the charge.
    pub distance_cost: f64,
    /// Undiscounted total.
    pub total_cost: f64,
    /// Amount taken off the total.
    pub discount: f64,
    /// Amount payable after the discount.
    pub final_cost: f64,
    /// Explanation of the discount decision.
    pub outcome: DiscountOutcome,
}

/// Price a parcel against the tariff.
///
/// # Examples
///
/// ```
/// use courier_core::{quote, DiscountOutcome, Offer, Package, Tariff};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let offer = Offer {
///     code: "OFR003".into(),
///     discount: 0.05,
///     min_distance: 50,
///     max_distance: 250,
///     min_weight: 10,
///     max_weight: 150,
/// };
/// let tariff = Tariff::new(vec![offer], 10, 5)?;
/// let package = Package::new("PKG3", 10, 100, "OFR003")?;
/// let priced = quote(100, &package, &tariff);
/// assert_eq!(priced.total_cost, 700.0);
/// assert_eq!(priced.discount, 35.0);
/// assert_eq!(priced.final_cost, 665.0);
/// assert!(matches!(priced.outcome, DiscountOutcome::Applied { .. }));
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "costs and discounts are currency amounts in floating point"
)]
pub fn quote(base_cost: u32, package: &Package, tariff: &Tariff) -> Quote {
    let base = f64::from(base_cost);
    let weight_cost = f64::from(package.weight_kg()) * f64::from(tariff.weight_cost_per_kg());
    let distance_cost =
        f64::from(package.distance_km()) * f64::from(tariff.distance_cost_per_km());
    let total_cost = base + weight_cost + distance_cost;

    let outcome = match tariff.offer(package.offer_code()) {
        Some(offer) if offer.applies_to(package.weight_kg(), package.distance_km()) => {
            DiscountOutcome::Applied {
                rate: offer.discount,
            }
        }
        Some(_) => DiscountOutcome::CriteriaNotMet,
        None => DiscountOutcome::UnknownCode,
    };
    if !matches!(outcome, DiscountOutcome::Applied { .. }) {
        log::debug!("no discount for {}: {outcome}", package.id());
    }
    let discount = match outcome {
        DiscountOutcome::Applied { rate } => total_cost * rate,
        DiscountOutcome::CriteriaNotMet | DiscountOutcome::UnknownCode => 0.0,
    };

    Quote {
        base_cost: base,
        weight_cost,
        distance_cost,
        total_cost,
        discount,
        final_cost: total_cost - discount,
        outcome,
    }
}

/// A parcel together with its price, ready for scheduling.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Consignment {
    /// The parcel itself.
    pub package: Package,
    /// Its price under the run's tariff.
    pub quote: Quote,
}

impl Consignment {
    /// Price `package` and attach the quote.
    #[must_use]
    pub fn new(package: Package, base_cost: u32, tariff: &Tariff) -> Self {
        let priced = quote(base_cost, &package, tariff);
        Self {
            package,
            quote: priced,
        }
    }

    /// Identifier of the underlying parcel.
    #[must_use]
    pub fn id(&self) -> &str {
        self.package.id()
    }

    /// Weight of the underlying parcel in kilograms.
    #[must_use]
    pub const fn weight_kg(&self) -> u32 {
        self.package.weight_kg()
    }

    /// Distance of the underlying parcel in kilometres.
    #[must_use]
    pub const fn distance_km(&self) -> u32 {
        self.package.distance_km()
    }
}

/// Price every parcel in input order.
#[must_use]
pub fn price_all<I>(packages: I, base_cost: u32, tariff: &Tariff) -> Vec<Consignment>
where
    I: IntoIterator<Item = Package>,
{
    packages
        .into_iter()
        .map(|package| Consignment::new(package, base_cost, tariff))
        .collect()
}
