//! Fixtures shared by unit and behaviour tests.
//!
//! Gated behind the `test-support` feature (and `cfg(test)`).

use crate::{Consignment, Offer, Package, Tariff};

/// Construct a [`Package`] with no offer code.
///
/// # Panics
///
/// Panics when `id` is blank or `weight_kg` is zero.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures are built from known-good literals")]
pub fn package(id: &str, weight_kg: u32, distance_km: u32) -> Package {
    Package::new(id, weight_kg, distance_km, "").expect("valid fixture package")
}

/// Price a fixture [`package`] with base cost 100 under [`standard_tariff`].
///
/// # Panics
///
/// Panics when `id` is blank or `weight_kg` is zero.
#[must_use]
pub fn consignment(id: &str, weight_kg: u32, distance_km: u32) -> Consignment {
    Consignment::new(
        package(id, weight_kg, distance_km),
        100,
        &standard_tariff(),
    )
}

/// The three stock offers with rates of 10 per kg and 5 per km.
///
/// # Examples
/// ```rust
/// use courier_core::test_support::standard_tariff;
///
/// let tariff = standard_tariff();
/// assert_eq!(tariff.offers().len(), 3);
/// assert_eq!(tariff.weight_cost_per_kg(), 10);
/// ```
///
/// # Panics
///
/// Never in practice; the table is a fixed literal.
#[must_use]
#[expect(clippy::expect_used, reason = "the stock table is a known-good literal")]
pub fn standard_tariff() -> Tariff {
    let offers = vec![
        stock_offer("OFR001", 0.1, (0, 200), (70, 200)),
        stock_offer("OFR002", 0.07, (50, 150), (100, 250)),
        stock_offer("OFR003", 0.05, (50, 250), (10, 150)),
    ];
    Tariff::new(offers, 10, 5).expect("stock tariff is valid")
}

fn stock_offer(code: &str, discount: f64, distance: (u32, u32), weight: (u32, u32)) -> Offer {
    Offer {
        code: code.to_owned(),
        discount,
        min_distance: distance.0,
        max_distance: distance.1,
        min_weight: weight.0,
        max_weight: weight.1,
    }
}
