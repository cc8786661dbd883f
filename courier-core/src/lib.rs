//! Core domain types for the courier engine.
//!
//! Parcels are priced against an explicit [`Tariff`] and then handed to a
//! [`Scheduler`], which loads them onto a fleet of identical vehicles trip by
//! trip. Which parcels share a trip is decided by a [`BatchSelector`]. No I/O
//! happens here; loaders and renderers live in the CLI crate.
//!
//! ```
//! use courier_core::{price_all, schedule_all, FleetSpec, Package, Tariff};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tariff = Tariff::new(Vec::new(), 10, 5)?;
//! let packages = vec![Package::new("PKG1", 50, 30, "")?];
//! let fleet = FleetSpec::new(1, 70, 200)?;
//! let schedule = schedule_all(price_all(packages, 100, &tariff), &fleet)?;
//! assert_eq!(schedule.deliveries.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cost;
mod fleet;
mod offer;
mod package;
mod scheduler;
mod selector;
mod tariff;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use cost::{Consignment, DiscountOutcome, Quote, price_all, quote};
pub use fleet::{Fleet, FleetError, FleetSpec, Vehicle};
pub use offer::Offer;
pub use package::{Package, PackageError};
pub use scheduler::{DeliveryResult, Schedule, ScheduleError, Scheduler, Trip, schedule_all};
pub use selector::{
    Batch, BatchSelector, DEFAULT_EXHAUSTIVE_LIMIT, ExhaustiveSelector, GreedySelector,
    MAX_EXHAUSTIVE_LIMIT, ParseSelectorKindError, SelectorKind,
};
pub use tariff::{Tariff, TariffError};
