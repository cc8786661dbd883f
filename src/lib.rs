//! Facade crate for the courier delivery engine.
//!
//! This crate re-exports the pricing and scheduling types from
//! `courier-core` so applications depend on a single crate.

#![forbid(unsafe_code)]

pub use courier_core::{
    Batch, BatchSelector, Consignment, DEFAULT_EXHAUSTIVE_LIMIT, DeliveryResult, DiscountOutcome,
    ExhaustiveSelector, Fleet, FleetError, FleetSpec, GreedySelector, MAX_EXHAUSTIVE_LIMIT, Offer,
    Package, PackageError, ParseSelectorKindError, Quote, Schedule, ScheduleError, Scheduler,
    SelectorKind, Tariff, TariffError, Trip, Vehicle, price_all, quote, schedule_all,
};

#[cfg(feature = "test-support")]
pub use courier_core::test_support;
