//! Error types emitted by the courier CLI.
//!
//! Input errors keep the wording of the legacy `calculateCost` and
//! `calculateTimeAndCost` commands, which existing scripts match against.

use std::sync::Arc;

use camino::Utf8PathBuf;
use courier_core::{ScheduleError, TariffError};
use thiserror::Error;

/// Errors emitted by the courier CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// Too few or too many positional arguments.
    #[error("Usage: courier {usage}")]
    Usage { usage: &'static str },
    /// The base delivery cost was not a non-negative integer.
    #[error("Invalid base delivery cost")]
    InvalidBaseCost,
    /// The package count was not a positive integer.
    #[error("Invalid number of packages")]
    InvalidPackageCount,
    /// A package description did not have exactly four fields.
    #[error("Invalid package details for package {position}")]
    InvalidPackageDetails { position: usize },
    /// A package weight was not a positive integer.
    #[error("Invalid weight for package {position}")]
    InvalidWeight { position: usize },
    /// A package distance was not a non-negative integer.
    #[error("Invalid distance for package {position}")]
    InvalidDistance { position: usize },
    /// The vehicle count was not a positive integer.
    #[error("Invalid number of vehicles")]
    InvalidVehicleCount,
    /// The vehicle speed was not a positive integer.
    #[error("Invalid max vehicle speed")]
    InvalidSpeed,
    /// The vehicle capacity was not a positive integer.
    #[error("Invalid vehicle capacity")]
    InvalidCapacity,
    /// Opening the tariff file failed.
    #[error("failed to open tariff at {path:?}: {source}")]
    OpenTariff {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Tariff JSON could not be decoded.
    #[error("failed to parse tariff JSON at {path:?}: {source}")]
    ParseTariff {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The tariff decoded but is inconsistent.
    #[error("tariff in {path:?} failed validation: {source}")]
    InvalidTariff {
        path: Utf8PathBuf,
        #[source]
        source: TariffError,
    },
    /// The scheduler rejected the packages or fleet.
    #[error("scheduling failed: {0}")]
    Schedule(#[from] ScheduleError),
    /// Serializing JSON output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
