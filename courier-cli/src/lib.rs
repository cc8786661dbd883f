//! Command-line interface for the courier delivery engine.
//!
//! `courier cost` prices a batch of packages against a JSON tariff and
//! `courier schedule` additionally estimates when each one is delivered by
//! a fleet of identical vehicles.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

mod cost;
mod error;
mod input;
mod render;
mod schedule;
mod tariff;

pub use error::CliError;

use cost::{CostCommand, run_cost_with};
use schedule::{ScheduleCommand, run_schedule_with};

const ARG_TARIFF: &str = "tariff";
const ARG_FORMAT: &str = "format";
const ARG_SELECTOR: &str = "selector";
const ARG_EXHAUSTIVE_LIMIT: &str = "exhaustive-limit";
const DEFAULT_TARIFF_PATH: &str = "config/app_config.json";

/// Run the courier CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_with(cli, &mut stdout)
}

fn run_with(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Cost(command) => run_cost_with(command, writer),
        Command::Schedule(command) => run_schedule_with(command, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Price courier deliveries and estimate delivery times",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price each package, applying any matching offer code.
    #[command(alias = "calculateCost")]
    Cost(CostCommand),
    /// Price each package and estimate its delivery time.
    #[command(alias = "calculateTimeAndCost")]
    Schedule(ScheduleCommand),
}

/// Output encoding shared by both commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable blocks.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[cfg(test)]
mod tests;
