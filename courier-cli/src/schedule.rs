//! `schedule` command: price packages and estimate their delivery times.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Args, Parser};
use courier_core::{DEFAULT_EXHAUSTIVE_LIMIT, FleetSpec, Scheduler, SelectorKind, price_all};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{Shipment, parse_schedule_inputs};
use crate::render::write_schedule;
use crate::tariff::load_tariff;
use crate::{
    ARG_EXHAUSTIVE_LIMIT, ARG_FORMAT, ARG_SELECTOR, ARG_TARIFF, CliError, DEFAULT_TARIFF_PATH,
    OutputFormat,
};

/// Layered options for the `schedule` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "schedule")]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct ScheduleArgs {
    /// Path to the JSON tariff with offers and per-unit rates.
    #[arg(long = ARG_TARIFF, value_name = "path")]
    #[serde(default)]
    pub(crate) tariff: Option<Utf8PathBuf>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_name = "format", value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Strategy choosing which packages share a trip.
    #[arg(long = ARG_SELECTOR, value_name = "exhaustive|greedy")]
    #[serde(default)]
    pub(crate) selector: Option<SelectorKind>,
    /// Pending packages the exhaustive selector considers per trip (1-32).
    #[arg(long = ARG_EXHAUSTIVE_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) exhaustive_limit: Option<usize>,
}

impl ScheduleArgs {
    fn into_config(self) -> Result<ScheduleConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(ScheduleConfig::from(merged))
    }
}

/// Resolved `schedule` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScheduleConfig {
    pub(crate) tariff: Utf8PathBuf,
    pub(crate) format: OutputFormat,
    pub(crate) selector: SelectorKind,
    pub(crate) exhaustive_limit: usize,
}

impl From<ScheduleArgs> for ScheduleConfig {
    fn from(args: ScheduleArgs) -> Self {
        Self {
            tariff: args
                .tariff
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_TARIFF_PATH)),
            format: args.format.unwrap_or_default(),
            selector: args.selector.unwrap_or_default(),
            exhaustive_limit: args.exhaustive_limit.unwrap_or(DEFAULT_EXHAUSTIVE_LIMIT),
        }
    }
}

/// Options plus the positional package and fleet arguments.
#[derive(Debug, Clone, Args)]
#[command(
    long_about = "Price each package, then load packages onto a fleet of \
                  identical vehicles trip by trip and report when each one \
                  is delivered. Vehicles travel at a constant speed and \
                  return to the depot before their next trip.",
    about = "Estimate delivery time and cost for each package",
    allow_negative_numbers = true
)]
pub(crate) struct ScheduleCommand {
    #[command(flatten)]
    pub(crate) options: ScheduleArgs,
    /// `<base_delivery_cost> <no_of_packages> <package>... <no_of_vehicles>
    /// <max_speed> <max_carriable_weight>`
    #[arg(value_name = "input")]
    pub(crate) inputs: Vec<String>,
}

pub(crate) fn run_schedule_with(
    command: ScheduleCommand,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let ScheduleCommand { options, inputs } = command;
    let (shipment, fleet) = parse_schedule_inputs(&inputs)?;
    let config = options.into_config()?;
    execute_schedule(&config, shipment, &fleet, writer)
}

fn execute_schedule(
    config: &ScheduleConfig,
    shipment: Shipment,
    fleet: &FleetSpec,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let tariff = load_tariff(&config.tariff)?;
    let consignments = price_all(shipment.packages, shipment.base_cost, &tariff);
    log::debug!(
        "scheduling with the {} selector (exhaustive limit {})",
        config.selector,
        config.exhaustive_limit
    );
    let scheduler = Scheduler::new(config.selector.build(config.exhaustive_limit));
    let schedule = scheduler.schedule(consignments, fleet)?;
    write_schedule(writer, &schedule, config.format)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScheduleConfig, CliError> {
    let merged = ScheduleArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(ScheduleConfig::from(merged))
}
