//! `cost` command: price packages without scheduling them.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Args, Parser};
use courier_core::price_all;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{Shipment, parse_cost_inputs};
use crate::render::write_quotes;
use crate::tariff::load_tariff;
use crate::{ARG_FORMAT, ARG_TARIFF, CliError, DEFAULT_TARIFF_PATH, OutputFormat};

/// Layered options for the `cost` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "cost")]
#[ortho_config(prefix = "COURIER")]
pub(crate) struct CostArgs {
    /// Path to the JSON tariff with offers and per-unit rates.
    #[arg(long = ARG_TARIFF, value_name = "path")]
    #[serde(default)]
    pub(crate) tariff: Option<Utf8PathBuf>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_name = "format", value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl CostArgs {
    fn into_config(self) -> Result<CostConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(CostConfig::from(merged))
    }
}

/// Resolved `cost` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CostConfig {
    pub(crate) tariff: Utf8PathBuf,
    pub(crate) format: OutputFormat,
}

impl From<CostArgs> for CostConfig {
    fn from(args: CostArgs) -> Self {
        Self {
            tariff: args
                .tariff
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_TARIFF_PATH)),
            format: args.format.unwrap_or_default(),
        }
    }
}

/// Options plus the positional package arguments.
#[derive(Debug, Clone, Args)]
#[command(
    long_about = "Price each package as base + weight * rate + distance * rate, \
                  less any offer discount the package qualifies for. Packages \
                  are given as quoted \"<id> <weight_kg> <distance_km> <offer_code>\" \
                  strings.",
    about = "Price packages and apply offer discounts",
    allow_negative_numbers = true
)]
pub(crate) struct CostCommand {
    #[command(flatten)]
    pub(crate) options: CostArgs,
    /// `<base_delivery_cost> <no_of_packages> <package>...`
    #[arg(value_name = "input")]
    pub(crate) inputs: Vec<String>,
}

pub(crate) fn run_cost_with(command: CostCommand, writer: &mut dyn Write) -> Result<(), CliError> {
    let CostCommand { options, inputs } = command;
    let shipment = parse_cost_inputs(&inputs)?;
    let config = options.into_config()?;
    execute_cost(&config, shipment, writer)
}

fn execute_cost(
    config: &CostConfig,
    shipment: Shipment,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let tariff = load_tariff(&config.tariff)?;
    let consignments = price_all(shipment.packages, shipment.base_cost, &tariff);
    log::info!("priced {} packages", consignments.len());
    write_quotes(writer, &consignments, config.format)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<CostConfig, CliError> {
    let merged = CostArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(CostConfig::from(merged))
}

