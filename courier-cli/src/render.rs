//! Text and JSON renderers for command output.

use std::io::Write;

use courier_core::{Consignment, DeliveryResult, Schedule};
use serde::Serialize;

use crate::{CliError, OutputFormat};

/// Write priced packages in the requested format.
pub(crate) fn write_quotes(
    writer: &mut dyn Write,
    consignments: &[Consignment],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, consignments),
        OutputFormat::Text => consignments
            .iter()
            .try_for_each(|consignment| write_quote_block(writer, consignment))
            .map_err(CliError::WriteOutput),
    }
}

/// Write a schedule in the requested format.
pub(crate) fn write_schedule(
    writer: &mut dyn Write,
    schedule: &Schedule,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, schedule),
        OutputFormat::Text => schedule
            .deliveries
            .iter()
            .try_for_each(|delivery| write_delivery(writer, delivery))
            .map_err(CliError::WriteOutput),
    }
}

fn write_quote_block(writer: &mut dyn Write, consignment: &Consignment) -> std::io::Result<()> {
    let Consignment { package, quote } = consignment;
    writeln!(writer)?;
    writeln!(writer, "Package {}", package.id())?;
    writeln!(writer, "Base Delivery Cost: {:.0}", quote.base_cost)?;
    writeln!(
        writer,
        "Weight: {} kg | Distance: {} km",
        package.weight_kg(),
        package.distance_km()
    )?;
    writeln!(writer, "Offer code: {}", package.offer_code())?;
    writeln!(writer, "Discount: {:.2} ({})", quote.discount, quote.outcome)?;
    writeln!(writer, "Breakdown:")?;
    writeln!(writer, "  Base Delivery Cost: {:.2}", quote.base_cost)?;
    writeln!(writer, "  Weight Cost: {:.2}", quote.weight_cost)?;
    writeln!(writer, "  Distance Cost: {:.2}", quote.distance_cost)?;
    writeln!(writer, "  Discount: -{:.2}", quote.discount)?;
    writeln!(writer, "Total Delivery Cost: {:.2}", quote.final_cost)
}

/// One schedule entry. `Total Cost` is the discounted final cost, unlike
/// the legacy `calculateTimeAndCost` output which printed the undiscounted
/// total on that line.
fn write_delivery(writer: &mut dyn Write, delivery: &DeliveryResult) -> std::io::Result<()> {
    writeln!(writer, "Package: {}", delivery.package_id)?;
    writeln!(writer, "  Vehicle: {}", delivery.vehicle_id)?;
    writeln!(writer, "  Discount: {:.2}", delivery.discount)?;
    writeln!(writer, "  Total Cost: {:.2}", delivery.final_cost)?;
    writeln!(writer, "  Delivery Time: {:.2} hours", delivery.completed_at)?;
    writeln!(writer)
}

fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
