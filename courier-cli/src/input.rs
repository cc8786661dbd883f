//! Positional argument parsing shared by the `cost` and `schedule` commands.
//!
//! Both commands take `<base_delivery_cost> <no_of_packages>` followed by one
//! argument per package of the form `"<id> <weight_kg> <distance_km> <offer_code>"`.
//! `schedule` additionally expects the fleet size, speed and capacity.

use std::str::FromStr;

use courier_core::{FleetError, FleetSpec, Package};

use crate::CliError;

pub(crate) const COST_USAGE: &str = "cost <base_delivery_cost> <no_of_packages> <package>...";
pub(crate) const SCHEDULE_USAGE: &str = "schedule <base_delivery_cost> <no_of_packages> \
     <package>... <no_of_vehicles> <max_speed> <max_carriable_weight>";

/// Base cost and packages read from the leading positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Shipment {
    pub(crate) base_cost: u32,
    pub(crate) packages: Vec<Package>,
}

/// Parse the positional arguments of the `cost` command.
pub(crate) fn parse_cost_inputs(inputs: &[String]) -> Result<Shipment, CliError> {
    let (shipment, rest) = parse_shipment(inputs, COST_USAGE)?;
    if !rest.is_empty() {
        return Err(CliError::Usage { usage: COST_USAGE });
    }
    Ok(shipment)
}

/// Parse the positional arguments of the `schedule` command.
pub(crate) fn parse_schedule_inputs(inputs: &[String]) -> Result<(Shipment, FleetSpec), CliError> {
    let (shipment, rest) = parse_shipment(inputs, SCHEDULE_USAGE)?;
    let [vehicles, speed, capacity] = rest else {
        return Err(CliError::Usage {
            usage: SCHEDULE_USAGE,
        });
    };
    let vehicle_count = parse_positive(vehicles).ok_or(CliError::InvalidVehicleCount)?;
    let speed_kmh = parse_positive(speed).ok_or(CliError::InvalidSpeed)?;
    let capacity_kg = parse_positive(capacity).ok_or(CliError::InvalidCapacity)?;
    let fleet = FleetSpec::new(vehicle_count, speed_kmh, capacity_kg).map_err(|err| match err {
        FleetError::NoVehicles => CliError::InvalidVehicleCount,
        FleetError::ZeroSpeed => CliError::InvalidSpeed,
        FleetError::ZeroCapacity => CliError::InvalidCapacity,
    })?;
    Ok((shipment, fleet))
}

fn parse_shipment<'a>(
    inputs: &'a [String],
    usage: &'static str,
) -> Result<(Shipment, &'a [String]), CliError> {
    let [base, count, rest @ ..] = inputs else {
        return Err(CliError::Usage { usage });
    };
    let base_cost = base
        .trim()
        .parse::<u32>()
        .map_err(|_| CliError::InvalidBaseCost)?;
    let count: usize = parse_positive(count).ok_or(CliError::InvalidPackageCount)?;
    let Some((descriptions, remainder)) = rest.split_at_checked(count) else {
        return Err(CliError::Usage { usage });
    };

    let packages = descriptions
        .iter()
        .enumerate()
        .map(|(idx, raw)| parse_package(raw, idx + 1))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((
        Shipment {
            base_cost,
            packages,
        },
        remainder,
    ))
}

/// Parse `"<id> <weight_kg> <distance_km> <offer_code>"`; `position` is
/// one-based and only used in error messages.
fn parse_package(raw: &str, position: usize) -> Result<Package, CliError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    let [id, weight, distance, offer_code] = fields.as_slice() else {
        return Err(CliError::InvalidPackageDetails { position });
    };
    let weight_kg = parse_positive(weight).ok_or(CliError::InvalidWeight { position })?;
    let distance_km = distance
        .parse::<u32>()
        .map_err(|_| CliError::InvalidDistance { position })?;
    Package::new(*id, weight_kg, distance_km, *offer_code)
        .map_err(|_| CliError::InvalidPackageDetails { position })
}

/// Parse an integer and reject zero.
fn parse_positive<T>(raw: &str) -> Option<T>
where
    T: FromStr + Default + PartialEq,
{
    raw.trim()
        .parse::<T>()
        .ok()
        .filter(|value| *value != T::default())
}
