//! Behaviour-driven step definitions for the schedule command scenarios.

use super::helpers::{CliWorld, quoted_list};
use super::steps::world;
use super::*;
use courier_core::ScheduleError;
use rstest_bdd_macros::{given, scenario, then, when};

#[given("the packages {packages}")]
fn the_packages(#[from(world)] world: &CliWorld, packages: String) {
    world.packages.replace(quoted_list(&packages));
}

#[given("the greedy selector")]
fn greedy_selector(#[from(world)] world: &CliWorld) {
    world
        .options
        .borrow_mut()
        .extend([format!("--{ARG_SELECTOR}"), "greedy".to_owned()]);
}

#[given("JSON output")]
fn json_output(#[from(world)] world: &CliWorld) {
    world
        .options
        .borrow_mut()
        .extend([format!("--{ARG_FORMAT}"), "json".to_owned()]);
}

#[when(
    "I schedule them with base {base:u32} on {vehicles:u32} vehicles at {speed:u32} km/h carrying {capacity:u32} kg"
)]
fn schedule_them(
    #[from(world)] world: &CliWorld,
    base: u32,
    vehicles: u32,
    speed: u32,
    capacity: u32,
) {
    let packages = world.packages.borrow().clone();
    let mut inputs = vec![base.to_string(), packages.len().to_string()];
    inputs.extend(packages);
    inputs.extend([vehicles, speed, capacity].map(|value| value.to_string()));
    world.run("schedule", inputs);
}

#[then("the report lists {ids} in that order")]
fn report_order(#[from(world)] world: &CliWorld, ids: String) {
    let stdout = world.stdout.borrow();
    let reported: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("Package: "))
        .collect();
    let expected: Vec<&str> = ids.split(", ").collect();
    assert_eq!(reported, expected);
}

#[then(
    "{id} is reported with discount {discount:f64}, total {total:f64} and time {hours:f64} hours"
)]
fn reported_delivery(
    #[from(world)] world: &CliWorld,
    id: String,
    discount: f64,
    total: f64,
    hours: f64,
) {
    let stdout = world.stdout.borrow();
    let heading = format!("Package: {id}");
    let lines: Vec<&str> = stdout
        .lines()
        .skip_while(|line| *line != heading)
        .take(5)
        .collect();
    assert!(!lines.is_empty(), "no entry for {id} in {stdout}");
    let entry = lines.join("\n");
    assert!(entry.contains(&format!("  Discount: {discount:.2}")), "{entry}");
    assert!(entry.contains(&format!("  Total Cost: {total:.2}")), "{entry}");
    assert!(
        entry.contains(&format!("  Delivery Time: {hours:.2} hours")),
        "{entry}"
    );
}

#[then("the JSON schedule has {count:usize} trip")]
fn json_trip_count(#[from(world)] world: &CliWorld, count: usize) {
    let value: serde_json::Value =
        serde_json::from_str(&world.stdout.borrow()).expect("output should be JSON");
    let trips = value
        .get("trips")
        .and_then(serde_json::Value::as_array)
        .expect("trips array");
    assert_eq!(trips.len(), count);
}

#[then("the command fails because {id} exceeds the vehicle capacity")]
fn exceeds_capacity(#[from(world)] world: &CliWorld, id: String) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    match result {
        Err(CliError::Schedule(ScheduleError::ExceedsCapacity { id: rejected, .. })) => {
            assert_eq!(*rejected, id);
        }
        other => panic!("expected ExceedsCapacity, found {other:?}"),
    }
}

macro_rules! register_schedule_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/schedule_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CliWorld) {
            let _ = world;
        }
    };
}

register_schedule_scenario!(schedule_five_packages, "scheduling the five-package sample");
register_schedule_scenario!(schedule_greedy, "choosing the greedy selector");
register_schedule_scenario!(schedule_json, "emitting JSON");
register_schedule_scenario!(schedule_overweight, "rejecting a parcel heavier than any vehicle");
register_schedule_scenario!(schedule_zero_speed, "rejecting a zero speed");
