//! Step definitions shared by the cost and schedule CLI scenarios.

use super::helpers::CliWorld;
use rstest::fixture;
use rstest_bdd_macros::{given, then};

#[fixture]
pub(super) fn world() -> CliWorld {
    CliWorld::new()
}

#[given("the standard tariff file")]
fn standard_tariff_file(#[from(world)] world: &CliWorld) {
    world.write_standard_tariff();
}

#[given("no tariff file")]
fn no_tariff_file(#[from(world)] world: &CliWorld) {
    let _ = world;
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &CliWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err}");
    }
}

#[then("the command fails with \"{message}\"")]
fn command_fails_with(#[from(world)] world: &CliWorld, message: String) {
    assert_eq!(world.error(), message);
}
