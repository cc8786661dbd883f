#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for the fleet `Scheduler` using rstest-bdd.

use std::cell::RefCell;

use courier_core::{
    Consignment, DEFAULT_EXHAUSTIVE_LIMIT, FleetSpec, Package, Schedule, ScheduleError,
    Scheduler, SelectorKind, Tariff,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug)]
struct SchedulerWorld {
    fleet: RefCell<Option<FleetSpec>>,
    selector: RefCell<SelectorKind>,
    consignments: RefCell<Vec<Consignment>>,
    outcome: RefCell<Option<Result<Schedule, ScheduleError>>>,
}

impl SchedulerWorld {
    fn new() -> Self {
        Self {
            fleet: RefCell::new(None),
            selector: RefCell::new(SelectorKind::default()),
            consignments: RefCell::new(Vec::new()),
            outcome: RefCell::new(None),
        }
    }

    fn schedule(&self) -> Schedule {
        self.outcome
            .borrow()
            .clone()
            .expect("scheduling should run before assertions")
            .expect("expected scheduling to succeed")
    }
}

#[fixture]
fn world() -> SchedulerWorld {
    SchedulerWorld::new()
}

#[given("a fleet of {count:u32} vehicles at {speed:u32} km/h carrying {capacity:u32} kg")]
fn given_fleet(world: &SchedulerWorld, count: u32, speed: u32, capacity: u32) {
    let fleet = FleetSpec::new(count, speed, capacity).expect("valid fleet");
    world.fleet.replace(Some(fleet));
}

#[given("the greedy selector")]
fn given_greedy(world: &SchedulerWorld) {
    world.selector.replace(SelectorKind::Greedy);
}

#[given("package {id} weighing {weight:u32} kg for {distance:u32} km")]
fn given_package(world: &SchedulerWorld, id: String, weight: u32, distance: u32) {
    let tariff = Tariff::new(Vec::new(), 10, 5).expect("valid tariff");
    let package = Package::new(id, weight, distance, "").expect("valid package");
    world
        .consignments
        .borrow_mut()
        .push(Consignment::new(package, 100, &tariff));
}

#[when("the deliveries are scheduled")]
fn when_scheduled(world: &SchedulerWorld) {
    let fleet = world.fleet.borrow().expect("fleet configured");
    let selector = world.selector.borrow().build(DEFAULT_EXHAUSTIVE_LIMIT);
    let consignments = world.consignments.take();
    let outcome = Scheduler::new(selector).schedule(consignments, &fleet);
    world.outcome.replace(Some(outcome));
}

#[then("package {id} travels on vehicle {vehicle:u32}")]
fn then_vehicle(world: &SchedulerWorld, id: String, vehicle: u32) {
    let schedule = world.schedule();
    let delivery = schedule.delivery(&id).expect("package delivered");
    assert_eq!(delivery.vehicle_id, vehicle);
}

#[then("package {id} arrives after {hours:f64} hours")]
#[expect(clippy::float_arithmetic, reason = "compare hours to two decimals")]
fn then_arrival(world: &SchedulerWorld, id: String, hours: f64) {
    let schedule = world.schedule();
    let delivery = schedule.delivery(&id).expect("package delivered");
    assert!(
        (delivery.completed_at - hours).abs() < 0.005,
        "{id} arrived at {} h, expected {hours} h",
        delivery.completed_at
    );
}

#[then("{count:usize} trips are made")]
fn then_trip_count(world: &SchedulerWorld, count: usize) {
    assert_eq!(world.schedule().trips.len(), count);
}

#[then("the first trip carries {load:u64} kg")]
fn then_first_load(world: &SchedulerWorld, load: u64) {
    let schedule = world.schedule();
    let trip = schedule.trips.first().expect("at least one trip");
    assert_eq!(trip.load_kg, load);
}

#[then("scheduling is refused because {id} is too heavy")]
fn then_refused(world: &SchedulerWorld, id: String) {
    let err = world
        .outcome
        .borrow()
        .clone()
        .expect("scheduling should run before assertions")
        .expect_err("expected scheduling to fail");
    assert!(
        matches!(err, ScheduleError::ExceedsCapacity { id: ref rejected, .. } if *rejected == id),
        "unexpected error: {err}"
    );
}

#[scenario(path = "tests/features/scheduler.feature", index = 0)]
fn heaviest_load_first(world: SchedulerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/scheduler.feature", index = 1)]
fn returning_vehicle(world: SchedulerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/scheduler.feature", index = 2)]
fn overweight_refused(world: SchedulerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/scheduler.feature", index = 3)]
fn greedy_leaves_capacity(world: SchedulerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/scheduler.feature", index = 4)]
fn exhaustive_fills_vehicle(world: SchedulerWorld) {
    let _ = world;
}
