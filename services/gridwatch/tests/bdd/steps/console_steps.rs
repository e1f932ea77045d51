//! BDD step definitions for placeholder fallback in the console

use cucumber::{then, when};

use gridwatch::console::DataSource;
use gridwatch::placeholder;

use crate::world::GridwatchWorld;

#[when("the console loads the alarms")]
async fn console_loads_alarms(world: &mut GridwatchWorld) {
    world.loaded_alarms = Some(world.console().load_alarms().await);
}

#[when("the console loads the dashboard")]
async fn console_loads_dashboard(world: &mut GridwatchWorld) {
    world.loaded_summary = Some(world.console().load_dashboard().await);
}

#[then("the console should show the placeholder alarms")]
fn shows_placeholder_alarms(world: &mut GridwatchWorld) {
    let loaded = world.loaded_alarms.as_ref().expect("alarms not loaded");
    assert_eq!(loaded.source, DataSource::Placeholder);
    assert_eq!(loaded.data, placeholder::alarms());
}

#[then(expr = "the console should show {int} live alarm(s)")]
fn shows_live_alarms(world: &mut GridwatchWorld, count: usize) {
    let loaded = world.loaded_alarms.as_ref().expect("alarms not loaded");
    assert_eq!(loaded.source, DataSource::Live);
    assert_eq!(loaded.data.len(), count);
}

#[then("the console should show the placeholder dashboard")]
fn shows_placeholder_dashboard(world: &mut GridwatchWorld) {
    let loaded = world.loaded_summary.as_ref().expect("dashboard not loaded");
    assert_eq!(loaded.source, DataSource::Placeholder);
    assert_eq!(loaded.data, placeholder::dashboard_summary());
}

#[then(expr = "the dashboard should report {int} total alarms")]
fn dashboard_total_alarms(world: &mut GridwatchWorld, total: u64) {
    let loaded = world.loaded_summary.as_ref().expect("dashboard not loaded");
    assert_eq!(loaded.data.total_alarms, total);
}
