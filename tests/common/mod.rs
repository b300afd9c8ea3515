//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime.
//! - `StatesPlugin` drives the session state machine.
//! - `robot_runner::game::configure_headless` installs the gameplay plugins.
//!
//! Time is advanced manually (`TimeUpdateStrategy::ManualDuration`) so every
//! `app.update()` moves the clock by exactly one 60 Hz tick and the fixed
//! schedules run deterministically.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use robot_runner::common::state::GameState;

/// One 60 Hz frame, slightly over the fixed period so every update runs at
/// least one fixed step.
pub const FRAME: Duration = Duration::from_micros(16_700);

pub fn app_headless() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    robot_runner::game::configure_headless(&mut app);
    app
}

/// Enter `InGame` and run one update so the transition and the spawn
/// systems apply.
pub fn enter_game(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
}
