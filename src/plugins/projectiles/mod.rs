//! Projectiles plugin: message-based producer → consumer spawning.
//!
//! Producers never spawn entities themselves; they enqueue a `ShotRequest`
//! (mouse click for the player, the spawner for the boss volley) and the
//! single consumer turns requests into entities, computing the fire-time
//! velocity decomposition exactly once. After that a shot is dumb: constant
//! velocity, truncated to whole pixels per tick, until it hits something or
//! leaves the screen.
//!
//! ```text
//! Update:       request_player_shot ──▶ ShotRequest ──▶ spawn_shots
//! FixedUpdate:  spawn_wave (enemies plugin) ──▶ ShotRequest   (boss volley)
//! FixedUpdate:  move_shots ──▶ retire_boss_shots
//! ```

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;

pub mod messages;
pub mod motion;
pub mod request;
pub mod spawn;

/// Marker for shots fired by the player.
#[derive(Component)]
pub struct PlayerShot;

/// Marker for shots fired by the boss.
#[derive(Component)]
pub struct BossShot;

/// Constant-velocity shot state, fixed at fire time.
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    pub vel: Vec2,
}

pub struct ProjectilesPlugin;

/// Maintain shot request message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_shot_messages(mut msgs: ResMut<Messages<messages::ShotRequest>>) {
    msgs.update();
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Messages<messages::ShotRequest>>();
        app.add_systems(PostUpdate, update_shot_messages);

        app.add_systems(
            Update,
            (
                request::request_player_shot,
                spawn::spawn_shots.after(request::request_player_shot),
            )
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            (
                motion::move_shots,
                motion::retire_boss_shots.after(motion::move_shots),
            )
                .run_if(in_state(GameState::InGame)),
        );
    }
}
