//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input into the `PlayerInput` resource, advance animation
//! - FixedUpdate: consume the jump edge, then integrate kinematics
//!
//! Jumping is only possible while the hitbox overlaps a platform; an
//! airborne jump press is a silent no-op, not an error.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::physics::{Hitbox, Position, Velocity, integrate};
use crate::plugins::projectiles::request::request_player_shot;
use crate::plugins::world::Platform;

pub mod animation;

use animation::PlayerAnimation;

#[derive(Component)]
pub struct Player;

/// Input latched in `Update`, consumed on the next fixed tick.
///
/// The jump edge stays queued until a fixed step sees it, so a press between
/// ticks is never dropped.
#[derive(Resource, Default, Debug)]
pub struct PlayerInput {
    pub move_axis: f32,
    pub jump_queued: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(
            Update,
            (
                gather_input,
                animation::animate.after(request_player_shot),
            )
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedUpdate,
            (apply_jump, apply_movement.after(apply_jump)).run_if(in_state(GameState::InGame)),
        );
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let start = tunables.screen / 2.0;

    commands.spawn((
        Name::new("Player"),
        Player,
        Position(start),
        Velocity::default(),
        Hitbox::from_mid_bottom(start, tunables.player_size),
        PlayerAnimation::new(tunables.frame_interval),
        Sprite {
            color: animation::initial_color(),
            custom_size: Some(tunables.player_size),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 2.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        return;
    };

    let mut axis = 0.0;
    if keys.pressed(KeyCode::KeyA) {
        axis -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis += 1.0;
    }
    input.move_axis = axis;

    if keys.just_pressed(KeyCode::KeyW) {
        input.jump_queued = true;
    }
}

/// Consume a queued jump: only grounded players (hitbox overlapping a
/// platform this tick) get the vertical impulse.
pub fn apply_jump(
    tunables: Res<Tunables>,
    mut input: ResMut<PlayerInput>,
    q_platforms: Query<&Hitbox, With<Platform>>,
    mut q_player: Query<(&mut Velocity, &Hitbox, &mut PlayerAnimation), With<Player>>,
) {
    if !input.jump_queued {
        return;
    }
    input.jump_queued = false;

    let Ok((mut vel, hitbox, mut anim)) = q_player.single_mut() else {
        return;
    };

    if q_platforms.iter().any(|p| hitbox.overlaps(p)) {
        vel.y = tunables.jump_speed;
        anim.jumping = true;
    }
}

/// One kinematics step: assemble acceleration from input, gravity and the
/// damping term, integrate, then re-derive the hitbox from the anchor.
pub fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<(&mut Position, &mut Velocity, &mut Hitbox), With<Player>>,
) {
    let Ok((mut pos, mut vel, mut hitbox)) = q_player.single_mut() else {
        return;
    };

    let mut acc = Vec2::new(input.move_axis * tunables.acceleration, tunables.gravity);
    acc.x += vel.x * tunables.friction;

    integrate(&mut pos.0, &mut vel.0, acc);
    *hitbox = Hitbox::from_mid_bottom(pos.0, tunables.player_size);
}

#[cfg(test)]
mod tests;
