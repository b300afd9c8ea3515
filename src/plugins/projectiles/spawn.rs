//! Consumer: turn shot requests into entities.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::physics::Hitbox;

use super::messages::{ShotKind, ShotRequest};
use super::{BossShot, PlayerShot, Projectile};

const PLAYER_SHOT_COLOR: Color = Color::srgb(1.0, 0.85, 0.30);
const BOSS_SHOT_COLOR: Color = Color::srgb(0.95, 0.25, 0.20);

/// Fire-time velocity: decompose the angle from origin to target at the
/// given speed. The result is fixed for the shot's lifetime (no homing).
pub fn aimed_velocity(origin: Vec2, target: Vec2, speed: f32) -> Vec2 {
    let angle = (target.y - origin.y).atan2(target.x - origin.x);
    Vec2::new(angle.cos() * speed, angle.sin() * speed)
}

pub fn spawn_shots(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut reader: MessageReader<ShotRequest>,
) {
    for req in reader.read() {
        let vel = aimed_velocity(req.origin, req.target, req.speed);

        match req.kind {
            ShotKind::Player => {
                commands.spawn((
                    Name::new("PlayerShot"),
                    PlayerShot,
                    Projectile { vel },
                    Hitbox::from_center(req.origin, tunables.shot_size),
                    Sprite {
                        color: PLAYER_SHOT_COLOR,
                        custom_size: Some(tunables.shot_size),
                        // Cosmetic mirror when firing to the left.
                        flip_x: req.target.x < req.origin.x,
                        ..default()
                    },
                    Transform::from_xyz(0.0, 0.0, 1.5),
                    DespawnOnExit(GameState::InGame),
                ));
            }
            ShotKind::Boss => {
                commands.spawn((
                    Name::new("BossShot"),
                    BossShot,
                    Projectile { vel },
                    Hitbox::from_center(req.origin, tunables.boss_shot_size),
                    Sprite {
                        color: BOSS_SHOT_COLOR,
                        custom_size: Some(tunables.boss_shot_size),
                        ..default()
                    },
                    Transform::from_xyz(0.0, 0.0, 1.5),
                    DespawnOnExit(GameState::InGame),
                ));
            }
        }
    }
}
