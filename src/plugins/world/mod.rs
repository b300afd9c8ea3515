//! World plugin: spawns the platform layout.
//!
//! Platforms are immutable rectangles apart from the horizontal scroll
//! shift. We intentionally build them from solid-color sprites so the
//! project has no assets.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layout;
use crate::common::state::GameState;
use crate::plugins::physics::Hitbox;

const PLATFORM_COLOR: Color = Color::srgb(0.15, 0.25, 0.85);

#[derive(Component)]
pub struct Platform;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_platforms);
}

fn spawn_platforms(mut commands: Commands) {
    for (i, &(x, y, width, height)) in layout::PLATFORMS.iter().enumerate() {
        commands.spawn((
            Name::new(format!("Platform{i}")),
            Platform,
            Hitbox::new(x, y, width, height),
            Sprite {
                color: PLATFORM_COLOR,
                custom_size: Some(Vec2::new(width, height)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 0.0),
            DespawnOnExit(GameState::InGame),
        ));
    }
}
