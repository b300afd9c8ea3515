//! Boss plugin.
//!
//! The boss sits far to the right of the initial view and never moves on its
//! own; only the scroll shift repositions it. Damage comes from the combat
//! resolver, which also owns the win transition. This module only marks the
//! boss for despawn once its health is gone, so the structural change goes
//! through the same commit as everything else.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::combat::{PendingDespawn, resolve};
use crate::plugins::physics::Hitbox;

const BOSS_COLOR: Color = Color::srgb(0.30, 0.08, 0.38);

#[derive(Component, Debug)]
pub struct Boss {
    pub health: i32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn);
    app.add_systems(
        FixedPostUpdate,
        mark_boss_death
            .after(resolve)
            .run_if(in_state(GameState::InGame)),
    );
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let size = tunables.boss_size;
    let top_left = Vec2::new(tunables.boss_spawn_x - size.x / 2.0, tunables.screen.y / 5.0);

    commands.spawn((
        Name::new("Boss"),
        Boss {
            health: tunables.boss_health,
        },
        Hitbox::new(top_left.x, top_left.y, size.x, size.y),
        Sprite {
            color: BOSS_COLOR,
            custom_size: Some(size),
            // Faces the approaching player.
            flip_x: true,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        DespawnOnExit(GameState::InGame),
    ));
}

pub fn mark_boss_death(
    mut commands: Commands,
    q_boss: Query<(Entity, &Boss), Without<PendingDespawn>>,
) {
    for (entity, boss) in &q_boss {
        if boss.health <= 0 {
            commands.entity(entity).insert(PendingDespawn);
        }
    }
}
