//! Scroll controller: world shift instead of camera movement.
//!
//! The visible camera never moves. When the player drifts outside the band
//! `[screen/2, screen/1.7]`, everything anchored to the world (platforms,
//! enemies, the boss) shifts the other way at fixed per-role rates, and the
//! player's logical position advances by its own velocity. Shots keep their
//! screen positions, they are already in flight.
//!
//! Both band edges are checked independently every tick; the band is wide
//! enough that only one can trigger.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::boss::Boss;
use crate::plugins::combat::resolve;
use crate::plugins::enemies::Enemy;
use crate::plugins::physics::{Hitbox, Position, Velocity};
use crate::plugins::player::Player;
use crate::plugins::world::Platform;

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedPostUpdate,
        scroll_world
            .after(resolve)
            .run_if(in_state(GameState::InGame)),
    );
}

pub fn scroll_world(
    tunables: Res<Tunables>,
    mut q_player: Query<(&mut Position, &Velocity, &Hitbox), With<Player>>,
    mut q_platforms: Query<
        &mut Hitbox,
        (With<Platform>, Without<Player>, Without<Enemy>, Without<Boss>),
    >,
    mut q_enemies: Query<
        &mut Hitbox,
        (With<Enemy>, Without<Player>, Without<Platform>, Without<Boss>),
    >,
    mut q_boss: Query<
        &mut Hitbox,
        (With<Boss>, Without<Player>, Without<Platform>, Without<Enemy>),
    >,
) {
    let Ok((mut pos, vel, player_box)) = q_player.single_mut() else {
        return;
    };

    if player_box.right() >= tunables.scroll_out {
        pos.x -= vel.x;
        shift_world(
            &tunables,
            -1.0,
            &mut q_platforms,
            &mut q_enemies,
            &mut q_boss,
        );
    }

    if player_box.right() <= tunables.scroll_in {
        pos.x += vel.x.abs();
        shift_world(
            &tunables,
            1.0,
            &mut q_platforms,
            &mut q_enemies,
            &mut q_boss,
        );
    }
}

fn shift_world(
    tunables: &Tunables,
    sign: f32,
    q_platforms: &mut Query<
        &mut Hitbox,
        (With<Platform>, Without<Player>, Without<Enemy>, Without<Boss>),
    >,
    q_enemies: &mut Query<
        &mut Hitbox,
        (With<Enemy>, Without<Player>, Without<Platform>, Without<Boss>),
    >,
    q_boss: &mut Query<
        &mut Hitbox,
        (With<Boss>, Without<Player>, Without<Platform>, Without<Enemy>),
    >,
) {
    for mut platform in q_platforms.iter_mut() {
        platform.shift_x(sign * tunables.platform_shift);
    }
    for mut enemy in q_enemies.iter_mut() {
        enemy.shift_x(sign * tunables.enemy_shift);
    }
    for mut boss in q_boss.iter_mut() {
        boss.shift_x(sign * tunables.boss_shift);
    }
}

#[cfg(test)]
mod tests;
