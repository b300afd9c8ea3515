//! Combat resolver: every collision rule of a frame, in one place, in order.
//!
//! The order is the contract. Later checks see state mutated by earlier ones
//! in the same tick:
//!
//! 1. player vs enemy          -> session ends
//! 2. player vs boss           -> session ends
//! 3. player vs platforms      -> landing snap (only while falling)
//! 4. enemy vs player shot     -> both die, kill counter up
//! 5. boss shot vs player      -> shot dies, session ends
//! 6. player shot vs enemy / boss / bounds -> first match wins
//! 7. boss health depleted     -> win, session ends
//! 8. player below the screen  -> session ends
//!
//! A shot or enemy consumed by one step is invisible to every later step of
//! the same tick (per-frame consumed set), so nothing is counted or damaged
//! twice. Candidate lists are sorted (platforms by top edge, enemies and
//! shots by left edge); ECS iteration order is not part of the contract.
//!
//! Destruction is two-phase: the resolver (and the movement systems) only
//! mark `PendingDespawn`; `despawn_marked` commits at the end of the same
//! fixed step, after the scroll shift, so an entity marked dead is gone from
//! every query before the next tick begins.

use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::boss::{Boss, mark_boss_death};
use crate::plugins::core::Session;
use crate::plugins::enemies::Enemy;
use crate::plugins::physics::{Hitbox, Position, Velocity};
use crate::plugins::player::Player;
use crate::plugins::projectiles::motion::out_of_bounds;
use crate::plugins::projectiles::{BossShot, PlayerShot};
use crate::plugins::scroll::scroll_world;
use crate::plugins::world::Platform;

/// Marker: the entity is dead this tick and despawns at the commit point.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedPostUpdate,
        (
            resolve,
            despawn_marked
                .after(resolve)
                .after(mark_boss_death)
                .after(scroll_world),
        )
            .run_if(in_state(GameState::InGame)),
    );
}

pub fn resolve(
    tunables: Res<Tunables>,
    mut session: ResMut<Session>,
    mut next_state: ResMut<NextState<GameState>>,
    mut commands: Commands,
    mut q_player: Query<(&mut Position, &mut Velocity, &Hitbox), With<Player>>,
    q_platforms: Query<&Hitbox, (With<Platform>, Without<Player>)>,
    q_enemies: Query<(Entity, &Hitbox), (With<Enemy>, Without<PendingDespawn>)>,
    mut q_boss: Query<(&mut Boss, &Hitbox)>,
    q_player_shots: Query<(Entity, &Hitbox), (With<PlayerShot>, Without<PendingDespawn>)>,
    q_boss_shots: Query<(Entity, &Hitbox), (With<BossShot>, Without<PendingDespawn>)>,
    mut consumed: Local<HashSet<Entity>>,
) {
    consumed.clear();

    let Ok((mut pos, mut vel, player_box)) = q_player.single_mut() else {
        return;
    };
    let player_box = *player_box;

    let mut enemies: Vec<(Entity, Hitbox)> = q_enemies.iter().map(|(e, h)| (e, *h)).collect();
    enemies.sort_by(|a, b| a.1.left().total_cmp(&b.1.left()));

    let mut shots: Vec<(Entity, Hitbox)> = q_player_shots.iter().map(|(e, h)| (e, *h)).collect();
    shots.sort_by(|a, b| a.1.left().total_cmp(&b.1.left()));

    let mut boss = q_boss.single_mut().ok();
    let mut game_over = false;

    // 1. Touching any enemy ends the session.
    if enemies.iter().any(|(_, h)| player_box.overlaps(h)) {
        game_over = true;
    }

    // 2. So does touching the boss.
    if let Some((_, boss_box)) = boss.as_ref() {
        if player_box.overlaps(*boss_box) {
            game_over = true;
        }
    }

    // 3. A falling player rests on the topmost overlapping platform.
    if vel.y > 0.0 {
        let mut tops: Vec<f32> = q_platforms
            .iter()
            .filter(|p| player_box.overlaps(*p))
            .map(|p| p.top())
            .collect();
        tops.sort_by(f32::total_cmp);
        if let Some(&top) = tops.first() {
            pos.y = top + 1.0;
            vel.y = 0.0;
        }
    }

    // 4. Enemies hit by a player shot die and score.
    for (enemy, enemy_box) in &enemies {
        let hit = shots
            .iter()
            .find(|(shot, shot_box)| !consumed.contains(shot) && enemy_box.overlaps(shot_box));
        if let Some((shot, _)) = hit {
            consumed.insert(*enemy);
            consumed.insert(*shot);
            commands.entity(*enemy).insert(PendingDespawn);
            commands.entity(*shot).insert(PendingDespawn);
            session.kills += 1;
        }
    }

    // 5. A boss shot reaching the player ends the session.
    for (shot, shot_box) in &q_boss_shots {
        if shot_box.overlaps(&player_box) {
            commands.entity(shot).insert(PendingDespawn);
            game_over = true;
        }
    }

    // 6. Remaining player shots: enemy, then boss, then bounds.
    for (shot, shot_box) in &shots {
        if consumed.contains(shot) {
            continue;
        }

        let enemy_hit = enemies
            .iter()
            .find(|(enemy, enemy_box)| !consumed.contains(enemy) && shot_box.overlaps(enemy_box));
        if let Some((enemy, _)) = enemy_hit {
            consumed.insert(*shot);
            consumed.insert(*enemy);
            commands.entity(*shot).insert(PendingDespawn);
            commands.entity(*enemy).insert(PendingDespawn);
            session.kills += 1;
            continue;
        }

        if let Some((boss, boss_box)) = boss.as_mut() {
            if shot_box.overlaps(*boss_box) {
                boss.health -= 1;
                consumed.insert(*shot);
                commands.entity(*shot).insert(PendingDespawn);
                continue;
            }
        }

        if out_of_bounds(shot_box, tunables.screen) {
            consumed.insert(*shot);
            commands.entity(*shot).insert(PendingDespawn);
        }
    }

    // 7. Boss defeat ends the session as a win.
    if let Some((boss, _)) = boss.as_ref() {
        if boss.health <= 0 {
            session.win = true;
            game_over = true;
        }
    }

    // 8. Falling below the screen ends the session.
    if player_box.bottom() > tunables.screen.y {
        game_over = true;
    }

    if game_over {
        next_state.set(GameState::GameOver);
    }
}

/// Commit point for this tick's deaths.
pub fn despawn_marked(mut commands: Commands, q_marked: Query<Entity, With<PendingDespawn>>) {
    for entity in &q_marked {
        commands.entity(entity).despawn();
    }
}
