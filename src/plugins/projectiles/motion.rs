//! Fixed-step shot motion.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::combat::PendingDespawn;
use crate::plugins::physics::Hitbox;

use super::{BossShot, Projectile};

/// Advance every live shot by its velocity, truncated to whole pixels.
pub fn move_shots(
    mut q_shots: Query<(&Projectile, &mut Hitbox), Without<PendingDespawn>>,
) {
    for (shot, mut hitbox) in &mut q_shots {
        hitbox.translate(shot.vel.trunc());
    }
}

/// Boss shots fly in from past the right edge, so only the edges they can
/// actually cross retire them: the left side and the vertical bounds. Player
/// shots are retired by the combat resolver instead, so their out-of-bounds
/// check keeps its place in the resolution order.
pub fn retire_boss_shots(
    tunables: Res<Tunables>,
    mut commands: Commands,
    q_shots: Query<(Entity, &Hitbox), (With<BossShot>, Without<PendingDespawn>)>,
) {
    for (entity, hitbox) in &q_shots {
        let gone =
            hitbox.left() < 0.0 || hitbox.top() < 0.0 || hitbox.top() > tunables.screen.y;
        if gone {
            commands.entity(entity).insert(PendingDespawn);
        }
    }
}

/// A shot is gone once its top-left corner leaves the screen rectangle.
#[inline]
pub fn out_of_bounds(hitbox: &Hitbox, screen: Vec2) -> bool {
    hitbox.left() < 0.0 || hitbox.left() > screen.x || hitbox.top() < 0.0 || hitbox.top() > screen.y
}
