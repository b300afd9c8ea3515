//! Buffered shot requests.
//!
//! Producers create intent, the consumer applies it. Keeping spawning behind
//! a queue means the player click handler and the boss volley share one
//! spawn path.

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotKind {
    Player,
    Boss,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct ShotRequest {
    pub kind: ShotKind,
    /// Fire point, the shot spawns centered here.
    pub origin: Vec2,
    /// Aim point; only the direction from origin matters after fire time.
    pub target: Vec2,
    pub speed: f32,
}
