//! Physics plugin: kinematics primitives and the fixed tick rate.
//!
//! Simulation runs in screen space (origin top-left, y down) at a fixed
//! 60 Hz step. `integrate` is the single integration rule shared by anything
//! that accelerates; everything with a presence in the world carries a
//! `Hitbox` rectangle, which is the positional truth the resolver and the
//! renderer both read.

use bevy::math::Rect;
use bevy::prelude::*;

/// Simulation ticks per second.
pub const TICK_HZ: f64 = 60.0;

pub fn plugin(app: &mut App) {
    app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ));
}

/// Mid-bottom anchor point of the player, in screen space.
///
/// Kept separate from the hitbox so the integrator works on a point and the
/// box is re-derived from it each step.
#[derive(Component, Debug, Clone, Copy, Deref, DerefMut)]
pub struct Position(pub Vec2);

#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut)]
pub struct Velocity(pub Vec2);

/// One integration step: semi-implicit Euler with a half-step position term.
#[inline]
pub fn integrate(pos: &mut Vec2, vel: &mut Vec2, acc: Vec2) {
    *vel += acc;
    *pos += *vel + 0.5 * acc;
}

/// Axis-aligned bounding rectangle in screen space.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hitbox(pub Rect);

impl Hitbox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self(Rect::new(x, y, x + width, y + height))
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self(Rect::from_center_size(center, size))
    }

    /// Box whose bottom-center sits at `anchor`.
    pub fn from_mid_bottom(anchor: Vec2, size: Vec2) -> Self {
        Self(Rect::new(
            anchor.x - size.x / 2.0,
            anchor.y - size.y,
            anchor.x + size.x / 2.0,
            anchor.y,
        ))
    }

    /// Strict overlap: rectangles sharing only an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        !self.0.intersect(other.0).is_empty()
    }

    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.0.min += delta;
        self.0.max += delta;
    }

    #[inline]
    pub fn shift_x(&mut self, dx: f32) {
        self.0.min.x += dx;
        self.0.max.x += dx;
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.0.center()
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.0.size()
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.0.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.0.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.0.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.0.max.y
    }
}
