//! Tunable gameplay constants.

use bevy::prelude::*;

use crate::common::layout;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Logical screen size; simulation runs in this rectangle.
    pub screen: Vec2,

    // Player kinematics. Friction is negative: it is a per-tick damping term
    // added to acceleration, not a physical contact model.
    pub acceleration: f32,
    pub friction: f32,
    pub gravity: f32,
    pub jump_speed: f32,
    pub player_size: Vec2,
    /// |velocity.x| at or above this counts as walking for animation.
    pub walk_threshold: f32,
    /// Seconds between animation frame advances.
    pub frame_interval: f32,

    // Enemies. Speeds are magnitudes; movement is leftward.
    pub ground_size: Vec2,
    pub ground_top: f32,
    pub ground_speed: f32,
    pub ground_rush_speed: f32,
    pub flying_size: Vec2,
    pub flying_speed: f32,
    pub flying_rush_speed: f32,
    /// Enemy center spawns this far right of the player's left edge.
    pub spawn_lead: f32,
    /// Seconds between spawn ticks.
    pub spawn_interval: f32,
    /// Kills above this add the ground enemy + boss volley to each spawn tick.
    pub wave_kills: u32,
    /// Kills above this step enemy speeds up to the rush values.
    pub rush_kills: u32,

    // Boss.
    pub boss_health: i32,
    pub boss_size: Vec2,
    pub boss_spawn_x: f32,

    // Projectiles.
    pub shot_speed: f32,
    pub shot_size: Vec2,
    pub boss_shot_speed: f32,
    pub boss_shot_size: Vec2,

    // Scroll band and per-entity shift rates.
    pub scroll_out: f32,
    pub scroll_in: f32,
    pub platform_shift: f32,
    pub enemy_shift: f32,
    pub boss_shift: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        let screen = Vec2::new(layout::WIDTH, layout::HEIGHT);
        Self {
            screen,
            acceleration: 0.5,
            friction: -0.05,
            gravity: 0.5,
            jump_speed: -15.0,
            player_size: Vec2::new(36.0, 54.0),
            walk_threshold: 0.15,
            frame_interval: 0.2,
            ground_size: Vec2::new(48.0, 70.0),
            ground_top: screen.y - 110.0,
            ground_speed: 2.5,
            ground_rush_speed: 4.0,
            flying_size: Vec2::new(40.0, 40.0),
            flying_speed: 3.0,
            flying_rush_speed: 5.0,
            spawn_lead: 500.0,
            spawn_interval: 2.0,
            wave_kills: 5,
            rush_kills: 15,
            boss_health: 30,
            boss_size: Vec2::new(120.0, 120.0),
            boss_spawn_x: 10_000.0,
            shot_speed: 20.0,
            shot_size: Vec2::new(18.0, 8.0),
            boss_shot_speed: 10.0,
            boss_shot_size: Vec2::new(26.0, 26.0),
            scroll_out: screen.x / 1.7,
            scroll_in: screen.x / 2.0,
            platform_shift: 7.0,
            enemy_shift: 5.0,
            boss_shift: 7.0,
        }
    }
}
