use std::time::Duration;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::physics::{Hitbox, Position, Velocity};
use crate::plugins::projectiles::messages::{ShotKind, ShotRequest};
use crate::plugins::world::Platform;

use super::animation::PlayerAnimation;
use super::{Player, PlayerInput};

fn spawn_player(world: &mut World, anchor: Vec2) -> Entity {
    let tunables = Tunables::default();
    let size = tunables.player_size;
    world
        .spawn((
            Player,
            Position(anchor),
            Velocity::default(),
            Hitbox::from_mid_bottom(anchor, size),
            PlayerAnimation::new(tunables.frame_interval),
            Sprite::default(),
        ))
        .id()
}

fn spawn_platform(world: &mut World, x: f32, y: f32) {
    world.spawn((Platform, Hitbox::new(x, y, 200.0, 30.0)));
}

/// Time resource with a fixed delta, for driving the animation gate.
fn time_with_delta(seconds: f32) -> Time {
    let mut time = Time::default();
    time.advance_by(Duration::from_secs_f32(seconds));
    time
}

#[test]
fn spawn_creates_player() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    run_system_once(&mut world, super::spawn);

    let found = world
        .query::<(&Player, &Position, &Velocity, &Hitbox)>()
        .iter(&world)
        .next()
        .is_some();
    assert!(found);
}

#[test]
fn jump_from_platform_sets_vertical_velocity() {
    let mut world = World::new();
    let tunables = Tunables::default();
    let jump_speed = tunables.jump_speed;
    world.insert_resource(tunables);
    world.insert_resource(PlayerInput {
        move_axis: 0.0,
        jump_queued: true,
    });

    // Player standing 1 px into the platform, the rest state after a snap.
    let player = spawn_player(&mut world, Vec2::new(100.0, 561.0));
    spawn_platform(&mut world, 0.0, 560.0);

    run_system_once(&mut world, super::apply_jump);

    let vel = world.get::<Velocity>(player).unwrap();
    assert_eq!(vel.y, jump_speed);
    assert!(world.get::<PlayerAnimation>(player).unwrap().jumping);
    assert!(!world.resource::<PlayerInput>().jump_queued);
}

#[test]
fn airborne_jump_is_a_silent_no_op() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(PlayerInput {
        move_axis: 0.0,
        jump_queued: true,
    });

    let player = spawn_player(&mut world, Vec2::new(100.0, 300.0));
    spawn_platform(&mut world, 0.0, 560.0);

    run_system_once(&mut world, super::apply_jump);

    let vel = world.get::<Velocity>(player).unwrap();
    assert_eq!(vel.y, 0.0);
    assert!(!world.get::<PlayerAnimation>(player).unwrap().jumping);
    // The press is still consumed.
    assert!(!world.resource::<PlayerInput>().jump_queued);
}

#[test]
fn movement_applies_gravity_with_half_step_position_term() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(PlayerInput::default());

    let player = spawn_player(&mut world, Vec2::new(400.0, 300.0));

    run_system_once(&mut world, super::apply_movement);

    let vel = world.get::<Velocity>(player).unwrap();
    let pos = world.get::<Position>(player).unwrap();
    assert_eq!(vel.0, Vec2::new(0.0, 0.5));
    assert_eq!(pos.0, Vec2::new(400.0, 300.75));

    // The hitbox is re-anchored to the new position.
    let hitbox = world.get::<Hitbox>(player).unwrap();
    assert_eq!(hitbox.bottom(), 300.75);
}

#[test]
fn held_direction_accelerates_horizontally() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(PlayerInput {
        move_axis: 1.0,
        jump_queued: false,
    });

    let player = spawn_player(&mut world, Vec2::new(400.0, 300.0));

    run_system_once(&mut world, super::apply_movement);

    let vel = world.get::<Velocity>(player).unwrap();
    assert_eq!(vel.x, 0.5);
}

#[test]
fn walking_flag_follows_the_speed_threshold() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(time_with_delta(0.0));
    world.init_resource::<Messages<ShotRequest>>();

    let player = spawn_player(&mut world, Vec2::new(400.0, 300.0));

    world.get_mut::<Velocity>(player).unwrap().x = 0.15;
    run_system_once(&mut world, super::animation::animate);
    assert!(world.get::<PlayerAnimation>(player).unwrap().walking);

    world.get_mut::<Velocity>(player).unwrap().x = 0.14;
    run_system_once(&mut world, super::animation::animate);
    assert!(!world.get::<PlayerAnimation>(player).unwrap().walking);
}

#[test]
fn frame_advance_waits_for_the_gate() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<Messages<ShotRequest>>();

    let player = spawn_player(&mut world, Vec2::new(400.0, 300.0));

    world.insert_resource(time_with_delta(0.1));
    run_system_once(&mut world, super::animation::animate);
    assert_eq!(world.get::<PlayerAnimation>(player).unwrap().frame(), 0);

    world.insert_resource(time_with_delta(0.15));
    run_system_once(&mut world, super::animation::animate);
    assert_eq!(world.get::<PlayerAnimation>(player).unwrap().frame(), 1);
}

#[test]
fn shooting_overlay_is_consumed_on_the_next_frame_tick() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<Messages<ShotRequest>>();

    let player = spawn_player(&mut world, Vec2::new(400.0, 300.0));

    // A player shot request this frame raises the overlay flag.
    world.write_message(ShotRequest {
        kind: ShotKind::Player,
        origin: Vec2::new(400.0, 280.0),
        target: Vec2::new(500.0, 280.0),
        speed: 20.0,
    });
    world.insert_resource(time_with_delta(0.05));
    run_system_once(&mut world, super::animation::animate);
    assert!(world.get::<PlayerAnimation>(player).unwrap().shooting);

    // The next gated frame advance consumes it.
    world.insert_resource(time_with_delta(0.2));
    run_system_once(&mut world, super::animation::animate);
    assert!(!world.get::<PlayerAnimation>(player).unwrap().shooting);
}

#[test]
fn landing_clears_the_jump_state() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(time_with_delta(0.0));
    world.init_resource::<Messages<ShotRequest>>();

    let player = spawn_player(&mut world, Vec2::new(100.0, 561.0));
    spawn_platform(&mut world, 0.0, 560.0);
    world.get_mut::<PlayerAnimation>(player).unwrap().jumping = true;

    run_system_once(&mut world, super::animation::animate);

    assert!(!world.get::<PlayerAnimation>(player).unwrap().jumping);
}
