use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::boss::Boss;
use crate::plugins::enemies::Enemy;
use crate::plugins::physics::{Hitbox, Position, Velocity};
use crate::plugins::player::Player;
use crate::plugins::projectiles::{PlayerShot, Projectile};
use crate::plugins::world::Platform;

fn spawn_scene(world: &mut World) -> (Entity, Entity, Entity, Entity) {
    let platform = world
        .spawn((Platform, Hitbox::new(100.0, 560.0, 200.0, 40.0)))
        .id();
    let enemy = world
        .spawn((Enemy::Ground, Hitbox::new(600.0, 490.0, 48.0, 70.0)))
        .id();
    let boss = world
        .spawn((Boss { health: 30 }, Hitbox::new(9_940.0, 120.0, 120.0, 120.0)))
        .id();
    let shot = world
        .spawn((
            PlayerShot,
            Projectile { vel: Vec2::ZERO },
            Hitbox::new(500.0, 300.0, 18.0, 8.0),
        ))
        .id();
    (platform, enemy, boss, shot)
}

fn spawn_player(world: &mut World, anchor: Vec2, vel_x: f32) -> Entity {
    let size = Tunables::default().player_size;
    world
        .spawn((
            Player,
            Position(anchor),
            Velocity(Vec2::new(vel_x, 0.0)),
            Hitbox::from_mid_bottom(anchor, size),
        ))
        .id()
}

#[test]
fn pushing_past_the_band_shifts_the_world_left() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());

    // Right edge at 518, past screen/1.7 ≈ 470.6.
    let player = spawn_player(&mut world, Vec2::new(500.0, 561.0), 4.0);
    let (platform, enemy, boss, shot) = spawn_scene(&mut world);

    run_system_once(&mut world, super::scroll_world);

    assert_eq!(world.get::<Hitbox>(platform).unwrap().left(), 93.0);
    assert_eq!(world.get::<Hitbox>(enemy).unwrap().left(), 595.0);
    assert_eq!(world.get::<Hitbox>(boss).unwrap().left(), 9_933.0);
    // Shots keep their screen position.
    assert_eq!(world.get::<Hitbox>(shot).unwrap().left(), 500.0);
    // The player's logical position rolls back by its velocity.
    assert_eq!(world.get::<Position>(player).unwrap().x, 496.0);
}

#[test]
fn lagging_behind_the_band_shifts_the_world_right() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());

    // Right edge at 318, below screen/2 = 400. Velocity is leftward; the
    // position still advances by its magnitude.
    let player = spawn_player(&mut world, Vec2::new(300.0, 561.0), -3.0);
    let (platform, enemy, boss, _) = spawn_scene(&mut world);

    run_system_once(&mut world, super::scroll_world);

    assert_eq!(world.get::<Hitbox>(platform).unwrap().left(), 107.0);
    assert_eq!(world.get::<Hitbox>(enemy).unwrap().left(), 605.0);
    assert_eq!(world.get::<Hitbox>(boss).unwrap().left(), 9_947.0);
    assert_eq!(world.get::<Position>(player).unwrap().x, 303.0);
}

#[test]
fn inside_the_band_nothing_moves() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());

    // Right edge at 438: above screen/2, below screen/1.7.
    let player = spawn_player(&mut world, Vec2::new(420.0, 561.0), 5.0);
    let (platform, ..) = spawn_scene(&mut world);

    run_system_once(&mut world, super::scroll_world);

    assert_eq!(world.get::<Hitbox>(platform).unwrap().left(), 100.0);
    assert_eq!(world.get::<Position>(player).unwrap().x, 420.0);
}
