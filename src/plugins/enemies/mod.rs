//! Enemies plugin: ground and flying hunters, plus the spawn scheduler.
//!
//! Enemy kinds are a closed enum; the movement system matches on the kind
//! instead of dispatching through some open-ended hierarchy. Enemies march
//! leftward at a per-kind speed that steps up once the kill counter passes
//! the rush threshold, and mark themselves for despawn when they leave the
//! screen.
//!
//! The spawner is time-gated (one wave per interval) and composition-gated
//! by the kill counter: early sessions get a lone flyer, later ones add a
//! ground unit and a boss volley aimed at the player.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::Rng;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::boss::Boss;
use crate::plugins::combat::PendingDespawn;
use crate::plugins::core::Session;
use crate::plugins::physics::Hitbox;
use crate::plugins::player::{Player, apply_movement};
use crate::plugins::projectiles::messages::{ShotKind, ShotRequest};

const GROUND_COLOR: Color = Color::srgb(0.55, 0.30, 0.12);
const FLYING_COLOR: Color = Color::srgb(0.62, 0.25, 0.80);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enemy {
    Ground,
    Flying,
}

impl Enemy {
    /// Signed horizontal displacement per tick. Movement is leftward; the
    /// magnitude steps up once `kills` exceeds the rush threshold.
    pub fn vx(self, tunables: &Tunables, kills: u32) -> f32 {
        let rushed = kills > tunables.rush_kills;
        let speed = match self {
            Enemy::Ground if rushed => tunables.ground_rush_speed,
            Enemy::Ground => tunables.ground_speed,
            Enemy::Flying if rushed => tunables.flying_rush_speed,
            Enemy::Flying => tunables.flying_speed,
        };
        -speed
    }

    fn size(self, tunables: &Tunables) -> Vec2 {
        match self {
            Enemy::Ground => tunables.ground_size,
            Enemy::Flying => tunables.flying_size,
        }
    }

    fn color(self) -> Color {
        match self {
            Enemy::Ground => GROUND_COLOR,
            Enemy::Flying => FLYING_COLOR,
        }
    }
}

/// Elapsed-time gate between spawn waves.
#[derive(Resource, Deref, DerefMut)]
pub struct SpawnTimer(pub Timer);

pub fn plugin(app: &mut App) {
    let interval = app.world().resource::<Tunables>().spawn_interval;
    app.insert_resource(SpawnTimer(Timer::from_seconds(
        interval,
        TimerMode::Repeating,
    )));

    app.add_systems(OnEnter(GameState::InGame), reset_spawn_timer);
    app.add_systems(
        FixedUpdate,
        (move_enemies, spawn_wave.after(apply_movement))
            .run_if(in_state(GameState::InGame)),
    );
}

fn reset_spawn_timer(mut timer: ResMut<SpawnTimer>) {
    timer.reset();
}

pub fn move_enemies(
    tunables: Res<Tunables>,
    session: Res<Session>,
    mut commands: Commands,
    mut q_enemies: Query<(Entity, &Enemy, &mut Hitbox), Without<PendingDespawn>>,
) {
    for (entity, kind, mut hitbox) in &mut q_enemies {
        hitbox.shift_x(kind.vx(&tunables, session.kills));

        let off_screen = hitbox.left() < 0.0
            || hitbox.top() < 0.0
            || hitbox.top() > tunables.screen.y;
        if off_screen {
            commands.entity(entity).insert(PendingDespawn);
        }
    }
}

/// One spawn tick per elapsed interval. Composition depends on the kill
/// counter: past the wave threshold, a ground unit joins the flyer and the
/// boss fires a volley at the player's current center.
pub fn spawn_wave(
    time: Res<Time>,
    tunables: Res<Tunables>,
    session: Res<Session>,
    mut timer: ResMut<SpawnTimer>,
    mut commands: Commands,
    mut volley: MessageWriter<ShotRequest>,
    q_player: Query<&Hitbox, With<Player>>,
    q_boss: Query<&Hitbox, With<Boss>>,
) {
    if !timer.tick(time.delta()).just_finished() {
        return;
    }

    let Ok(player) = q_player.single() else {
        return;
    };

    let lead_x = player.left() + tunables.spawn_lead;
    let flying_top = rand::thread_rng().gen_range(0.0..tunables.screen.y / 2.0);
    spawn_enemy(&mut commands, &tunables, Enemy::Flying, lead_x, flying_top);

    if session.kills > tunables.wave_kills {
        spawn_enemy(
            &mut commands,
            &tunables,
            Enemy::Ground,
            lead_x,
            tunables.ground_top,
        );

        if let Ok(boss) = q_boss.single() {
            volley.write(ShotRequest {
                kind: ShotKind::Boss,
                origin: boss.center(),
                target: player.center(),
                speed: tunables.boss_shot_speed,
            });
        }
    }
}

fn spawn_enemy(
    commands: &mut Commands,
    tunables: &Tunables,
    kind: Enemy,
    center_x: f32,
    top: f32,
) {
    let size = kind.size(tunables);

    commands.spawn((
        Name::new(match kind {
            Enemy::Ground => "GroundEnemy",
            Enemy::Flying => "FlyingEnemy",
        }),
        kind,
        Hitbox::new(center_x - size.x / 2.0, top, size.x, size.y),
        Sprite {
            color: kind.color(),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        DespawnOnExit(GameState::InGame),
    ));
}
