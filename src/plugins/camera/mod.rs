//! Camera plugin (render-only): fixed 2D camera plus the sim → render sync.
//!
//! Simulation coordinates are screen space (origin top-left, y down); Bevy
//! renders world space (origin center, y up). `sync_transforms` maps every
//! hitbox center into world space before transform propagation. The camera
//! itself never moves: scrolling is a world shift, not a camera pan.

use bevy::prelude::*;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::physics::Hitbox;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_camera);
    app.add_systems(
        PostUpdate,
        sync_transforms
            .before(TransformSystems::Propagate)
            .run_if(in_state(GameState::InGame)),
    );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
    ));
}

fn sync_transforms(tunables: Res<Tunables>, mut q_drawn: Query<(&Hitbox, &mut Transform)>) {
    let half = tunables.screen / 2.0;
    for (hitbox, mut tf) in &mut q_drawn {
        let center = hitbox.center();
        tf.translation.x = center.x - half.x;
        tf.translation.y = half.y - center.y;
    }
}
