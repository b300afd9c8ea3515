//! Producer: player fire input.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::physics::Hitbox;
use crate::plugins::player::Player;

use super::messages::{ShotKind, ShotRequest};

/// On left click, request a shot from the player center toward the cursor.
///
/// The cursor is already in screen space (origin top-left, y down), the same
/// frame the simulation uses, so no conversion is needed. Missing input
/// state or cursor (headless app, pointer outside the window) makes this a
/// no-op.
pub fn request_player_shot(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    windows: Query<&Window>,
    q_player: Query<&Hitbox, With<Player>>,
    tunables: Res<Tunables>,
    mut writer: MessageWriter<ShotRequest>,
) {
    let Some(buttons) = buttons else {
        return;
    };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else {
        debug!("no single Window to read the cursor from");
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok(player) = q_player.single() else {
        return;
    };

    writer.write(ShotRequest {
        kind: ShotKind::Player,
        origin: player.center(),
        target: cursor,
        speed: tunables.shot_speed,
    });
}
