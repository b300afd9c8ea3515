//! Player animation state machine.
//!
//! Base states are idle, walking and jumping; shooting is a one-shot overlay
//! consumed on the next frame advance of whichever base state is active.
//! Frame advances are gated by elapsed time (not the tick rate), so the
//! animation speed is independent of the simulation step.
//!
//! Frames are asset-free color variants; facing mirrors the sprite.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::physics::{Hitbox, Velocity};
use crate::plugins::projectiles::messages::{ShotKind, ShotRequest};
use crate::plugins::world::Platform;

use super::Player;

const IDLE_FRAMES: [Color; 2] = [Color::srgb(0.20, 0.75, 0.90), Color::srgb(0.16, 0.66, 0.82)];
const WALK_FRAMES: [Color; 2] = [Color::srgb(0.25, 0.82, 0.95), Color::srgb(0.13, 0.60, 0.78)];
const JUMP_FRAME: Color = Color::srgb(0.32, 0.88, 1.00);
const SHOOT_FLASH: Color = Color::srgb(0.95, 0.92, 0.55);

pub fn initial_color() -> Color {
    IDLE_FRAMES[0]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BaseState {
    Idle,
    Walking,
    Jumping,
}

#[derive(Component, Debug)]
pub struct PlayerAnimation {
    pub walking: bool,
    pub jumping: bool,
    pub shooting: bool,
    pub facing_left: bool,
    frame: usize,
    timer: Timer,
}

impl PlayerAnimation {
    pub fn new(frame_interval: f32) -> Self {
        Self {
            walking: false,
            jumping: false,
            shooting: false,
            facing_left: false,
            frame: 0,
            timer: Timer::from_seconds(frame_interval, TimerMode::Repeating),
        }
    }

    fn base(&self) -> BaseState {
        if self.jumping {
            BaseState::Jumping
        } else if self.walking {
            BaseState::Walking
        } else {
            BaseState::Idle
        }
    }

    #[cfg(test)]
    pub(super) fn frame(&self) -> usize {
        self.frame
    }
}

fn frame_color(base: BaseState, frame: usize) -> Color {
    match base {
        BaseState::Idle => IDLE_FRAMES[frame % IDLE_FRAMES.len()],
        BaseState::Walking => WALK_FRAMES[frame % WALK_FRAMES.len()],
        BaseState::Jumping => JUMP_FRAME,
    }
}

pub fn animate(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut shots: MessageReader<ShotRequest>,
    q_platforms: Query<&Hitbox, With<Platform>>,
    mut q_player: Query<(&Velocity, &Hitbox, &mut PlayerAnimation, &mut Sprite), With<Player>>,
) {
    let fired = shots.read().any(|req| req.kind == ShotKind::Player);

    let Ok((vel, hitbox, mut anim, mut sprite)) = q_player.single_mut() else {
        return;
    };

    if fired {
        anim.shooting = true;
    }

    anim.walking = vel.x.abs() >= tunables.walk_threshold;
    if vel.x > 0.0 {
        anim.facing_left = false;
    } else if vel.x < 0.0 {
        anim.facing_left = true;
    }

    // Landing ends the jump state.
    if anim.jumping && q_platforms.iter().any(|p| hitbox.overlaps(p)) {
        anim.jumping = false;
    }

    if anim.timer.tick(time.delta()).just_finished() {
        anim.frame = anim.frame.wrapping_add(1);
        sprite.color = if anim.shooting {
            anim.shooting = false;
            SHOOT_FLASH
        } else {
            frame_color(anim.base(), anim.frame)
        };
    }

    sprite.flip_x = anim.facing_left;
}
