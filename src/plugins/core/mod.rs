//! Core plugin: shared session resources and global settings.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

const ARENA_CLEAR: Color = Color::srgb(0.45, 0.08, 0.08);
const SCREEN_CLEAR: Color = Color::srgb(0.02, 0.02, 0.02);

/// Per-session score and outcome.
///
/// `win` is only ever set by the combat resolver on boss defeat; every other
/// way a session ends leaves it false.
#[derive(Resource, Debug, Default, Clone)]
pub struct Session {
    pub kills: u32,
    pub win: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.init_resource::<Session>();
    app.insert_resource(ClearColor(SCREEN_CLEAR));

    app.add_systems(OnEnter(GameState::InGame), (reset_session, arena_backdrop));
    app.add_systems(OnEnter(GameState::StartScreen), screen_backdrop);
    app.add_systems(OnEnter(GameState::GameOver), screen_backdrop);
}

fn reset_session(mut session: ResMut<Session>) {
    *session = Session::default();
}

fn arena_backdrop(mut clear: ResMut<ClearColor>) {
    clear.0 = ARENA_CLEAR;
}

fn screen_backdrop(mut clear: ResMut<ClearColor>) {
    clear.0 = SCREEN_CLEAR;
}
