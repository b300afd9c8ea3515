//! Global state machine.
//!
//! One session runs from entering `InGame` until something sends the game to
//! `GameOver`. Whether that session ended as a win lives in the `Session`
//! resource, not here, so the end screen renders either outcome from the
//! same state.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    StartScreen,
    InGame,
    GameOver,
}
