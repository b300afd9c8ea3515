//! UI plugin: HUD kill counter, start and end screens, session transitions.
//!
//! Screens are plain UI text; any key release moves the state machine on
//! (start a session from the title screen, start another from the end
//! screen). Escape quits from anywhere.

use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::core::Session;

const TITLE_SIZE: f32 = 48.0;
const BODY_SIZE: f32 = 22.0;

#[derive(Component)]
struct KillReadout;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::StartScreen), spawn_start_screen)
        .add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnEnter(GameState::GameOver), spawn_end_screen)
        .add_systems(Update, update_hud.run_if(in_state(GameState::InGame)))
        .add_systems(
            Update,
            begin_session.run_if(in_state(GameState::StartScreen)),
        )
        .add_systems(
            Update,
            restart_session.run_if(in_state(GameState::GameOver)),
        )
        .add_systems(Update, quit_on_escape);
}

fn text(value: impl Into<String>, size: f32) -> (Text, TextFont, TextColor) {
    (
        Text::new(value),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(Color::WHITE),
    )
}

fn centered_column() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        row_gap: Val::Px(28.0),
        ..default()
    }
}

fn spawn_start_screen(mut commands: Commands) {
    commands
        .spawn((
            Name::new("StartScreen"),
            centered_column(),
            DespawnOnExit(GameState::StartScreen),
        ))
        .with_children(|parent| {
            parent.spawn(text("Robot Runner", TITLE_SIZE));
            parent.spawn(text(
                "A, D to move, W to jump, Mouse to aim and shoot",
                BODY_SIZE,
            ));
            parent.spawn(text("Press a key to play", BODY_SIZE));
        });
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Hud"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(20.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            DespawnOnExit(GameState::InGame),
        ))
        .with_children(|parent| {
            parent.spawn((KillReadout, text("0", BODY_SIZE)));
        });
}

fn update_hud(session: Res<Session>, mut q_readout: Query<&mut Text, With<KillReadout>>) {
    if !session.is_changed() {
        return;
    }
    for mut readout in &mut q_readout {
        readout.0 = session.kills.to_string();
    }
}

fn spawn_end_screen(mut commands: Commands, session: Res<Session>) {
    let headline = if session.win { "You Win" } else { "Game Over" };
    let score = format!("Score: {}", session.kills);

    commands
        .spawn((
            Name::new("EndScreen"),
            centered_column(),
            DespawnOnExit(GameState::GameOver),
        ))
        .with_children(|parent| {
            parent.spawn(text(headline, TITLE_SIZE));
            parent.spawn(text(score, BODY_SIZE));
            parent.spawn(text("Press a key to play again", BODY_SIZE));
        });
}

fn any_key_released(keys: &ButtonInput<KeyCode>) -> bool {
    keys.get_just_released().next().is_some()
}

fn begin_session(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(keys) = keys else {
        return;
    };
    if any_key_released(&keys) {
        next.set(GameState::InGame);
    }
}

fn restart_session(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(keys) = keys else {
        return;
    };
    if any_key_released(&keys) {
        next.set(GameState::InGame);
    }
}

fn quit_on_escape(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests;
