use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::plugins::core::Session;

use super::KillReadout;

#[test]
fn hud_tracks_the_kill_counter() {
    let mut world = World::new();
    world.insert_resource(Session {
        kills: 7,
        win: false,
    });
    let readout = world.spawn((KillReadout, Text::new("0"))).id();

    run_system_once(&mut world, super::update_hud);

    assert_eq!(world.get::<Text>(readout).unwrap().0, "7");
}

#[test]
fn end_screen_headline_follows_the_win_flag() {
    for (win, headline) in [(true, "You Win"), (false, "Game Over")] {
        let mut world = World::new();
        world.insert_resource(Session { kills: 3, win });

        run_system_once(&mut world, super::spawn_end_screen);

        let found = world
            .query::<&Text>()
            .iter(&world)
            .any(|t| t.0 == headline);
        assert!(found, "expected a '{headline}' headline");
    }
}
