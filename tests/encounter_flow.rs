//! Run flow: level clear, advancement, victory, game over, and pause.

mod common;

use bevy::ecs::event::EventCursor;
use bevy::prelude::*;

use common::{advance, count_events, spawn_enemy_at, spawn_player_at, tap, test_app};
use gridfire::combat::Health;
use gridfire::core::{DamageEvent, GameState, LevelClearedEvent, PlayState};
use gridfire::encounter::Encounter;
use gridfire::world::CurrentLevel;

fn kill(app: &mut App, target: Entity, source: Entity) {
    app.world_mut().send_event(DamageEvent {
        target,
        source,
        amount: 1000.0,
    });
}

fn game_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

#[test]
fn clearing_a_level_schedules_one_advance() {
    let mut app = test_app(2);
    app.insert_resource(Encounter::for_level(3));
    let player = spawn_player_at(&mut app, Vec3::new(0.0, 0.8, 0.0));
    let enemies = [
        spawn_enemy_at(&mut app, Vec3::new(30.0, 0.9, 0.0)),
        spawn_enemy_at(&mut app, Vec3::new(30.0, 0.9, 4.0)),
        spawn_enemy_at(&mut app, Vec3::new(34.0, 0.9, 4.0)),
    ];
    let mut cleared = EventCursor::<LevelClearedEvent>::default();

    advance(&mut app, 0.016);
    assert_eq!(app.world().resource::<Encounter>().alive_enemies, 3);

    for enemy in enemies {
        kill(&mut app, enemy, player);
    }
    advance(&mut app, 0.016);
    assert_eq!(count_events(&app, &mut cleared), 1);
    assert!(app.world().resource::<Encounter>().clear_scheduled());
    assert_eq!(game_state(&app), GameState::InGame);

    // Halfway through the delay nothing re-fires
    advance(&mut app, 0.5);
    assert_eq!(count_events(&app, &mut cleared), 0);
    assert_eq!(game_state(&app), GameState::InGame);

    advance(&mut app, 0.5);
    advance(&mut app, 0.016);
    assert_eq!(game_state(&app), GameState::LevelTransition);
    assert_eq!(app.world().resource::<CurrentLevel>().index, 1);

    // The transition state lasts one frame before gameplay resumes
    advance(&mut app, 0.016);
    assert_eq!(game_state(&app), GameState::InGame);
}

#[test]
fn clearing_the_final_level_wins_the_run() {
    let mut app = test_app(1);
    app.insert_resource(Encounter::for_level(1));
    let player = spawn_player_at(&mut app, Vec3::new(0.0, 0.8, 0.0));
    let enemy = spawn_enemy_at(&mut app, Vec3::new(30.0, 0.9, 0.0));

    kill(&mut app, enemy, player);
    advance(&mut app, 0.016);
    advance(&mut app, 1.0);
    advance(&mut app, 0.016);

    assert_eq!(game_state(&app), GameState::Victory);
    assert_eq!(app.world().resource::<CurrentLevel>().index, 0);
}

#[test]
fn player_death_ends_the_run() {
    let mut app = test_app(2);
    let player = spawn_player_at(&mut app, Vec3::new(0.0, 0.8, 0.0));
    let enemy = spawn_enemy_at(&mut app, Vec3::new(30.0, 0.9, 0.0));

    kill(&mut app, player, enemy);
    advance(&mut app, 0.016);
    assert_eq!(game_state(&app), GameState::InGame);

    advance(&mut app, 0.016);
    assert_eq!(game_state(&app), GameState::GameOver);
    // Leaving gameplay removes the pause sub-state with it
    assert!(app.world().get_resource::<State<PlayState>>().is_none());
}

#[test]
fn death_during_the_clear_delay_wins_over_advancement() {
    let mut app = test_app(2);
    app.insert_resource(Encounter::for_level(1));
    let player = spawn_player_at(&mut app, Vec3::new(0.0, 0.8, 0.0));
    let enemy = spawn_enemy_at(&mut app, Vec3::new(30.0, 0.9, 0.0));

    kill(&mut app, enemy, player);
    advance(&mut app, 0.016);
    assert!(app.world().resource::<Encounter>().clear_scheduled());

    // The player dies the same tick the delay runs out
    kill(&mut app, player, enemy);
    advance(&mut app, 1.0);
    advance(&mut app, 0.016);

    assert_eq!(game_state(&app), GameState::GameOver);
    assert_eq!(app.world().resource::<CurrentLevel>().index, 0);
}

#[test]
fn escape_pauses_and_resumes_the_simulation() {
    let mut app = test_app(1);
    let player = spawn_player_at(&mut app, Vec3::new(0.0, 0.8, 0.0));
    spawn_enemy_at(&mut app, Vec3::new(2.0, 0.9, 0.0));

    advance(&mut app, 0.016);
    assert_eq!(app.world().get::<Health>(player).unwrap().current, 90.0);

    tap(&mut app, KeyCode::Escape);
    advance(&mut app, 0.016);

    // Frozen: five seconds pass and the attack cooldown never runs out
    advance(&mut app, 5.0);
    assert_eq!(
        *app.world().resource::<State<PlayState>>().get(),
        PlayState::Paused
    );
    assert_eq!(app.world().get::<Health>(player).unwrap().current, 90.0);

    tap(&mut app, KeyCode::Escape);
    advance(&mut app, 0.016);
    assert_eq!(app.world().get::<Health>(player).unwrap().current, 90.0);

    advance(&mut app, 1.0);
    assert_eq!(
        *app.world().resource::<State<PlayState>>().get(),
        PlayState::Running
    );
    assert_eq!(app.world().get::<Health>(player).unwrap().current, 90.0);

    advance(&mut app, 1.0);
    assert_eq!(app.world().get::<Health>(player).unwrap().current, 80.0);
}
