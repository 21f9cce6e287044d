//! Damage resolution rules: clamping, single deaths, corpse immunity.

mod common;

use bevy::ecs::event::EventCursor;
use bevy::prelude::*;

use common::{advance, count_events, spawn_enemy_at, spawn_player_at, test_app};
use gridfire::combat::{Dead, Health};
use gridfire::core::{DamageEvent, DeathEvent, HitEvent};

#[test]
fn overkill_clamps_health_at_zero() {
    let mut app = test_app(1);
    let player = spawn_player_at(&mut app, Vec3::new(100.0, 0.8, 0.0));
    let enemy = spawn_enemy_at(&mut app, Vec3::new(30.0, 0.9, 0.0));
    let mut hits = EventCursor::<HitEvent>::default();

    app.world_mut().send_event(DamageEvent {
        target: enemy,
        source: player,
        amount: 80.0,
    });
    advance(&mut app, 0.05);

    assert_eq!(app.world().get::<Health>(enemy).unwrap().current, 0.0);
    let events = app.world().resource::<Events<HitEvent>>();
    let recorded: Vec<(f32, f32)> = hits
        .read(events)
        .map(|hit| (hit.amount, hit.remaining))
        .collect();
    assert_eq!(recorded, vec![(80.0, 0.0)]);
}

#[test]
fn simultaneous_lethal_hits_fire_one_death() {
    let mut app = test_app(1);
    let player = spawn_player_at(&mut app, Vec3::new(100.0, 0.8, 0.0));
    let enemy = spawn_enemy_at(&mut app, Vec3::new(30.0, 0.9, 0.0));
    let mut deaths = EventCursor::<DeathEvent>::default();
    let mut hits = EventCursor::<HitEvent>::default();

    for _ in 0..2 {
        app.world_mut().send_event(DamageEvent {
            target: enemy,
            source: player,
            amount: 30.0,
        });
    }
    advance(&mut app, 0.05);

    assert_eq!(count_events(&app, &mut deaths), 1);
    assert!(app.world().get::<Dead>(enemy).is_some());
    assert_eq!(app.world().get::<Health>(enemy).unwrap().current, 0.0);

    // Both hits landed; the second was clamped to the health left
    let events = app.world().resource::<Events<HitEvent>>();
    let remaining: Vec<f32> = hits.read(events).map(|hit| hit.remaining).collect();
    assert_eq!(remaining, vec![20.0, 0.0]);
}

#[test]
fn corpses_ignore_further_damage() {
    let mut app = test_app(1);
    let player = spawn_player_at(&mut app, Vec3::new(100.0, 0.8, 0.0));
    let enemy = spawn_enemy_at(&mut app, Vec3::new(30.0, 0.9, 0.0));
    let mut deaths = EventCursor::<DeathEvent>::default();
    let mut hits = EventCursor::<HitEvent>::default();

    app.world_mut().send_event(DamageEvent {
        target: enemy,
        source: player,
        amount: 50.0,
    });
    advance(&mut app, 0.05);
    assert_eq!(count_events(&app, &mut deaths), 1);
    assert_eq!(count_events(&app, &mut hits), 1);

    app.world_mut().send_event(DamageEvent {
        target: enemy,
        source: player,
        amount: 10.0,
    });
    advance(&mut app, 0.05);

    assert_eq!(count_events(&app, &mut deaths), 0);
    assert_eq!(count_events(&app, &mut hits), 0);
    assert_eq!(app.world().get::<Health>(enemy).unwrap().current, 0.0);
}

#[test]
fn damage_against_a_despawned_target_is_dropped() {
    let mut app = test_app(1);
    let player = spawn_player_at(&mut app, Vec3::new(100.0, 0.8, 0.0));
    let enemy = spawn_enemy_at(&mut app, Vec3::new(30.0, 0.9, 0.0));
    app.world_mut().despawn(enemy);
    let mut hits = EventCursor::<HitEvent>::default();

    app.world_mut().send_event(DamageEvent {
        target: enemy,
        source: player,
        amount: 10.0,
    });
    advance(&mut app, 0.05);

    assert_eq!(count_events(&app, &mut hits), 0);
}
