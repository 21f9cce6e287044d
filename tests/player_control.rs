//! Player input handling: shooting gate, movement intent, mouse look.

mod common;

use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use common::{advance, spawn_player_at, tap, test_app};
use gridfire::player::{MoveIntent, PlayerCamera, ShootState};

#[test]
fn shot_arms_the_cooldown() {
    let mut app = test_app(1);
    let player = spawn_player_at(&mut app, Vec3::new(0.0, 0.8, 0.0));

    tap(&mut app, MouseButton::Left);
    advance(&mut app, 0.05);

    // The gate is spent the tick the click lands; the countdown starts
    // ticking the tick after
    let state = app.world().get::<ShootState>(player).unwrap();
    assert!(!state.can_shoot);
    assert_eq!(state.cooldown_remaining, 0.3);

    advance(&mut app, 0.1);
    let state = app.world().get::<ShootState>(player).unwrap();
    assert!(!state.can_shoot);
    assert!((state.cooldown_remaining - 0.2).abs() < 1e-3);

    advance(&mut app, 0.25);
    let state = app.world().get::<ShootState>(player).unwrap();
    assert!(state.can_shoot);
    assert_eq!(state.cooldown_remaining, 0.0);
}

#[test]
fn clicks_during_the_cooldown_are_ignored() {
    let mut app = test_app(1);
    let player = spawn_player_at(&mut app, Vec3::new(0.0, 0.8, 0.0));

    tap(&mut app, MouseButton::Left);
    advance(&mut app, 0.05);

    // A second click must not re-arm the countdown
    tap(&mut app, MouseButton::Left);
    advance(&mut app, 0.1);

    let state = app.world().get::<ShootState>(player).unwrap();
    assert!(!state.can_shoot);
    assert!((state.cooldown_remaining - 0.2).abs() < 1e-3);
}

#[test]
fn keyboard_sets_the_move_intent() {
    let mut app = test_app(1);
    let player = spawn_player_at(&mut app, Vec3::new(0.0, 0.8, 0.0));

    tap(&mut app, KeyCode::KeyW);
    advance(&mut app, 0.05);
    assert_eq!(
        app.world().get::<MoveIntent>(player).unwrap().0,
        Vec3::new(0.0, 0.0, -1.0)
    );

    // Held W plus a fresh A reads as a raw diagonal; normalization
    // happens when the displacement is computed
    tap(&mut app, KeyCode::KeyA);
    advance(&mut app, 0.05);
    assert_eq!(
        app.world().get::<MoveIntent>(player).unwrap().0,
        Vec3::new(-1.0, 0.0, -1.0)
    );

    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(KeyCode::KeyW);
        keys.release(KeyCode::KeyA);
    }
    advance(&mut app, 0.05);
    assert_eq!(app.world().get::<MoveIntent>(player).unwrap().0, Vec3::ZERO);

    // Arrow keys alias WASD
    tap(&mut app, KeyCode::ArrowUp);
    advance(&mut app, 0.05);
    assert_eq!(
        app.world().get::<MoveIntent>(player).unwrap().0,
        Vec3::new(0.0, 0.0, -1.0)
    );
}

#[test]
fn mouse_pitch_clamps_straight_up_and_down() {
    let mut app = test_app(1);
    spawn_player_at(&mut app, Vec3::new(0.0, 0.8, 0.0));

    app.world_mut().send_event(MouseMotion {
        delta: Vec2::new(0.0, 10_000.0),
    });
    advance(&mut app, 0.016);

    let (camera, transform) = camera_state(&mut app);
    assert_eq!(camera, -FRAC_PI_2);
    assert!(transform.angle_between(Quat::from_rotation_x(-FRAC_PI_2)) < 1e-5);

    app.world_mut().send_event(MouseMotion {
        delta: Vec2::new(0.0, -10_000.0),
    });
    advance(&mut app, 0.016);

    let (camera, transform) = camera_state(&mut app);
    assert_eq!(camera, FRAC_PI_2);
    assert!(transform.angle_between(Quat::from_rotation_x(FRAC_PI_2)) < 1e-5);
}

#[test]
fn mouse_x_yaws_the_body_not_the_camera() {
    let mut app = test_app(1);
    let player = spawn_player_at(&mut app, Vec3::new(0.0, 0.8, 0.0));

    app.world_mut().send_event(MouseMotion {
        delta: Vec2::new(100.0, 0.0),
    });
    advance(&mut app, 0.016);

    // 100 px at 0.002 sensitivity and 2.0 rotation speed turns 0.4 rad
    // clockwise
    let rotation = app.world().get::<Transform>(player).unwrap().rotation;
    assert!(rotation.angle_between(Quat::from_rotation_y(-0.4)) < 1e-4);

    let (pitch, camera_rotation) = camera_state(&mut app);
    assert_eq!(pitch, 0.0);
    assert!(camera_rotation.angle_between(Quat::IDENTITY) < 1e-5);
}

fn camera_state(app: &mut App) -> (f32, Quat) {
    let mut query = app
        .world_mut()
        .query_filtered::<(&PlayerCamera, &Transform), With<Camera3d>>();
    let (camera, transform) = query.single(app.world());
    (camera.pitch, transform.rotation)
}
