//! First-person player movement and camera control.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use bevy_rapier3d::prelude::*;

use super::components::*;
use crate::combat::{Dead, Health};

/// Half the player capsule's height: collider is `capsule_y(0.5, 0.3)`,
/// so the body center sits this far above the feet.
pub const PLAYER_HALF_HEIGHT: f32 = 0.8;

/// Marker component for the player's camera.
#[derive(Component, Default)]
pub struct PlayerCamera {
    /// Current pitch angle in radians (looking up/down)
    pub pitch: f32,
}

/// Grab and hide the cursor whenever gameplay is live.
pub fn grab_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

/// Release the cursor for menus and the pause overlay.
pub fn release_cursor(mut window_query: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = window_query.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

/// Record this tick's movement intent from the keyboard.
pub fn gather_move_intent(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut MoveIntent, (With<Player>, Without<Dead>)>,
) {
    let Ok(mut intent) = query.get_single_mut() else {
        return;
    };

    let mut direction = Vec3::ZERO;
    if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        direction.z -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        direction.z += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        direction.x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        direction.x += 1.0;
    }

    intent.0 = direction;
}

/// Handle mouse movement for looking around.
///
/// Rotates the player entity horizontally (yaw) and the camera
/// vertically (pitch). The camera is a child of the player, so yaw
/// affects both. Pitch clamps to straight up/down.
pub fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    config: Res<PlayerConfig>,
    mut player_query: Query<&mut Transform, (With<Player>, Without<Dead>)>,
    mut camera_query: Query<
        (&mut Transform, &mut PlayerCamera),
        (With<Camera3d>, Without<Player>),
    >,
) {
    let mut delta = Vec2::ZERO;
    for event in mouse_motion.read() {
        delta += event.delta;
    }
    if delta == Vec2::ZERO {
        return;
    }

    let Ok(mut player_transform) = player_query.get_single_mut() else {
        return;
    };
    let Ok((mut camera_transform, mut camera)) = camera_query.get_single_mut() else {
        return;
    };

    let look_rate = config.mouse_sensitivity * config.rotation_speed;

    player_transform.rotate_y(-delta.x * look_rate);

    camera.pitch -= delta.y * look_rate;
    camera.pitch = camera
        .pitch
        .clamp(-std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2);
    camera_transform.rotation = Quat::from_rotation_x(camera.pitch);
}

/// Camera-relative displacement for one tick: normalized intent scaled
/// by speed and dt, rotated into the world by the body yaw. Zero intent
/// gives zero displacement.
pub fn intent_displacement(intent: Vec3, yaw: Quat, speed: f32, dt: f32) -> Vec3 {
    let Some(direction) = intent.with_y(0.0).try_normalize() else {
        return Vec3::ZERO;
    };
    yaw * direction * speed * dt
}

/// Feed the tick's displacement to the character controller.
///
/// The controller resolves collisions during the physics step; the
/// transform everyone reads next tick is the post-collision position,
/// never the requested one.
pub fn player_movement(
    time: Res<Time>,
    config: Res<PlayerConfig>,
    mut query: Query<
        (&Transform, &MoveIntent, &mut KinematicCharacterController),
        (With<Player>, Without<Dead>),
    >,
) {
    let Ok((transform, intent, mut controller)) = query.get_single_mut() else {
        return;
    };

    let yaw = Quat::from_rotation_y(transform.rotation.to_euler(EulerRot::YXZ).0);
    let displacement = intent_displacement(intent.0, yaw, config.move_speed, time.delta_secs());
    controller.translation = Some(displacement);
}

/// Spawn the player entity with its camera child.
///
/// `position` is the body center; the camera lands at eye height.
pub fn spawn_player(commands: &mut Commands, config: &PlayerConfig, position: Vec3) -> Entity {
    let player = commands
        .spawn((
            Player,
            Health::new(config.max_health),
            MoveIntent::default(),
            ShootState::default(),
            Transform::from_translation(position),
            GlobalTransform::default(),
            Visibility::default(),
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.3),
            KinematicCharacterController {
                offset: CharacterLength::Absolute(0.01),
                ..default()
            },
        ))
        .id();

    commands.entity(player).with_children(|parent| {
        parent.spawn((
            Camera3d::default(),
            PlayerCamera::default(),
            Transform::from_xyz(0.0, config.eye_height - PLAYER_HALF_HEIGHT, 0.0),
        ));
    });

    player
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_intent_gives_zero_displacement() {
        let displacement = intent_displacement(Vec3::ZERO, Quat::IDENTITY, 5.0, 1.0);
        assert_eq!(displacement, Vec3::ZERO);
    }

    #[test]
    fn strafe_intent_moves_along_camera_right() {
        // Body yawed 180 degrees: facing +Z, so camera-right is -X
        let yaw = Quat::from_rotation_y(std::f32::consts::PI);
        let displacement = intent_displacement(Vec3::new(1.0, 0.0, 0.0), yaw, 5.0, 1.0);
        assert!((displacement.length() - 5.0).abs() < 1e-4);
        assert!((displacement.x - -5.0).abs() < 1e-4);
        assert!(displacement.y.abs() < 1e-6);
        assert!(displacement.z.abs() < 1e-4);
    }

    #[test]
    fn diagonal_intent_is_normalized() {
        let displacement =
            intent_displacement(Vec3::new(1.0, 0.0, -1.0), Quat::IDENTITY, 5.0, 1.0);
        assert!((displacement.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn vertical_intent_is_stripped() {
        let displacement = intent_displacement(Vec3::new(0.0, 3.0, -1.0), Quat::IDENTITY, 5.0, 1.0);
        assert!(displacement.y.abs() < 1e-6);
        assert!((displacement.length() - 5.0).abs() < 1e-4);
    }
}
