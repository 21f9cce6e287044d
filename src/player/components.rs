//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Movement intent for the current tick in the player's local space
/// (+x strafes right, -z walks forward). Y stays zero. Gathered from
/// the keyboard each tick and consumed by the movement system.
#[derive(Component, Default)]
pub struct MoveIntent(pub Vec3);

/// Shooting gate: one shot, then the cooldown re-enables it.
#[derive(Component)]
pub struct ShootState {
    pub can_shoot: bool,
    pub cooldown_remaining: f32,
}

impl Default for ShootState {
    fn default() -> Self {
        Self {
            can_shoot: true,
            cooldown_remaining: 0.0,
        }
    }
}

/// Tuning for the first-person controller.
#[derive(Resource)]
pub struct PlayerConfig {
    pub max_health: f32,
    /// Radians of look per pixel of mouse travel, before `rotation_speed`
    pub mouse_sensitivity: f32,
    /// Look speed multiplier applied on top of sensitivity
    pub rotation_speed: f32,
    /// Base movement speed in units per second
    pub move_speed: f32,
    /// Seconds between shots
    pub shoot_cooldown: f32,
    /// Maximum shot distance in units
    pub shoot_range: f32,
    pub shoot_damage: f32,
    /// Camera height above the feet
    pub eye_height: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            mouse_sensitivity: 0.002,
            rotation_speed: 2.0,
            move_speed: 5.0,
            shoot_cooldown: 0.3,
            shoot_range: 50.0,
            shoot_damage: 25.0,
            eye_height: 1.6,
        }
    }
}
