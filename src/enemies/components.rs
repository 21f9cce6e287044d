//! Enemy-related components.

use bevy::prelude::*;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// AI state machine for enemy behavior.
///
/// There is no dead state: death inserts [`crate::combat::Dead`] and
/// every AI system filters dead enemies out.
#[derive(Component, Default, PartialEq, Eq, Clone, Copy, Debug)]
pub enum AiState {
    /// Walking the patrol circuit, no target in range.
    #[default]
    Patrol,
    /// Running toward the player.
    Chase,
    /// In melee range, swinging on cooldown.
    Attack,
}

/// Fixed per-enemy tuning.
#[derive(Component, Clone)]
pub struct EnemyStats {
    pub max_health: f32,
    pub damage: f32,
    pub move_speed: f32,
    pub detection_range: f32,
    pub attack_range: f32,
    pub attack_cooldown: f32,
    pub patrol_radius: f32,
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            max_health: 50.0,
            damage: 10.0,
            move_speed: 2.0,
            detection_range: 15.0,
            attack_range: 3.0,
            attack_cooldown: 2.0,
            patrol_radius: 5.0,
        }
    }
}

impl EnemyStats {
    /// The state the distance bands select for a live target at
    /// horizontal distance `d`.
    pub fn state_for_distance(&self, d: f32) -> AiState {
        if d <= self.attack_range {
            AiState::Attack
        } else if d <= self.detection_range {
            AiState::Chase
        } else {
            AiState::Patrol
        }
    }
}

/// Countdown until the next melee swing, in seconds.
///
/// Ticks down every simulation tick no matter which state the enemy is
/// in. Starts at zero, so a fresh enemy can attack immediately.
#[derive(Component, Default)]
pub struct AttackTimer {
    pub remaining: f32,
}

impl AttackTimer {
    pub fn ready(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn reset(&mut self, cooldown: f32) {
        self.remaining = cooldown;
    }
}

/// The fixed waypoint circuit an enemy walks when no target is in range.
#[derive(Component, Clone, Debug)]
pub struct PatrolRoute {
    pub points: Vec<Vec3>,
    pub cursor: usize,
}

impl PatrolRoute {
    /// Six-point circuit around `origin`: the spawn itself plus five
    /// corners offset by `radius`. Never empty.
    pub fn hexagon(origin: Vec3, radius: f32) -> Self {
        let points = vec![
            origin,
            origin + Vec3::new(radius, 0.0, 0.0),
            origin + Vec3::new(radius, 0.0, radius),
            origin + Vec3::new(0.0, 0.0, radius),
            origin + Vec3::new(-radius, 0.0, radius),
            origin + Vec3::new(-radius, 0.0, 0.0),
        ];
        Self { points, cursor: 0 }
    }

    pub fn waypoint(&self) -> Vec3 {
        self.points[self.cursor]
    }

    /// Move the cursor to the next waypoint, wrapping at the end.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.points.len();
    }
}

/// Timer for the death animation before despawn.
#[derive(Component)]
pub struct DeathTimer(pub Timer);

impl Default for DeathTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(2.0, TimerMode::Once))
    }
}

/// Tip-over animation for a dying enemy; the body slerps toward the
/// fallen pose until the death timer despawns it.
#[derive(Component)]
pub struct DeathFall {
    pub target_rotation: Quat,
    pub speed: f32,
}

impl DeathFall {
    /// Fall 90° forward from wherever the body was facing.
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            target_rotation: rotation * Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
            speed: 4.0,
        }
    }
}
