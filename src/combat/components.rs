//! Combat components shared by the player and enemies.

use bevy::prelude::*;

/// Component for entities that can take damage.
///
/// `current` stays in `[0, maximum]`. An entity is alive exactly while
/// `current > 0`; death is recorded separately with the [`Dead`] marker
/// so it can only happen once.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub maximum: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Reduce health, clamped at zero. Returns the amount actually lost.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    /// Restore health, clamped at `maximum`. Healing the dead is a
    /// no-op; revival only happens through a fresh spawn.
    pub fn heal(&mut self, amount: f32) -> f32 {
        if self.is_dead() {
            return 0.0;
        }
        let actual = amount.min(self.maximum - self.current);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percentage(&self) -> f32 {
        self.current / self.maximum
    }
}

/// Marker component for entities that have died (prevents multiple death events).
#[derive(Component)]
pub struct Dead;
