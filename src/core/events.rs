//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. The player's shot and
//! the enemy's melee both send `DamageEvent`s; one resolution system in
//! the combat module applies them and emits the follow-up events that
//! the HUD and feedback systems consume.

use bevy::prelude::*;

/// Sent when an entity should take damage.
///
/// The damage system listens for these events and applies the actual
/// health reduction, enforcing the no-damage-after-death rule.
#[derive(Event)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    /// Damage amount, non-negative
    pub amount: f32,
}

/// Sent for every hit that was actually applied, whether or not it
/// killed the target. Carries the health remaining after the hit so
/// observers can reflect damage without re-querying.
#[derive(Event)]
pub struct HitEvent {
    /// Entity that was hit
    pub entity: Entity,
    /// Damage that was applied
    pub amount: f32,
    /// Health remaining after the hit
    pub remaining: f32,
}

/// Sent when an entity dies (health reaches 0).
///
/// Fires exactly once per entity; later damage against the same entity
/// is dropped by the damage system.
#[derive(Event)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that killed them (if any)
    pub killed_by: Option<Entity>,
}

/// Sent when an enemy lands a melee attack. Drives the attack flash.
#[derive(Event)]
pub struct EnemyAttackEvent {
    /// The attacking enemy
    pub enemy: Entity,
}

/// Sent once when the last enemy of a level dies and the next-level
/// transition has been scheduled.
#[derive(Event)]
pub struct LevelClearedEvent {
    /// Index of the cleared level (zero-based)
    pub level: usize,
}
