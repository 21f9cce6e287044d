//! Combat plugin - damage resolution for every combatant.

use bevy::prelude::*;

use super::systems::apply_damage;
use crate::encounter::TickSet;

/// Combat plugin - turns [`crate::core::DamageEvent`]s into health
/// changes, hits, and deaths.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_damage.in_set(TickSet::Damage));
    }
}
