//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::flash;
use crate::encounter::TickSet;

/// Enemy plugin - AI state machine, death teardown, and flash feedback.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            // AI runs as one chain: cooldowns tick first, then the
            // per-tick state re-evaluation, then one behavior system
            // per state
            .add_systems(
                Update,
                (
                    ai::tick_attack_timers,
                    ai::ai_transition,
                    ai::ai_patrol,
                    ai::ai_chase,
                    ai::ai_attack,
                )
                    .chain()
                    .in_set(TickSet::Enemies),
            )
            // Death teardown and feedback react to this tick's damage
            .add_systems(
                Update,
                (
                    ai::handle_enemy_death,
                    ai::animate_death_fall,
                    ai::despawn_dead_enemies,
                    flash::flash_on_attack,
                    flash::flash_on_hurt,
                    flash::update_flashes,
                )
                    .chain()
                    .in_set(TickSet::Cleanup),
            );
    }
}
