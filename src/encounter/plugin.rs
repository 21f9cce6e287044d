//! Encounter plugin - owns the tick order and the level/run flow.

use bevy::prelude::*;

use super::components::Encounter;
use super::systems::*;
use crate::core::{GameState, PlayState};

/// Encounter plugin - chains the per-tick sets and watches for
/// level-clear, player death, and victory.
pub struct EncounterPlugin;

impl Plugin for EncounterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Encounter>()
            .configure_sets(
                Update,
                (
                    TickSet::Player,
                    TickSet::Enemies,
                    TickSet::Damage,
                    TickSet::Cleanup,
                )
                    .chain()
                    .run_if(in_state(GameState::InGame))
                    .run_if(in_state(PlayState::Running)),
            )
            .add_systems(
                Update,
                (
                    (check_level_clear, advance_level).chain(),
                    handle_player_death,
                )
                    .in_set(TickSet::Cleanup),
            );
    }
}
