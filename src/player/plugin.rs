//! Player plugin - movement, camera, and shooting systems.

use bevy::prelude::*;

use super::components::PlayerConfig;
use super::movement;
use super::shooting;
use crate::core::{GameState, PlayState};
use crate::encounter::TickSet;

/// Player plugin - input, first-person control, and shooting.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerConfig>()
            // Running covers both the first frame of a level and every
            // resume from pause, so the cursor is always re-grabbed
            .add_systems(OnEnter(PlayState::Running), movement::grab_cursor)
            .add_systems(OnEnter(PlayState::Paused), movement::release_cursor)
            .add_systems(OnExit(GameState::InGame), movement::release_cursor)
            .add_systems(
                Update,
                (
                    movement::gather_move_intent,
                    movement::mouse_look,
                    movement::player_movement,
                    shooting::tick_shoot_cooldown,
                    shooting::shoot,
                )
                    .chain()
                    .in_set(TickSet::Player),
            );
    }
}
