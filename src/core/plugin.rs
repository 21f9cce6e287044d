//! Core plugin that sets up game states, events, and game-flow systems.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, MainMenu, InGame, etc.)
/// - Global events (DamageEvent, DeathEvent, etc.)
/// - Pause handling and the pass-through state hops
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            .add_sub_state::<PlayState>()
            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<HitEvent>()
            .add_event::<DeathEvent>()
            .add_event::<EnemyAttackEvent>()
            .add_event::<LevelClearedEvent>()
            // Loading state - data loading runs at Startup, so the
            // first frame can hop straight to the menu
            .add_systems(OnEnter(GameState::Loading), transition_to_main_menu)
            // LevelTransition exists for exactly one frame: the old
            // level's OnExit teardown has already run, so re-entering
            // InGame builds the next level from scratch
            .add_systems(OnEnter(GameState::LevelTransition), begin_next_level)
            // Pause/unpause with Escape while in-game
            .add_systems(
                Update,
                handle_pause_input.run_if(in_state(GameState::InGame)),
            );
    }
}

/// Immediately transition from Loading to MainMenu.
fn transition_to_main_menu(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::MainMenu);
}

/// Re-enter gameplay after a one-frame gap between levels.
fn begin_next_level(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Handle Escape key to pause/unpause the game.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        match current_state.get() {
            PlayState::Running => next_state.set(PlayState::Paused),
            PlayState::Paused => next_state.set(PlayState::Running),
        }
    }
}
