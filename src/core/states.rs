//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. For example,
//! player movement only runs while in-game and unpaused, while menu
//! systems only run in their matching menu state.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The game transitions between these states based on player actions:
/// - Start in `Loading` to read level data
/// - Move to `MainMenu` when loading completes
/// - Enter `InGame` when the player starts a run
/// - `LevelTransition` is a one-frame hop between levels so the old
///   level is fully torn down before the next one is built
/// - `GameOver` when the player dies, `Victory` after the last level
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading level data files
    #[default]
    Loading,
    /// Main menu / title screen
    MainMenu,
    /// Active gameplay
    InGame,
    /// Between levels: previous level torn down, next not yet built
    LevelTransition,
    /// Player has died
    GameOver,
    /// Player has cleared the final level
    Victory,
}

/// Sub-state for gameplay - only exists while `GameState::InGame`.
///
/// Pausing lives here rather than in `GameState` so that entering the
/// pause menu never runs the in-game teardown: the level, player, and
/// enemies all survive a pause.
#[derive(SubStates, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum PlayState {
    /// Normal gameplay - movement, combat
    #[default]
    Running,
    /// Pause overlay is open, simulation frozen
    Paused,
}
