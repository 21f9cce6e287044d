//! Gridfire - a small grid-based first-person shooter in Bevy.
//!
//! Levels are char grids loaded from RON; the player clears each one by
//! shooting every enemy, then advances until the registry runs out.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, pause sub-state, cross-module events
//! - **Combat**: Shared health/damage resolution for player and enemies
//! - **Enemies**: Patrol/chase/attack AI, death fall, flash feedback
//! - **Player**: First-person movement, mouse look, ray-cast shooting
//! - **Encounter**: Tick ordering, level-clear, game over, victory
//! - **World**: Level data, geometry construction, spawning
//! - **UI**: HUD and menu screens

pub mod combat;
pub mod core;
pub mod encounter;
pub mod enemies;
pub mod player;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct GridfirePlugin;

impl Plugin for GridfirePlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            // Tick ordering and run conditions
            .add_plugins(encounter::EncounterPlugin)
            // Player systems
            .add_plugins(player::PlayerPlugin)
            // Combat systems
            .add_plugins(combat::CombatPlugin)
            // Enemy systems
            .add_plugins(enemies::EnemyPlugin)
            // World systems
            .add_plugins(world::WorldPlugin)
            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
