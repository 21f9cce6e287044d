//! Encounter module - per-tick orchestration and run flow.
//!
//! Owns the fixed update order (player, enemies, damage, cleanup) and
//! the transitions between levels, game over, and victory.

mod components;
mod plugin;
mod systems;

pub use components::Encounter;
pub use plugin::EncounterPlugin;
pub use systems::{TickSet, LEVEL_CLEAR_DELAY};
