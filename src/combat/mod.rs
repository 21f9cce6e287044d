//! Combat module - the shared health and damage contract.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
