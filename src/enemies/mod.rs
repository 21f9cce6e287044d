//! Enemies module - enemy components, AI state machine, and feedback.

mod ai;
mod components;
mod flash;
mod plugin;

pub use ai::{ARRIVAL_THRESHOLD, CHASE_SPEED_FACTOR};
pub use components::*;
pub use plugin::EnemyPlugin;
