//! Player module - player entity, movement, camera, and shooting.

mod components;
mod movement;
mod plugin;
mod shooting;

pub use components::*;
pub use movement::{intent_displacement, spawn_player, PlayerCamera, PLAYER_HALF_HEIGHT};
pub use plugin::PlayerPlugin;
