//! UI module - HUD and menu screens.

mod hud;
mod plugin;

pub use hud::{EnemyCountText, HealthBar, HealthText, HudRoot};
pub use plugin::UiPlugin;
