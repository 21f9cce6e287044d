//! Encounter bookkeeping for the currently loaded level.

use bevy::prelude::*;

/// Per-level encounter census, rebuilt by the level setup.
///
/// `clear_timer` doubles as the scheduled-once guard for the next-level
/// transition: it is only ever set when the alive count first reaches
/// zero, and it is dropped wholesale when the level is torn down.
#[derive(Resource, Default)]
pub struct Encounter {
    /// Enemies present when the level was built
    pub initial_enemies: usize,
    /// Enemies currently alive (updated every tick, read by the HUD)
    pub alive_enemies: usize,
    /// Pending next-level transition, if the level has been cleared
    pub clear_timer: Option<Timer>,
}

impl Encounter {
    /// Fresh census for a level that spawned `count` enemies.
    pub fn for_level(count: usize) -> Self {
        Self {
            initial_enemies: count,
            alive_enemies: count,
            clear_timer: None,
        }
    }

    pub fn clear_scheduled(&self) -> bool {
        self.clear_timer.is_some()
    }
}
