//! Per-tick orchestration: update order, level-clear, game over, victory.

use bevy::prelude::*;

use super::components::Encounter;
use crate::combat::Dead;
use crate::core::{DeathEvent, GameState, LevelClearedEvent};
use crate::enemies::Enemy;
use crate::player::Player;
use crate::world::{CurrentLevel, LevelRegistry};

/// Seconds between the last enemy dying and the next level loading,
/// so death animations can visually resolve.
pub const LEVEL_CLEAR_DELAY: f32 = 1.0;

/// Fixed simulation order within one tick.
///
/// The sets chain, so every tick runs player intent and shooting first,
/// then enemy AI, then damage resolution, then the cleanup pass that
/// reacts to deaths. The whole chain is gated on unpaused gameplay.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSet {
    Player,
    Enemies,
    Damage,
    Cleanup,
}

/// Count alive enemies and schedule the level-clear transition.
///
/// The transition is scheduled exactly once: only when the count reaches
/// zero, only if the level started with at least one enemy, and only if
/// no timer is already pending.
pub fn check_level_clear(
    alive_query: Query<(), (With<Enemy>, Without<Dead>)>,
    mut encounter: ResMut<Encounter>,
    current_level: Res<CurrentLevel>,
    mut cleared_events: EventWriter<LevelClearedEvent>,
) {
    let alive = alive_query.iter().count();
    encounter.alive_enemies = alive;

    if alive == 0 && encounter.initial_enemies > 0 && !encounter.clear_scheduled() {
        info!(
            "Level {} cleared, next level in {LEVEL_CLEAR_DELAY}s",
            current_level.number()
        );
        encounter.clear_timer = Some(Timer::from_seconds(LEVEL_CLEAR_DELAY, TimerMode::Once));
        cleared_events.send(LevelClearedEvent {
            level: current_level.index,
        });
    }
}

/// Tick the pending level-clear timer and advance when it fires.
///
/// Advancing hops through `LevelTransition` so the old level is torn
/// down before the next is built; clearing the last level goes to
/// victory instead. A player who died during the delay takes priority:
/// the game-over transition wins and no advance happens.
pub fn advance_level(
    time: Res<Time>,
    mut encounter: ResMut<Encounter>,
    living_player: Query<(), (With<Player>, Without<Dead>)>,
    registry: Res<LevelRegistry>,
    mut current_level: ResMut<CurrentLevel>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(timer) = encounter.clear_timer.as_mut() else {
        return;
    };

    if !timer.tick(time.delta()).finished() {
        return;
    }
    encounter.clear_timer = None;

    if living_player.is_empty() {
        return;
    }

    if current_level.index + 1 >= registry.len() {
        info!("Final level cleared, victory!");
        next_state.set(GameState::Victory);
    } else {
        current_level.index += 1;
        info!("Advancing to level {}", current_level.number());
        next_state.set(GameState::LevelTransition);
    }
}

/// React to the player's death with the game-over transition.
pub fn handle_player_death(
    mut death_events: EventReader<DeathEvent>,
    player_query: Query<(), With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in death_events.read() {
        if player_query.get(event.entity).is_ok() {
            info!("Player died, game over");
            next_state.set(GameState::GameOver);
        }
    }
}
