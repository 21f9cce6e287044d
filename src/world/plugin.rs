//! World plugin - level loading and the level lifecycle.

use bevy::prelude::*;

use crate::core::GameState;
use crate::encounter::Encounter;
use crate::player::{spawn_player, Player, PlayerConfig};

use super::builder::{build_level, LevelGeometry};
use super::data::{load_level_definitions, CurrentLevel, LevelRegistry};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_level_definitions)
            .add_systems(OnEnter(GameState::InGame), setup_level)
            .add_systems(OnExit(GameState::InGame), cleanup_level);
    }
}

/// Build the current level and spawn its population.
///
/// A missing definition aborts the load with no partial state applied
/// and falls back to the main menu.
pub fn setup_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    registry: Res<LevelRegistry>,
    current_level: Res<CurrentLevel>,
    config: Res<PlayerConfig>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(level) = registry.by_index(current_level.index) else {
        error!("Level {} not found in registry", current_level.number());
        next_state.set(GameState::MainMenu);
        return;
    };

    info!("Building level {}: {}", current_level.number(), level.name);

    commands.insert_resource(Encounter::for_level(level.enemy_spawns.len()));
    let player_pos = build_level(&mut commands, &mut meshes, &mut materials, level);
    spawn_player(&mut commands, &config, player_pos);
}

/// Clean up level entities when leaving the in-game state.
fn cleanup_level(
    mut commands: Commands,
    level_query: Query<Entity, With<LevelGeometry>>,
    player_query: Query<Entity, With<Player>>,
) {
    for entity in level_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for entity in player_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
