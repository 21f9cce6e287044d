//! World module - level data, geometry construction, and population.

mod builder;
mod data;
mod error;
mod geometry;
mod materials;
mod plugin;
mod spawning;

pub use builder::{build_level, LevelGeometry};
pub use data::{
    CurrentLevel, LevelDefinition, LevelDefinitionRaw, LevelRegistry, TileKind,
};
pub use error::DataLoadError;
pub use materials::ENEMY_EMISSIVE;
pub use plugin::{setup_level, WorldPlugin};
pub use spawning::{spawn_enemy, ENEMY_HALF_HEIGHT};
