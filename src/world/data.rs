//! Level data structures and RON loading.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;

/// One cell of the geometry grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Floor,
    Wall,
}

impl TileKind {
    /// Whether this tile blocks movement.
    pub fn is_solid(&self) -> bool {
        matches!(self, TileKind::Wall)
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(TileKind::Floor),
            '#' => Some(TileKind::Wall),
            _ => None,
        }
    }
}

fn default_tile_size() -> f32 {
    4.0
}

fn default_wall_height() -> f32 {
    3.0
}

/// Raw level definition as read from RON.
///
/// `geometry` is a row-per-string char grid (`#` wall, `.` floor);
/// `enemies` is an optional grid of the same dimensions where `E`
/// marks an enemy spawn cell.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDefinitionRaw {
    pub name: String,
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    #[serde(default = "default_wall_height")]
    pub wall_height: f32,
    pub player_start: (i32, i32),
    pub geometry: Vec<String>,
    #[serde(default)]
    pub enemies: Vec<String>,
}

/// Validated level definition with resolved tiles and spawn cells.
#[derive(Debug, Clone)]
pub struct LevelDefinition {
    pub name: String,
    pub tile_size: f32,
    pub wall_height: f32,
    pub player_start: (i32, i32),
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Vec<TileKind>>,
    /// Grid cells holding one enemy each, in reading order.
    pub enemy_spawns: Vec<(i32, i32)>,
}

impl LevelDefinition {
    /// Create from a raw definition by validating both grids.
    pub fn from_raw(raw: LevelDefinitionRaw) -> Result<Self, DataLoadError> {
        let height = raw.geometry.len();
        let width = raw.geometry.first().map_or(0, |row| row.chars().count());
        if width == 0 || height == 0 {
            return Err(DataLoadError::EmptyGrid(raw.name));
        }

        let mut tiles = Vec::with_capacity(height);
        for (z, row) in raw.geometry.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(DataLoadError::RowLength {
                    row: z,
                    expected: width,
                    actual,
                });
            }
            let mut tile_row = Vec::with_capacity(width);
            for (x, c) in row.chars().enumerate() {
                let Some(kind) = TileKind::from_char(c) else {
                    return Err(DataLoadError::UnknownTile { tile: c, x, z });
                };
                tile_row.push(kind);
            }
            tiles.push(tile_row);
        }

        let mut enemy_spawns = Vec::new();
        if !raw.enemies.is_empty() {
            if raw.enemies.len() != height {
                return Err(DataLoadError::EnemyGridMismatch {
                    expected_width: width,
                    expected_height: height,
                    actual_width: width,
                    actual_height: raw.enemies.len(),
                });
            }
            for (z, row) in raw.enemies.iter().enumerate() {
                let actual = row.chars().count();
                if actual != width {
                    return Err(DataLoadError::EnemyGridMismatch {
                        expected_width: width,
                        expected_height: height,
                        actual_width: actual,
                        actual_height: raw.enemies.len(),
                    });
                }
                for (x, c) in row.chars().enumerate() {
                    match c {
                        'E' => enemy_spawns.push((x as i32, z as i32)),
                        '.' | ' ' => {}
                        other => {
                            return Err(DataLoadError::UnknownTile { tile: other, x, z });
                        }
                    }
                }
            }
        }

        let (px, pz) = raw.player_start;
        if px < 0 || pz < 0 || px as usize >= width || pz as usize >= height {
            return Err(DataLoadError::PlayerStartOutOfBounds { x: px, z: pz });
        }
        if tiles[pz as usize][px as usize].is_solid() {
            return Err(DataLoadError::PlayerStartBlocked { x: px, z: pz });
        }

        Ok(Self {
            name: raw.name,
            tile_size: raw.tile_size,
            wall_height: raw.wall_height,
            player_start: raw.player_start,
            width,
            height,
            tiles,
            enemy_spawns,
        })
    }

    /// Tile at a grid position. Everything outside the grid reads as wall.
    pub fn tile(&self, x: i32, z: i32) -> TileKind {
        if x < 0 || z < 0 {
            return TileKind::Wall;
        }
        let (ux, uz) = (x as usize, z as usize);
        if uz >= self.height || ux >= self.width {
            return TileKind::Wall;
        }
        self.tiles[uz][ux]
    }

    /// Convert grid coordinates to a world position at floor height.
    pub fn grid_to_world(&self, x: i32, z: i32) -> Vec3 {
        Vec3::new(x as f32 * self.tile_size, 0.0, z as f32 * self.tile_size)
    }
}

/// Resource storing all loaded levels in play order.
#[derive(Resource, Default)]
pub struct LevelRegistry {
    pub levels: Vec<LevelDefinition>,
}

impl LevelRegistry {
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get a level by registry index.
    pub fn by_index(&self, index: usize) -> Option<&LevelDefinition> {
        self.levels.get(index)
    }
}

/// Resource indicating which registry entry is being played.
#[derive(Resource, Default)]
pub struct CurrentLevel {
    pub index: usize,
}

impl CurrentLevel {
    /// One-based level number for display.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Numeric id from a level file name, used to order the registry
/// (`level2.ron` sorts as 2).
fn level_id(path: &Path) -> Option<u32> {
    let stem = path.file_stem()?.to_str()?;
    stem.trim_start_matches(|c: char| !c.is_ascii_digit())
        .parse()
        .ok()
}

fn load_level_file(path: &Path) -> Result<(u32, LevelDefinition), DataLoadError> {
    let id = level_id(path)
        .ok_or_else(|| DataLoadError::MissingId(path.display().to_string()))?;
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::Read {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    let raw: LevelDefinitionRaw =
        ron::from_str(&contents).map_err(|e| DataLoadError::Parse {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
    let level = LevelDefinition::from_raw(raw)?;
    Ok((id, level))
}

/// Load all level definitions from assets/data/levels/.
///
/// Files that fail to read, parse, or validate are logged and excluded
/// from the registry.
pub fn load_level_definitions(mut commands: Commands) {
    let mut loaded: Vec<(u32, LevelDefinition)> = Vec::new();
    let levels_path = Path::new("assets/data/levels");

    if levels_path.exists() {
        if let Ok(entries) = fs::read_dir(levels_path) {
            for entry in entries.flatten() {
                let path = entry.path();
                if !path.extension().is_some_and(|ext| ext == "ron") {
                    continue;
                }
                match load_level_file(&path) {
                    Ok((id, level)) => {
                        info!("Loaded level {}: {}", id, level.name);
                        loaded.push((id, level));
                    }
                    Err(e) => {
                        error!("Skipping level {:?}: {}", path, e);
                    }
                }
            }
        }
    } else {
        warn!("Levels directory not found: {:?}", levels_path);
    }

    loaded.sort_by_key(|(id, _)| *id);
    let registry = LevelRegistry {
        levels: loaded.into_iter().map(|(_, level)| level).collect(),
    };

    info!("Loaded {} level(s)", registry.len());
    commands.insert_resource(registry);
    commands.insert_resource(CurrentLevel::default());
}
