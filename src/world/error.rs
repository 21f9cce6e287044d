//! Error types for level data loading.

use thiserror::Error;

/// Errors that can occur when loading and validating level data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    /// Level file name carries no numeric id to order the registry by.
    #[error("No numeric id in level file name '{0}'")]
    MissingId(String),

    /// Level has no geometry rows at all.
    #[error("Level '{0}' has an empty geometry grid")]
    EmptyGrid(String),

    /// A geometry row is a different width than the first row.
    #[error("Geometry row {row} is {actual} tiles wide, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Enemy grid dimensions don't match the geometry grid.
    #[error("Enemy grid is {actual_width}x{actual_height}, geometry is {expected_width}x{expected_height}")]
    EnemyGridMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    /// Unrecognized character in a grid.
    #[error("Unknown tile '{tile}' at position ({x}, {z})")]
    UnknownTile { tile: char, x: usize, z: usize },

    /// Player start cell lies outside the grid.
    #[error("Player start ({x}, {z}) is outside the grid")]
    PlayerStartOutOfBounds { x: i32, z: i32 },

    /// Player start cell is a wall.
    #[error("Player start ({x}, {z}) is inside a wall")]
    PlayerStartBlocked { x: i32, z: i32 },
}
