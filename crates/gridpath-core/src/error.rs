//! Error types for grid loading and marker lookup.

use std::io;

use thiserror::Error;

use crate::geom::Bounds;
use crate::tile::Tile;

/// Errors raised while reading, writing or inspecting a grid.
#[derive(Debug, Error)]
pub enum GridError {
    /// The underlying file or stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// A character outside the tile alphabet was found in the text format.
    #[error("invalid tile {ch:?} at row {row}, column {col}")]
    InvalidTile {
        /// Zero-based line number.
        row: i32,
        /// Zero-based character offset within the line.
        col: i32,
        /// The offending character.
        ch: char,
    },

    /// A required endpoint marker is absent from the grid.
    #[error("marker '{}' not found in grid", .0.to_char())]
    MissingMarker(Tile),

    /// Stored cells do not fill the declared dimensions.
    #[error("{cells} cells stored for bounds {bounds}")]
    SizeMismatch {
        /// Declared dimensions.
        bounds: Bounds,
        /// Number of cells actually stored.
        cells: usize,
    },
}

impl GridError {
    /// Creates an invalid tile error.
    #[must_use]
    pub const fn invalid_tile(row: i32, col: i32, ch: char) -> Self {
        Self::InvalidTile { row, col, ch }
    }

    /// Creates a size mismatch error.
    #[must_use]
    pub const fn size_mismatch(bounds: Bounds, cells: usize) -> Self {
        Self::SizeMismatch { bounds, cells }
    }
}
