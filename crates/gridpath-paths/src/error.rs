//! Error types for path reconstruction, annotation and the solve pipeline.

use gridpath_core::{GridError, Position};
use thiserror::Error;

/// Errors raised when a predecessor chain cannot be followed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The chain from `end` back to `start` is broken at `at`, either because
    /// the search never reached `end` or because the maps do not belong
    /// together.
    #[error("no predecessor chain from {end} back to {start} (broken at {at})")]
    InvalidState {
        /// Search origin.
        start: Position,
        /// Search target.
        end: Position,
        /// Last position reached while walking back.
        at: Position,
    },

    /// An endpoint lies outside the grid.
    #[error("position {0} is outside the grid")]
    OutOfBounds(Position),
}

impl PathError {
    /// Creates an invalid state error.
    #[must_use]
    pub const fn invalid_state(start: Position, end: Position, at: Position) -> Self {
        Self::InvalidState { start, end, at }
    }
}

/// Errors raised by [`solve`](crate::solve).
#[derive(Debug, Error)]
pub enum SolveError {
    /// The grid is missing a marker.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Annotation failed.
    #[error(transparent)]
    Path(#[from] PathError),
}
