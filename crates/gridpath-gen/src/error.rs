//! Error types for grid generation.

use thiserror::Error;

/// Errors raised while generating a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// Obstacle percentage above 100.
    #[error("invalid obstacle percentage {0} (expected 0-100)")]
    InvalidPercentage(u32),

    /// No endpoint pair satisfying the placement constraints was drawn.
    #[error("could not place endpoints {min_separation} apart after {attempts} attempts")]
    Unsatisfiable {
        /// Required Manhattan distance between the endpoints.
        min_separation: i32,
        /// Draws made before giving up.
        attempts: usize,
    },

    /// A fixed endpoint lies outside the grid or on top of the other one.
    #[error("invalid endpoint {0}")]
    InvalidEndpoint(gridpath_core::Position),
}
