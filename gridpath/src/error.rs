//! Errors surfaced to the user by the command line front-end.

use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use gridpath_core::GridError;
use gridpath_gen::GenError;
use gridpath_paths::SolveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// The settings file could not be read or parsed.
    #[error("settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Obstacle percentage input was not a number in 0-100.
    #[error("invalid percentage {0:?} (expected 0-100)")]
    InvalidPercentage(String),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Gen(#[from] GenError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

impl CliError {
    /// Creates a settings error.
    #[must_use]
    pub fn settings(path: &Path, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::Settings {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}
