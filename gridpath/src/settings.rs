//! Run-time settings: grid size, placement constraints, file names and seed.
//!
//! Settings come from built-in defaults, optionally overridden by a JSON file,
//! then by command line flags.

use std::fs;
use std::path::{Path, PathBuf};

use gridpath_core::Bounds;
use gridpath_gen::GenConfig;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Generator parameters, including the grid size.
    #[serde(flatten)]
    pub generator: GenConfig,
    /// File written by "generate" and read by "solve".
    pub grid_file: PathBuf,
    /// File the annotated grid is written to.
    pub path_file: PathBuf,
    /// Fixed RNG seed; a fresh one is drawn when unset.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generator: GenConfig::default(),
            grid_file: PathBuf::from("grid.txt"),
            path_file: PathBuf::from("path.txt"),
            seed: None,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| CliError::settings(path, e))?;
        let settings = serde_json::from_str(&text).map_err(|e| CliError::settings(path, e))?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// The grid dimensions.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.generator.bounds()
    }

    /// Apply command line overrides for the grid size and endpoint separation.
    ///
    /// When the size changes but no separation is given, the separation is
    /// capped at half the corner-to-corner distance of the new grid so
    /// endpoints can still be placed on small grids.
    pub fn apply_overrides(
        &mut self,
        rows: Option<i32>,
        cols: Option<i32>,
        min_separation: Option<i32>,
    ) {
        let config = &mut self.generator;
        if let Some(rows) = rows {
            config.rows = rows;
        }
        if let Some(cols) = cols {
            config.cols = cols;
        }
        match min_separation {
            Some(sep) => config.min_separation = sep,
            None if rows.is_some() || cols.is_some() => {
                let reach = (config.rows - 1).max(0) + (config.cols - 1).max(0);
                if config.min_separation > reach / 2 {
                    log::info!(
                        "min separation lowered from {} to {} for a {} grid",
                        config.min_separation,
                        reach / 2,
                        config.bounds()
                    );
                    config.min_separation = reach / 2;
                }
            }
            None => {}
        }
    }

    /// A random number generator seeded from `seed`, or from a freshly drawn
    /// seed which is logged so the run can be reproduced.
    pub fn rng(&self) -> StdRng {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("rng seed {seed}");
        StdRng::seed_from_u64(seed)
    }
}
