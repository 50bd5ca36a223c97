//! Random obstacle grid generation.
//!
//! A generated grid holds one start marker and one end marker, placed at
//! least [`GenConfig::min_separation`] apart in Manhattan distance, and a
//! requested percentage of the remaining cells turned into obstacles.

use gridpath_core::{Bounds, COLS, Grid, Position, ROWS, Tile};
use gridpath_paths::manhattan;
use rand::seq::index;
use rand::{Rng, RngExt};

use crate::error::GenError;

/// Parameters for [`MapGen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenConfig {
    /// Number of grid rows.
    pub rows: i32,
    /// Number of grid columns.
    pub cols: i32,
    /// Minimum Manhattan distance between the two endpoints.
    pub min_separation: i32,
    /// How many endpoint pairs to draw before giving up.
    pub max_attempts: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            min_separation: 50,
            max_attempts: 10_000,
        }
    }
}

impl GenConfig {
    /// The grid dimensions.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.rows, self.cols)
    }
}

/// A generated grid together with what was placed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub grid: Grid,
    pub start: Position,
    pub end: Position,
    pub obstacles: usize,
}

/// Number of obstacles for `percent` percent of the non-endpoint cells,
/// rounded down.
pub fn obstacle_count(bounds: Bounds, percent: u32) -> usize {
    bounds.len().saturating_sub(2) * percent as usize / 100
}

fn check_percent(percent: u32) -> Result<(), GenError> {
    if percent > 100 {
        return Err(GenError::InvalidPercentage(percent));
    }
    Ok(())
}

/// Grid generator driven by a caller-supplied random number generator.
///
/// Seed the generator (e.g. `StdRng::seed_from_u64`) for reproducible grids.
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub config: GenConfig,
}

impl<R: Rng> MapGen<R> {
    /// Create a new generator.
    pub fn new(config: GenConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Generate a grid with randomly placed endpoints.
    ///
    /// 1. Fill the grid with free cells.
    /// 2. Draw endpoint pairs until one is at least `min_separation` apart.
    /// 3. Turn [`obstacle_count`] random free cells into obstacles.
    pub fn generate(&mut self, percent: u32) -> Result<Placement, GenError> {
        check_percent(percent)?;
        let (start, end) = self.place_endpoints()?;
        Ok(self.build(start, end, percent))
    }

    /// Generate a grid with the endpoints fixed at `start` and `end`.
    ///
    /// The separation constraint does not apply to fixed endpoints.
    pub fn generate_with_endpoints(
        &mut self,
        percent: u32,
        start: Position,
        end: Position,
    ) -> Result<Placement, GenError> {
        check_percent(percent)?;
        let bounds = self.config.bounds();
        if !bounds.contains(start) {
            return Err(GenError::InvalidEndpoint(start));
        }
        if !bounds.contains(end) || end == start {
            return Err(GenError::InvalidEndpoint(end));
        }
        Ok(self.build(start, end, percent))
    }

    /// Draw two distinct positions at least `min_separation` apart.
    ///
    /// Gives up with [`GenError::Unsatisfiable`] after `max_attempts` draws,
    /// or immediately when the grid is too small for the constraint.
    pub fn place_endpoints(&mut self) -> Result<(Position, Position), GenError> {
        let bounds = self.config.bounds();
        let min_separation = self.config.min_separation.max(1);
        let unsatisfiable = |attempts| GenError::Unsatisfiable {
            min_separation,
            attempts,
        };

        // Opposite corners are the farthest apart two cells can be.
        let Some(corner) = bounds.last() else {
            return Err(unsatisfiable(0));
        };
        if manhattan(Position::ZERO, corner) < min_separation {
            return Err(unsatisfiable(0));
        }

        for attempt in 1..=self.config.max_attempts {
            let a = self.random_position(bounds);
            let b = self.random_position(bounds);
            if manhattan(a, b) >= min_separation {
                log::debug!("endpoints {a} and {b} accepted after {attempt} draws");
                return Ok((a, b));
            }
        }

        log::warn!(
            "no endpoints {min_separation} apart after {} draws",
            self.config.max_attempts
        );
        Err(unsatisfiable(self.config.max_attempts))
    }

    /// Turn `count` uniformly chosen free cells of `grid` into obstacles.
    ///
    /// Returns the number placed, which is less than `count` only when the
    /// grid has fewer free cells.
    pub fn scatter_obstacles(&mut self, grid: &mut Grid, count: usize) -> usize {
        let free = grid.positions(Tile::Free);
        let count = count.min(free.len());
        for i in index::sample(&mut self.rng, free.len(), count) {
            grid.set(free[i], Tile::Obstacle);
        }
        count
    }

    fn build(&mut self, start: Position, end: Position, percent: u32) -> Placement {
        let bounds = self.config.bounds();
        let mut grid = Grid::new(bounds);
        grid.set(start, Tile::Start);
        grid.set(end, Tile::End);

        let obstacles = self.scatter_obstacles(&mut grid, obstacle_count(bounds, percent));
        log::info!(
            "generated {bounds} grid: start {start}, end {end}, {obstacles} obstacles ({percent}%)"
        );
        Placement {
            grid,
            start,
            end,
            obstacles,
        }
    }

    fn random_position(&mut self, bounds: Bounds) -> Position {
        Position::new(
            self.rng.random_range(0..bounds.rows),
            self.rng.random_range(0..bounds.cols),
        )
    }
}
