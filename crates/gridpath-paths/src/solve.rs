use gridpath_core::{Grid, GridError, Position, Tile};

use crate::annotate::{Annotation, annotate};
use crate::bfs::Bfs;
use crate::error::{PathError, SolveError};
use crate::neighbors::GridPather;

/// What happened when solving a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A path was found and the grid annotated.
    Found(Annotation),
    /// `end` cannot be reached from `start`; the grid is unchanged.
    NoPath,
}

impl Outcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

/// Locate the start and end markers of `grid`.
///
/// The first marker in row-major order wins when several are present.
pub fn find_markers(grid: &Grid) -> Result<(Position, Position), GridError> {
    let start = grid
        .find(Tile::Start)
        .ok_or(GridError::MissingMarker(Tile::Start))?;
    let end = grid
        .find(Tile::End)
        .ok_or(GridError::MissingMarker(Tile::End))?;
    Ok((start, end))
}

/// Find the `'A'` and `'B'` markers, search for a shortest path between them
/// and annotate `grid` in place when one exists.
pub fn solve(grid: &mut Grid) -> Result<Outcome, SolveError> {
    let (start, end) = find_markers(grid)?;
    solve_between(grid, start, end)
}

/// Search from `start` to `end` and annotate `grid` in place when a path
/// exists.
///
/// The explored markers cover every cell reachable from `start`, not only
/// those dequeued before the search stopped. An endpoint outside the grid is
/// reported as [`PathError::OutOfBounds`].
pub fn solve_between(
    grid: &mut Grid,
    start: Position,
    end: Position,
) -> Result<Outcome, SolveError> {
    if let Some(p) = [start, end].into_iter().find(|&p| !grid.contains(p)) {
        return Err(PathError::OutOfBounds(p).into());
    }
    let mut bfs = Bfs::new(grid.bounds());
    let pather = GridPather::new(grid);
    let search = bfs.find_path(&pather, start, end);
    if !search.found {
        log::info!("no path from {start} to {end}");
        return Ok(Outcome::NoPath);
    }
    let visited = bfs.reachable(&pather, start);

    let annotation = annotate(grid, start, end, &search.predecessors, &visited)?;
    log::info!(
        "path from {start} to {end}: {} moves, {} cells explored",
        annotation.path_len,
        visited.len()
    );
    Ok(Outcome::Found(annotation))
}
