use gridpath_core::{Grid, Position, Tile};

use crate::error::PathError;
use crate::maps::{PredecessorMap, VisitedSet};

/// Summary of the cells recolored by [`annotate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    /// Moves on the path from start to end.
    pub path_len: usize,
    /// Free cells recolored as [`Tile::Path`].
    pub path_cells: usize,
    /// Free cells recolored as [`Tile::Explored`].
    pub explored_cells: usize,
}

/// Mark the explored area and the shortest path on `grid`.
///
/// Every free cell on the chain from `end` back to `start` becomes
/// [`Tile::Path`], and every other visited cell still holding [`Tile::Free`]
/// becomes [`Tile::Explored`]. Only free cells are ever recolored, so markers
/// and obstacles survive and running this twice with the same inputs changes
/// nothing the second time.
///
/// The chain is validated before the grid is touched: if `predecessors` does
/// not lead from `end` back to `start` the grid is left unchanged and
/// [`PathError::InvalidState`] is returned.
pub fn annotate(
    grid: &mut Grid,
    start: Position,
    end: Position,
    predecessors: &PredecessorMap,
    visited: &VisitedSet,
) -> Result<Annotation, PathError> {
    let path = predecessors.path(start, end)?;
    if let Some(&p) = path.iter().find(|&&p| !grid.contains(p)) {
        return Err(PathError::OutOfBounds(p));
    }

    // Path first, so the explored pass cannot shadow path cells.
    let mut path_cells = 0;
    for &p in path.iter().rev().take_while(|&&p| p != start) {
        if grid[p] == Tile::Free {
            grid.set(p, Tile::Path);
            path_cells += 1;
        }
    }

    let mut explored_cells = 0;
    for p in visited.iter() {
        if grid.at(p) == Some(Tile::Free) {
            grid.set(p, Tile::Explored);
            explored_cells += 1;
        }
    }

    log::debug!(
        "annotated {path_cells} path cells and {explored_cells} explored cells"
    );
    Ok(Annotation {
        path_len: path.len() - 1,
        path_cells,
        explored_cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::Bfs;
    use crate::neighbors::GridPather;
    use gridpath_core::Bounds;

    fn solve_on(g: &mut Grid, start: Position, end: Position) -> Annotation {
        let mut bfs = Bfs::new(g.bounds());
        let search = bfs.find_path(&GridPather::new(g), start, end);
        assert!(search.found);
        let visited = bfs.reachable(&GridPather::new(g), start);
        annotate(g, start, end, &search.predecessors, &visited).unwrap()
    }

    #[test]
    fn open_grid_staircase() {
        let mut g = Grid::default();
        let start = Position::new(0, 0);
        let end = Position::new(99, 99);
        g.set(start, Tile::Start);
        g.set(end, Tile::End);

        let a = solve_on(&mut g, start, end);
        assert_eq!(a.path_len, 198);
        assert_eq!(a.path_cells, 197);
        assert_eq!(g.count(Tile::Path), 197);
        assert_eq!(g.count(Tile::Explored), 100 * 100 - 2 - 197);
        assert_eq!(g.count(Tile::Free), 0);
        assert_eq!(a.explored_cells, g.count(Tile::Explored));
        assert_eq!(g[start], Tile::Start);
        assert_eq!(g[end], Tile::End);

        // Every path cell moves monotonically toward the end.
        let mut cur = start;
        let mut steps = 0;
        while cur != end {
            let next = [cur.shift(1, 0), cur.shift(0, 1)]
                .into_iter()
                .find(|&n| matches!(g.at(n), Some(Tile::Path | Tile::End)))
                .expect("staircase step");
            cur = next;
            steps += 1;
        }
        assert_eq!(steps, 198);
    }

    #[test]
    fn second_run_changes_nothing() {
        let mut g = Grid::with_size(5, 5);
        let start = Position::new(0, 0);
        let end = Position::new(4, 4);
        g.set(start, Tile::Start);
        g.set(end, Tile::End);
        g.set(Position::new(2, 2), Tile::Obstacle);

        let mut bfs = Bfs::new(g.bounds());
        let search = bfs.find_path(&GridPather::new(&g), start, end);
        let visited = bfs.reachable(&GridPather::new(&g), start);
        annotate(&mut g, start, end, &search.predecessors, &visited).unwrap();
        let once = g.clone();

        let again = annotate(&mut g, start, end, &search.predecessors, &visited).unwrap();
        assert_eq!(g, once);
        assert_eq!(again.path_cells, 0);
        assert_eq!(again.explored_cells, 0);
        assert_eq!(again.path_len, 8);
    }

    #[test]
    fn start_equals_end_recolors_nothing() {
        let mut g = Grid::with_size(3, 3);
        let p = Position::new(1, 1);
        g.set(p, Tile::Start);
        let preds = PredecessorMap::new(g.bounds());
        let visited = VisitedSet::new(g.bounds());
        let a = annotate(&mut g, p, p, &preds, &visited).unwrap();
        assert_eq!(a, Annotation::default());
        assert_eq!(g.count(Tile::Path), 0);
        assert_eq!(g.count(Tile::Free), 8);
    }

    #[test]
    fn missing_chain_fails_without_mutation() {
        let mut g = Grid::with_size(3, 3);
        let start = Position::new(0, 0);
        let end = Position::new(2, 2);
        g.set(start, Tile::Start);
        g.set(end, Tile::End);
        let before = g.clone();

        let preds = PredecessorMap::new(g.bounds());
        let mut visited = VisitedSet::new(g.bounds());
        visited.insert(Position::new(0, 1));

        let err = annotate(&mut g, start, end, &preds, &visited).unwrap_err();
        assert!(matches!(err, PathError::InvalidState { .. }));
        assert_eq!(g, before);
    }

    #[test]
    fn mismatched_bounds_are_rejected() {
        let mut g = Grid::with_size(2, 2);
        let mut preds = PredecessorMap::new(Bounds::new(3, 3));
        preds.set(Position::new(2, 1), Position::new(2, 0));
        preds.set(Position::new(1, 1), Position::new(2, 1));
        let visited = VisitedSet::new(g.bounds());
        let err = annotate(
            &mut g,
            Position::new(2, 0),
            Position::new(1, 1),
            &preds,
            &visited,
        )
        .unwrap_err();
        assert!(matches!(err, PathError::OutOfBounds(_)));
    }

    #[test]
    fn path_skips_obstacles_and_markers() {
        let mut g = Grid::with_size(1, 5);
        let start = Position::new(0, 0);
        let end = Position::new(0, 4);
        g.set(start, Tile::Start);
        g.set(end, Tile::End);
        let a = solve_on(&mut g, start, end);
        assert_eq!(a.path_len, 4);
        assert_eq!(g.to_string(), "A...B\n");
        assert_eq!(a.explored_cells, 0);
    }
}
