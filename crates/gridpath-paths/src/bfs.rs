use std::collections::VecDeque;

use gridpath_core::{Bounds, Position};

use crate::maps::{PredecessorMap, VisitedSet};
use crate::traits::Pather;

/// Result of a single [`Bfs::find_path`] call.
#[derive(Debug, Clone)]
pub struct Search {
    /// Whether `end` was reached.
    pub found: bool,
    /// Discoverer of every reached cell.
    pub predecessors: PredecessorMap,
    /// Every cell enqueued before the search stopped.
    pub visited: VisitedSet,
}

impl Search {
    /// Number of moves on the shortest path, if one was found.
    pub fn path_len(&self, start: Position, end: Position) -> Option<usize> {
        if !self.found {
            return None;
        }
        self.predecessors
            .path(start, end)
            .ok()
            .map(|p| p.len() - 1)
    }
}

/// Breadth-first search over a 4-connected grid.
///
/// `Bfs` keeps its frontier and neighbor scratch buffers between calls;
/// predecessor and visited maps are created fresh for every search and handed
/// to the caller.
pub struct Bfs {
    bounds: Bounds,
    queue: VecDeque<Position>,
    nbuf: Vec<Position>,
}

impl Bfs {
    /// Create a search engine for grids of the given dimensions.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            queue: VecDeque::with_capacity(bounds.len()),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Shortest path search from `start` to `end`.
    ///
    /// `start` seeds the search unconditionally, whatever its tile; every
    /// other cell must be accepted by `pather`. The search stops as soon as
    /// `end` is dequeued. Each cell is enqueued at most once.
    pub fn find_path<P: Pather>(&mut self, pather: &P, start: Position, end: Position) -> Search {
        let mut predecessors = PredecessorMap::new(self.bounds);
        let mut visited = VisitedSet::new(self.bounds);
        let found = self.run(pather, start, Some(end), &mut predecessors, &mut visited);

        log::debug!(
            "bfs {start} -> {end}: found={found}, visited {} cells",
            visited.len()
        );
        Search {
            found,
            predecessors,
            visited,
        }
    }

    /// Every cell reachable from `start`, without early exit.
    pub fn reachable<P: Pather>(&mut self, pather: &P, start: Position) -> VisitedSet {
        let mut predecessors = PredecessorMap::new(self.bounds);
        let mut visited = VisitedSet::new(self.bounds);
        self.run(pather, start, None, &mut predecessors, &mut visited);
        log::debug!("flood from {start}: {} cells reachable", visited.len());
        visited
    }

    fn run<P: Pather>(
        &mut self,
        pather: &P,
        start: Position,
        end: Option<Position>,
        predecessors: &mut PredecessorMap,
        visited: &mut VisitedSet,
    ) -> bool {
        self.queue.clear();
        if !visited.insert(start) {
            // Out of bounds.
            return false;
        }
        self.queue.push_back(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(current) = self.queue.pop_front() {
            if Some(current) == end {
                found = true;
                break;
            }

            nbuf.clear();
            pather.neighbors(current, &mut nbuf);

            for &next in nbuf.iter() {
                if !visited.insert(next) {
                    continue;
                }
                predecessors.set(next, current);
                self.queue.push_back(next);
            }
        }

        self.queue.clear();
        self.nbuf = nbuf;
        found
    }
}
