#[cfg(feature = "serde")]
use gridpath_core::GridError;
use gridpath_core::{Bounds, Position};

use crate::error::PathError;

// ---------------------------------------------------------------------------
// PredecessorMap
// ---------------------------------------------------------------------------

/// For every cell, the cell it was first reached from during a search.
///
/// Cells never reached (and the search origin itself) hold `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PredecessorRepr"))]
pub struct PredecessorMap {
    bounds: Bounds,
    cells: Vec<Option<Position>>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PredecessorRepr {
    bounds: Bounds,
    cells: Vec<Option<Position>>,
}

#[cfg(feature = "serde")]
impl TryFrom<PredecessorRepr> for PredecessorMap {
    type Error = GridError;

    fn try_from(repr: PredecessorRepr) -> Result<Self, GridError> {
        if repr.cells.len() != repr.bounds.len() {
            return Err(GridError::size_mismatch(repr.bounds, repr.cells.len()));
        }
        Ok(Self {
            bounds: repr.bounds,
            cells: repr.cells,
        })
    }
}

impl PredecessorMap {
    /// Create a map with every entry unset.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![None; bounds.len()],
        }
    }

    /// The predecessor of `p`, or `None` if unset or out of bounds.
    #[inline]
    pub fn get(&self, p: Position) -> Option<Position> {
        self.bounds.index(p).and_then(|i| self.cells[i])
    }

    /// Record `from` as the predecessor of `p`. No-op if `p` is out of bounds.
    #[inline]
    pub fn set(&mut self, p: Position, from: Position) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = Some(from);
        }
    }

    /// Walk the chain back from `end` to `start` and return the positions
    /// from `start` to `end` inclusive.
    ///
    /// When `start == end` the result is `[start]` (a zero-move path). A
    /// missing link, an out-of-bounds position or a cycle yields
    /// [`PathError::InvalidState`].
    pub fn path(&self, start: Position, end: Position) -> Result<Vec<Position>, PathError> {
        if !self.bounds.contains(start) {
            return Err(PathError::OutOfBounds(start));
        }
        if !self.bounds.contains(end) {
            return Err(PathError::OutOfBounds(end));
        }

        let mut path = vec![end];
        let mut current = end;
        while current != start {
            // A chain longer than the cell count must contain a cycle.
            if path.len() > self.bounds.len() {
                return Err(PathError::invalid_state(start, end, current));
            }
            current = self
                .get(current)
                .ok_or(PathError::invalid_state(start, end, current))?;
            path.push(current);
        }
        path.reverse();
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// VisitedSet
// ---------------------------------------------------------------------------

/// The set of cells a search has enqueued.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "VisitedRepr"))]
pub struct VisitedSet {
    bounds: Bounds,
    cells: Vec<bool>,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    count: usize,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct VisitedRepr {
    bounds: Bounds,
    cells: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<VisitedRepr> for VisitedSet {
    type Error = GridError;

    fn try_from(repr: VisitedRepr) -> Result<Self, GridError> {
        if repr.cells.len() != repr.bounds.len() {
            return Err(GridError::size_mismatch(repr.bounds, repr.cells.len()));
        }
        let count = repr.cells.iter().filter(|&&v| v).count();
        Ok(Self {
            bounds: repr.bounds,
            cells: repr.cells,
            count,
        })
    }
}

impl VisitedSet {
    /// Create an empty set.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![false; bounds.len()],
            count: 0,
        }
    }

    /// Whether `p` has been visited. Out-of-bounds positions never are.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.index(p).is_some_and(|i| self.cells[i])
    }

    /// Mark `p` visited. Returns `true` if it was not visited before.
    pub fn insert(&mut self, p: Position) -> bool {
        let Some(i) = self.bounds.index(p) else {
            return false;
        };
        if self.cells[i] {
            return false;
        }
        self.cells[i] = true;
        self.count += 1;
        true
    }

    /// Number of visited cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no cell has been visited.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Visited positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.bounds
            .iter()
            .zip(self.cells.iter())
            .filter_map(|(p, &v)| v.then_some(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_by_default() {
        let m = PredecessorMap::new(Bounds::new(3, 3));
        for p in Bounds::new(3, 3) {
            assert_eq!(m.get(p), None);
        }
        assert_eq!(m.get(Position::new(-1, 0)), None);
    }

    #[test]
    fn path_follows_chain() {
        let mut m = PredecessorMap::new(Bounds::new(3, 3));
        let a = Position::new(0, 0);
        let b = Position::new(0, 1);
        let c = Position::new(1, 1);
        m.set(b, a);
        m.set(c, b);
        assert_eq!(m.path(a, c).unwrap(), vec![a, b, c]);
        assert_eq!(m.path(a, a).unwrap(), vec![a]);
    }

    #[test]
    fn broken_chain_is_invalid_state() {
        let mut m = PredecessorMap::new(Bounds::new(3, 3));
        m.set(Position::new(2, 2), Position::new(2, 1));
        let err = m.path(Position::new(0, 0), Position::new(2, 2)).unwrap_err();
        assert!(matches!(err, PathError::InvalidState { at, .. } if at == Position::new(2, 1)));
    }

    #[test]
    fn cycle_is_invalid_state() {
        let mut m = PredecessorMap::new(Bounds::new(2, 2));
        let a = Position::new(0, 1);
        let b = Position::new(1, 1);
        m.set(a, b);
        m.set(b, a);
        let err = m.path(Position::new(0, 0), b).unwrap_err();
        assert!(matches!(err, PathError::InvalidState { .. }));
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let m = PredecessorMap::new(Bounds::new(2, 2));
        let err = m.path(Position::new(0, 0), Position::new(5, 5)).unwrap_err();
        assert!(matches!(err, PathError::OutOfBounds(p) if p == Position::new(5, 5)));
    }

    #[test]
    fn visited_insert_and_count() {
        let mut v = VisitedSet::new(Bounds::new(2, 3));
        assert!(v.is_empty());
        assert!(v.insert(Position::new(1, 2)));
        assert!(!v.insert(Position::new(1, 2)));
        assert!(!v.insert(Position::new(2, 0)));
        assert!(v.insert(Position::new(0, 1)));
        assert_eq!(v.len(), 2);
        assert!(v.contains(Position::new(1, 2)));
        assert!(!v.contains(Position::new(0, 0)));
        let all: Vec<_> = v.iter().collect();
        assert_eq!(all, vec![Position::new(0, 1), Position::new(1, 2)]);
    }
}
