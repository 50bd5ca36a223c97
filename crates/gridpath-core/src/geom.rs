//! Geometry primitives: [`Position`] and [`Bounds`].
//!
//! Positions are `(row, col)` pairs; rows grow downward, columns grow to the
//! right, matching the line-oriented text format.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A cell coordinate on the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours, in the order up, down, left, right.
    ///
    /// Some of them may lie outside any given [`Bounds`].
    #[inline]
    pub const fn neighbors_4(self) -> [Position; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Fixed grid dimensions. Valid positions are `[0, rows) x [0, cols)`.
///
/// Negative dimensions are clamped to zero on construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawBounds"))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBounds {
    rows: i32,
    cols: i32,
}

#[cfg(feature = "serde")]
impl From<RawBounds> for Bounds {
    fn from(raw: RawBounds) -> Self {
        Bounds::new(raw.rows, raw.cols)
    }
}

impl Bounds {
    /// Create new bounds.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: if rows < 0 { 0 } else { rows },
            cols: if cols < 0 { 0 } else { cols },
        }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether there are no cells at all.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `p` lies inside the bounds.
    #[inline]
    pub const fn contains(self, p: Position) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Bottom-right cell, or `None` for empty bounds.
    #[inline]
    pub const fn last(self) -> Option<Position> {
        if self.is_empty() {
            return None;
        }
        Some(Position::new(self.rows - 1, self.cols - 1))
    }

    /// Row-major flat index of `p`. Returns `None` if out of bounds.
    #[inline]
    pub const fn index(self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row as usize) * (self.cols as usize) + (p.col as usize))
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub const fn position(self, idx: usize) -> Position {
        let cols = self.cols as usize;
        Position::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Position;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.position(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_arithmetic() {
        let a = Position::new(1, 2);
        let b = Position::new(3, 4);
        assert_eq!(a + b, Position::new(4, 6));
        assert_eq!(b - a, Position::new(2, 2));
        assert_eq!(a.shift(-1, 1), Position::new(0, 3));
    }

    #[test]
    fn position_order_is_row_major() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
    }

    #[test]
    fn neighbors_order() {
        let n = Position::new(5, 5).neighbors_4();
        assert_eq!(
            n,
            [
                Position::new(4, 5),
                Position::new(6, 5),
                Position::new(5, 4),
                Position::new(5, 6),
            ]
        );
    }

    #[test]
    fn bounds_contains() {
        let b = Bounds::new(3, 4);
        assert!(b.contains(Position::new(0, 0)));
        assert!(b.contains(Position::new(2, 3)));
        assert!(!b.contains(Position::new(3, 0)));
        assert!(!b.contains(Position::new(0, 4)));
        assert!(!b.contains(Position::new(-1, 0)));
        assert_eq!(b.len(), 12);
        assert_eq!(b.last(), Some(Position::new(2, 3)));
    }

    #[test]
    fn bounds_negative_clamped() {
        let b = Bounds::new(-3, 4);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
        assert_eq!(b.last(), None);
    }

    #[test]
    fn index_round_trip() {
        let b = Bounds::new(4, 7);
        for (i, p) in b.iter().enumerate() {
            assert_eq!(b.index(p), Some(i));
            assert_eq!(b.position(i), p);
        }
        assert_eq!(b.index(Position::new(4, 0)), None);
    }

    #[test]
    fn iter_size_hint() {
        let b = Bounds::new(2, 3);
        let mut it = b.iter();
        assert_eq!(it.len(), 6);
        it.next();
        it.next();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(Position::new(0, 2)));
        assert_eq!(it.next(), Some(Position::new(1, 0)));
    }
}
