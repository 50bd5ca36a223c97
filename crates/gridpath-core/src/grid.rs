//! The [`Grid`] type, a fixed-size 2D buffer of [`Tile`]s.
//!
//! A grid is owned by one phase of the pipeline at a time (generator, codec,
//! search, annotation) and handed over by value or `&mut`. Its dimensions are
//! fixed at construction.

use std::fmt;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use crate::error::GridError;
use crate::geom::{Bounds, Position};
use crate::tile::Tile;

/// Default number of rows.
pub const ROWS: i32 = 100;
/// Default number of columns.
pub const COLS: i32 = 100;

/// A 2D grid of [`Tile`] values stored row-major.
///
/// [`at`](Grid::at) is the checked accessor. Indexing and [`set`](Grid::set)
/// panic on out-of-range positions: callers bounds-check first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    cells: Vec<Tile>,
    bounds: Bounds,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    cells: Vec<Tile>,
    bounds: Bounds,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, GridError> {
        if repr.cells.len() != repr.bounds.len() {
            return Err(GridError::size_mismatch(repr.bounds, repr.cells.len()));
        }
        Ok(Self {
            cells: repr.cells,
            bounds: repr.bounds,
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Bounds::new(ROWS, COLS))
    }
}

impl Grid {
    /// Create a new grid filled with [`Tile::Free`].
    pub fn new(bounds: Bounds) -> Self {
        Self {
            cells: vec![Tile::Free; bounds.len()],
            bounds,
        }
    }

    /// Shorthand for `Grid::new(Bounds::new(rows, cols))`.
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self::new(Bounds::new(rows, cols))
    }

    /// The grid dimensions.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.contains(p)
    }

    /// Get the tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Position) -> Option<Tile> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Set the tile at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds.
    #[inline]
    pub fn set(&mut self, p: Position, tile: Tile) {
        self[p] = tile;
    }

    /// Fill every cell with `tile`.
    pub fn fill(&mut self, tile: Tile) {
        self.cells.fill(tile);
    }

    /// Count how many cells hold `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// First position holding `tile`, scanning row-major.
    pub fn find(&self, tile: Tile) -> Option<Position> {
        self.cells
            .iter()
            .position(|&t| t == tile)
            .map(|i| self.bounds.position(i))
    }

    /// All positions holding `tile`, in row-major order.
    pub fn positions(&self, tile: Tile) -> Vec<Position> {
        self.iter()
            .filter_map(|(p, t)| (t == tile).then_some(p))
            .collect()
    }

    /// The tiles of row `r`, or `None` if out of bounds.
    pub fn row(&self, r: i32) -> Option<&[Tile]> {
        if r < 0 || r >= self.bounds.rows {
            return None;
        }
        let w = self.bounds.cols as usize;
        let start = r as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// Mutable access to row `r`, or `None` if out of bounds.
    pub fn row_mut(&mut self, r: i32) -> Option<&mut [Tile]> {
        if r < 0 || r >= self.bounds.rows {
            return None;
        }
        let w = self.bounds.cols as usize;
        let start = r as usize * w;
        Some(&mut self.cells[start..start + w])
    }

    /// Row-major iterator over `(Position, Tile)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Position, Tile)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl Index<Position> for Grid {
    type Output = Tile;

    fn index(&self, p: Position) -> &Tile {
        match self.bounds.index(p) {
            Some(i) => &self.cells[i],
            None => panic!("position {p} out of bounds {}", self.bounds),
        }
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, p: Position) -> &mut Tile {
        match self.bounds.index(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("position {p} out of bounds {}", self.bounds),
        }
    }
}

impl fmt::Display for Grid {
    /// Renders the text format: one line per row, newline-terminated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.bounds.rows {
            for t in self.row(r).unwrap_or_default() {
                write!(f, "{}", t.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::with_size(5, 10);
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cols(), 10);
        assert_eq!(g.count(Tile::Free), 50);
    }

    #[test]
    fn default_is_full_size() {
        let g = Grid::default();
        assert_eq!(g.bounds(), Bounds::new(ROWS, COLS));
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::with_size(4, 4);
        let p = Position::new(2, 3);
        g.set(p, Tile::Obstacle);
        assert_eq!(g.at(p), Some(Tile::Obstacle));
        assert_eq!(g[p], Tile::Obstacle);
        assert_eq!(g.at(Position::new(0, 0)), Some(Tile::Free));
        assert_eq!(g.at(Position::new(4, 0)), None);
        assert_eq!(g.at(Position::new(0, -1)), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_out_of_bounds_panics() {
        let mut g = Grid::with_size(2, 2);
        g.set(Position::new(2, 0), Tile::Obstacle);
    }

    #[test]
    fn fill_and_count() {
        let mut g = Grid::with_size(3, 3);
        g.fill(Tile::Obstacle);
        assert_eq!(g.count(Tile::Obstacle), 9);
        g.set(Position::new(1, 1), Tile::Start);
        assert_eq!(g.count(Tile::Obstacle), 8);
        assert_eq!(g.count(Tile::Start), 1);
    }

    #[test]
    fn find_is_row_major() {
        let mut g = Grid::with_size(3, 3);
        g.set(Position::new(2, 0), Tile::End);
        g.set(Position::new(1, 2), Tile::End);
        assert_eq!(g.find(Tile::End), Some(Position::new(1, 2)));
        assert_eq!(g.find(Tile::Start), None);
        assert_eq!(
            g.positions(Tile::End),
            vec![Position::new(1, 2), Position::new(2, 0)]
        );
    }

    #[test]
    fn rows_and_display() {
        let mut g = Grid::with_size(2, 3);
        g.set(Position::new(0, 0), Tile::Start);
        g.set(Position::new(1, 2), Tile::End);
        g.row_mut(1).unwrap()[0] = Tile::Obstacle;
        assert_eq!(g.row(1).unwrap(), &[Tile::Obstacle, Tile::Free, Tile::End]);
        assert!(g.row(2).is_none());
        assert_eq!(g.to_string(), "A  \nx B\n");
    }

    #[test]
    fn iter_pairs() {
        let mut g = Grid::with_size(2, 2);
        g.set(Position::new(1, 0), Tile::Path);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[2], (Position::new(1, 0), Tile::Path));
    }
}
