use gridpath_core::{Grid, Position};

use crate::traits::Pather;

/// [`Pather`] over a [`Grid`]: a neighbor is valid iff it is in bounds and
/// holds free ground or the end marker.
pub struct GridPather<'a> {
    grid: &'a Grid,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Whether a search may step onto `p`.
    #[inline]
    pub fn is_valid(&self, p: Position) -> bool {
        self.grid.at(p).is_some_and(|t| t.is_enterable())
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_valid(n)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Tile;

    #[test]
    fn grid_pather_skips_blocked_cells() {
        let mut g = Grid::with_size(3, 3);
        g.set(Position::new(0, 1), Tile::Obstacle);
        g.set(Position::new(1, 0), Tile::Start);
        g.set(Position::new(1, 2), Tile::End);
        g.set(Position::new(2, 1), Tile::Explored);
        let pather = GridPather::new(&g);

        let mut buf = Vec::new();
        pather.neighbors(Position::new(1, 1), &mut buf);
        assert_eq!(buf, vec![Position::new(1, 2)]);

        buf.clear();
        pather.neighbors(Position::new(0, 0), &mut buf);
        assert!(buf.is_empty());
    }
}
