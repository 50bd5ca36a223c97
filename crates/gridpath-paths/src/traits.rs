use gridpath_core::Position;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append the cells reachable in one step from `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}
