//! Shortest paths on obstacle grids.
//!
//! This crate provides breadth-first search over a 4-connected grid and the
//! annotation pass that draws its result back onto the grid:
//!
//! - **BFS** shortest-path search ([`Bfs::find_path`]) and reachability flood
//!   ([`Bfs::reachable`])
//! - **Predecessor chains** ([`PredecessorMap::path`])
//! - **Annotation** of path and explored cells ([`annotate`])
//! - the whole pipeline on a marked grid ([`solve`])
//!
//! Neighbor enumeration goes through the [`Pather`] trait; [`GridPather`]
//! implements it for [`Grid`](gridpath_core::Grid).

mod annotate;
mod bfs;
mod distance;
mod error;
mod maps;
mod neighbors;
mod solve;
mod traits;

pub use annotate::{Annotation, annotate};
pub use bfs::{Bfs, Search};
pub use distance::manhattan;
pub use error::{PathError, SolveError};
pub use maps::{PredecessorMap, VisitedSet};
pub use neighbors::GridPather;
pub use solve::{Outcome, find_markers, solve, solve_between};
pub use traits::Pather;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use gridpath_core::{Bounds, Position};

    #[test]
    fn predecessor_map_round_trip() {
        let mut m = PredecessorMap::new(Bounds::new(2, 2));
        m.set(Position::new(0, 1), Position::new(0, 0));
        let json = serde_json::to_string(&m).unwrap();
        let back: PredecessorMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn short_predecessor_map_is_rejected() {
        let json = r#"{"bounds":{"rows":2,"cols":2},"cells":[null]}"#;
        let err = serde_json::from_str::<PredecessorMap>(json).unwrap_err();
        assert!(err.to_string().contains("1 cells stored"));
    }

    #[test]
    fn visited_set_recounts_on_load() {
        let mut v = VisitedSet::new(Bounds::new(2, 3));
        v.insert(Position::new(0, 2));
        v.insert(Position::new(1, 0));
        let json = serde_json::to_string(&v).unwrap();
        let back: VisitedSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
        assert_eq!(back.len(), 2);

        let json = r#"{"bounds":{"rows":2,"cols":2},"cells":[true,false,true]}"#;
        assert!(serde_json::from_str::<VisitedSet>(json).is_err());
        let json = r#"{"bounds":{"rows":-3,"cols":2},"cells":[]}"#;
        let empty: VisitedSet = serde_json::from_str(json).unwrap();
        assert!(empty.is_empty());
        assert!(!empty.contains(Position::new(0, 0)));
    }

    #[test]
    fn outcome_round_trip() {
        let o = Outcome::Found(Annotation {
            path_len: 4,
            path_cells: 3,
            explored_cells: 7,
        });
        let json = serde_json::to_string(&o).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, o);
    }
}
