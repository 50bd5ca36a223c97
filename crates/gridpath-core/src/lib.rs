//! **gridpath-core**: core types for grid pathfinding.
//!
//! This crate provides the types shared by the generator, the search engine
//! and the command line front-end: geometry primitives, the tile alphabet,
//! a fixed-size grid buffer and its plain-text file format.

pub mod codec;
pub mod error;
pub mod geom;
pub mod grid;
pub mod tile;

pub use error::GridError;
pub use geom::{Bounds, Position};
pub use grid::{COLS, Grid, ROWS};
pub use tile::Tile;
