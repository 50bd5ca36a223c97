//! gridpath: generate obstacle grids and solve them with breadth-first search.
//!
//! The library half of the command line tool: settings, the interactive menu,
//! the one-shot run and console rendering, all built on
//! [`gridpath_core`], [`gridpath_gen`] and [`gridpath_paths`].

pub mod error;
pub mod menu;
pub mod render;
pub mod session;
pub mod settings;

pub use error::CliError;
pub use menu::{Choice, Menu};
pub use settings::Settings;
