//! The operations behind each front-end: generate, solve and one-shot runs.
//!
//! Each operation composes the generator, codec and search crates and returns
//! a [`CliError`] that the caller reports; none of them exits the process.

use gridpath_core::{Grid, Position, codec};
use gridpath_gen::{MapGen, Placement};
use gridpath_paths::{Outcome, solve, solve_between};
use rand::Rng;

use crate::error::CliError;
use crate::settings::Settings;

/// Parse an obstacle percentage typed by the user.
pub fn parse_percentage(input: &str) -> Result<u32, CliError> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(p) if p <= 100 => Ok(p),
        _ => Err(CliError::InvalidPercentage(trimmed.to_owned())),
    }
}

/// Generate a random grid with `mapgen` and save it to `settings.grid_file`.
pub fn generate_and_save<R: Rng>(
    settings: &Settings,
    mapgen: &mut MapGen<R>,
    percent: u32,
) -> Result<Placement, CliError> {
    let placement = mapgen.generate(percent)?;
    codec::save(&settings.grid_file, &placement.grid)?;
    Ok(placement)
}

/// Load `settings.grid_file`, solve it and, when a path exists, save the
/// annotated grid to `settings.path_file`.
pub fn solve_file(settings: &Settings) -> Result<Outcome, CliError> {
    let mut grid = codec::load(&settings.grid_file, settings.bounds())?;
    let outcome = solve(&mut grid)?;
    if outcome.is_found() {
        codec::save(&settings.path_file, &grid)?;
    } else {
        log::warn!("{} has no path, nothing saved", settings.grid_file.display());
    }
    Ok(outcome)
}

/// Generate a grid with the endpoints at opposite corners and solve it,
/// without touching the file system.
pub fn run_once<R: Rng>(
    mapgen: &mut MapGen<R>,
    percent: u32,
) -> Result<(Grid, Outcome), CliError> {
    let start = Position::ZERO;
    let end = mapgen.config.bounds().last().unwrap_or(start);

    let Placement { mut grid, .. } = mapgen.generate_with_endpoints(percent, start, end)?;
    let outcome = solve_between(&mut grid, start, end)?;
    Ok((grid, outcome))
}
