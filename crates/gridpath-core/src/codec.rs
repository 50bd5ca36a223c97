//! Line-oriented text format for grids.
//!
//! A grid file holds one line per row, each line one character per column
//! using the [`Tile`] alphabet. The reader is lenient about short input: it
//! stops after the last line, and a short line leaves the remaining cells of
//! that row untouched, so callers pre-fill the buffer (see [`load`]).

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::GridError;
use crate::geom::Bounds;
use crate::grid::Grid;
use crate::tile::Tile;

/// Read lines from `reader` into `grid`, returning the number of rows read.
///
/// At most `grid.rows()` lines are consumed and at most `grid.cols()`
/// characters of each line are copied. A trailing `'\r'` is ignored.
pub fn read_into<R: BufRead>(mut reader: R, grid: &mut Grid) -> Result<usize, GridError> {
    let cols = grid.cols() as usize;
    let mut line = String::new();
    let mut r = 0;

    while r < grid.rows() {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches('\n');
        let text = text.strip_suffix('\r').unwrap_or(text);

        let Some(row) = grid.row_mut(r) else {
            break;
        };
        for (c, ch) in text.chars().take(cols).enumerate() {
            row[c] = Tile::from_char(ch).ok_or(GridError::invalid_tile(r, c as i32, ch))?;
        }
        r += 1;
    }

    log::debug!("read {r} of {} rows", grid.rows());
    Ok(r as usize)
}

/// Write `grid` to `writer`: exactly `rows` lines of exactly `cols`
/// characters, each newline-terminated.
pub fn write_to<W: Write>(mut writer: W, grid: &Grid) -> Result<(), GridError> {
    write!(writer, "{grid}")?;
    writer.flush()?;
    Ok(())
}

/// Load a grid of the given dimensions from `path`.
///
/// The buffer is filled with [`Tile::Free`] before reading, so rows and
/// columns missing from the file come back as free cells.
pub fn load(path: impl AsRef<Path>, bounds: Bounds) -> Result<Grid, GridError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut grid = Grid::new(bounds);
    let rows = read_into(BufReader::new(file), &mut grid)?;
    log::info!("loaded {} ({rows} rows)", path.display());
    Ok(grid)
}

/// Save `grid` to `path`, replacing any existing file.
pub fn save(path: impl AsRef<Path>, grid: &Grid) -> Result<(), GridError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_to(BufWriter::new(file), grid)?;
    log::info!("saved {} ({})", path.display(), grid.bounds());
    Ok(())
}
