//! Console rendering of grids through crossterm.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use gridpath_core::{Grid, Tile};

const COL_OBSTACLE: Color = Color::Rgb { r: 100, g: 100, b: 130 };
const COL_EXPLORED: Color = Color::Rgb { r: 60, g: 120, b: 70 };
const COL_PATH: Color = Color::Rgb { r: 50, g: 180, b: 255 };
const COL_MARKER: Color = Color::Rgb { r: 255, g: 220, b: 80 };

fn tile_color(t: Tile) -> Option<Color> {
    match t {
        Tile::Free => None,
        Tile::Obstacle => Some(COL_OBSTACLE),
        Tile::Explored => Some(COL_EXPLORED),
        Tile::Path => Some(COL_PATH),
        Tile::Start | Tile::End => Some(COL_MARKER),
    }
}

/// Write `grid` to `out` in the text format, coloring each tile kind when
/// `color` is set.
pub fn print_grid<W: Write>(out: &mut W, grid: &Grid, color: bool) -> io::Result<()> {
    if !color {
        write!(out, "{grid}")?;
        return out.flush();
    }

    for r in 0..grid.rows() {
        let mut current = None;
        for &t in grid.row(r).unwrap_or_default() {
            let want = tile_color(t);
            if want != current {
                match want {
                    Some(c) => queue!(out, SetForegroundColor(c))?,
                    None => queue!(out, ResetColor)?,
                }
                current = want;
            }
            queue!(out, Print(t.to_char()))?;
        }
        if current.is_some() {
            queue!(out, ResetColor)?;
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}
