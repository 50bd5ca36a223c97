//! Interactive menu loop.
//!
//! Reads choices line by line from any [`BufRead`] and writes prompts and
//! reports to any [`Write`], so the loop runs the same against a terminal or
//! an in-memory script.

use std::io::{self, BufRead, Write};

use gridpath_gen::MapGen;
use gridpath_paths::Outcome;
use rand::Rng;

use crate::session::{generate_and_save, parse_percentage, solve_file};
use crate::settings::Settings;

const MENU: &str = "\
=== MENU ===
1. Generate a random grid
2. Solve path
3. Exit";

/// A menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Generate,
    Solve,
    Exit,
}

impl Choice {
    /// Parse a menu line; `None` for anything but 1, 2 or 3.
    pub fn parse(input: &str) -> Option<Choice> {
        match input.trim() {
            "1" => Some(Choice::Generate),
            "2" => Some(Choice::Solve),
            "3" => Some(Choice::Exit),
            _ => None,
        }
    }
}

pub struct Menu<'a, I, O, R: Rng> {
    input: I,
    output: O,
    settings: &'a Settings,
    mapgen: MapGen<R>,
    line: String,
}

impl<'a, I: BufRead, O: Write, R: Rng> Menu<'a, I, O, R> {
    pub fn new(input: I, output: O, settings: &'a Settings, rng: R) -> Self {
        Self {
            input,
            output,
            settings,
            mapgen: MapGen::new(settings.generator, rng),
            line: String::new(),
        }
    }

    /// Run until the user chooses to exit or input ends.
    ///
    /// Failed operations are reported and the loop continues; only I/O errors
    /// on the menu streams themselves end it early.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };
            match Choice::parse(&line) {
                Some(Choice::Generate) => self.generate()?,
                Some(Choice::Solve) => self.solve()?,
                Some(Choice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                None => writeln!(self.output, "Invalid option!")?,
            }
        }
        self.output.flush()
    }

    /// Print `text` and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim().to_owned()))
    }

    fn generate(&mut self) -> io::Result<()> {
        let Some(line) = self.prompt("Obstacle percentage (0-100): ")? else {
            return Ok(());
        };
        let percent = match parse_percentage(&line) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("{e}");
                return writeln!(self.output, "Invalid percentage!");
            }
        };
        match generate_and_save(self.settings, &mut self.mapgen, percent) {
            Ok(_) => writeln!(
                self.output,
                "Grid generated and saved to {}",
                self.settings.grid_file.display()
            ),
            Err(e) => {
                log::warn!("generate failed: {e}");
                writeln!(self.output, "Error: {e}")
            }
        }
    }

    fn solve(&mut self) -> io::Result<()> {
        match solve_file(self.settings) {
            Ok(Outcome::Found(a)) => {
                writeln!(self.output, "Path found! ({} moves)", a.path_len)?;
                writeln!(
                    self.output,
                    "Grid with path saved to {}",
                    self.settings.path_file.display()
                )
            }
            Ok(Outcome::NoPath) => writeln!(self.output, "No path from A to B!"),
            Err(e) => {
                log::warn!("solve failed: {e}");
                writeln!(self.output, "Error: {e}")
            }
        }
    }
}
