//! gridpath command line tool.
//!
//! Run: cargo run -- [menu | once | generate | solve]

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gridpath_cli::session::{generate_and_save, parse_percentage, run_once, solve_file};
use gridpath_cli::{Menu, Settings, render};
use gridpath_gen::MapGen;
use gridpath_paths::Outcome;
use tracing_subscriber::{EnvFilter, fmt};

/// Generate obstacle grids and find shortest paths with breadth-first search
#[derive(Parser)]
#[command(name = "gridpath", version, about)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Number of grid rows
    #[arg(long, global = true)]
    rows: Option<i32>,

    /// Number of grid columns
    #[arg(long, global = true)]
    cols: Option<i32>,

    /// Minimum Manhattan distance between the generated endpoints
    #[arg(long, global = true)]
    min_separation: Option<i32>,

    /// RNG seed for reproducible grids
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,
    /// Generate a grid with endpoints in opposite corners, solve it and print it
    Once {
        /// Obstacle percentage, 0-100
        #[arg(short, long, default_value = "30")]
        percent: String,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Generate a random grid and save it
    Generate {
        /// Obstacle percentage, 0-100
        #[arg(short, long)]
        percent: String,
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Solve a saved grid and save the annotated result
    Solve {
        /// Grid file to read
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Annotated grid file to write
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn settings(cli: &Cli) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.apply_overrides(cli.rows, cli.cols, cli.min_separation);
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    Ok(settings)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = settings(&cli)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Menu::new(stdin.lock(), stdout.lock(), &settings, settings.rng()).run()?;
        }
        Commands::Once { percent, no_color } => {
            let percent = parse_percentage(&percent)?;
            let mut mapgen = MapGen::new(settings.generator, settings.rng());
            let (grid, outcome) = run_once(&mut mapgen, percent)?;
            let mut stdout = io::stdout().lock();
            let color = !no_color && stdout.is_terminal();
            render::print_grid(&mut stdout, &grid, color)?;
            match outcome {
                Outcome::Found(a) => println!("Path found: {} moves", a.path_len),
                Outcome::NoPath => println!("No path from A to B"),
            }
        }
        Commands::Generate { percent, output } => {
            let percent = parse_percentage(&percent)?;
            if let Some(output) = output {
                settings.grid_file = output;
            }
            let mut mapgen = MapGen::new(settings.generator, settings.rng());
            let placement = generate_and_save(&settings, &mut mapgen, percent)?;
            println!(
                "Grid generated ({} obstacles) and saved to {}",
                placement.obstacles,
                settings.grid_file.display()
            );
        }
        Commands::Solve { input, output } => {
            if let Some(input) = input {
                settings.grid_file = input;
            }
            if let Some(output) = output {
                settings.path_file = output;
            }
            match solve_file(&settings)? {
                Outcome::Found(a) => println!(
                    "Path found ({} moves), saved to {}",
                    a.path_len,
                    settings.path_file.display()
                ),
                Outcome::NoPath => println!("No path from A to B"),
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
