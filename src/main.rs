//! Command line front end for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, InitialState, OutputFormat, Settings},
    game_of_life::{load_grid_from_file, Grid, Pattern},
    simulation,
    utils::{show_cells, ColorOutput},
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Conway's Game of Life on a toroidal grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of generations (overrides config)
        #[arg(short, long, allow_negative_numbers = true)]
        iterations: Option<i64>,

        /// Print every generation instead of only the last one
        #[arg(short, long)]
        show_steps: bool,

        /// Seconds to pause between printed generations (overrides config)
        #[arg(short, long, allow_negative_numbers = true)]
        delay: Option<f64>,

        /// Grid rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Grid columns (overrides config)
        #[arg(long)]
        columns: Option<usize>,

        /// Seed for a random initial grid
        #[arg(long)]
        seed: Option<u64>,

        /// Start from a built-in pattern
        #[arg(short, long, conflicts_with = "input")]
        pattern: Option<Pattern>,

        /// Start from a 0/1 grid file
        #[arg(long)]
        input: Option<PathBuf>,

        /// Format of the final grid in silent mode
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Render a single grid
    Show {
        /// Built-in pattern to render
        #[arg(short, long, conflicts_with = "input", required_unless_present = "input")]
        pattern: Option<Pattern>,

        /// 0/1 grid file to render
        #[arg(long)]
        input: Option<PathBuf>,

        /// Grid rows for a pattern
        #[arg(long, default_value_t = 8)]
        rows: usize,

        /// Grid columns for a pattern
        #[arg(long, default_value_t = 8)]
        columns: usize,
    },

    /// Create example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            config,
            iterations,
            show_steps,
            delay,
            rows,
            columns,
            seed,
            pattern,
            input,
            format,
        } => {
            let overrides = CliOverrides {
                iterations,
                show_steps,
                delay_seconds: delay,
                rows,
                columns,
                seed,
                pattern,
                input,
                format,
            };
            let stdout = io::stdout();
            run_command(&config, &overrides, &mut stdout.lock())
        }
        Commands::Show {
            pattern,
            input,
            rows,
            columns,
        } => show_command(pattern, input, rows, columns),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "game_of_life_sim=debug"
    } else {
        "game_of_life_sim=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Grids go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        warn!(path = %config_path.display(), "config file not found, using defaults");
        Ok(Settings::default())
    }
}

fn run_command<W: Write>(config_path: &Path, overrides: &CliOverrides, out: &mut W) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let options = settings.simulation_options()?;
    let initial = settings
        .initial_grid()
        .context("Failed to build initial grid")?;

    info!(
        rows = initial.rows(),
        columns = initial.columns(),
        iterations = options.iterations,
        show_steps = options.show_steps,
        "starting run"
    );

    let start_time = Instant::now();
    let last = simulation::run(initial, &options, out).context("Simulation failed")?;

    if let Some(grid) = last {
        write_grid(&grid, settings.output.format, out)?;
    }

    info!(
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "run complete"
    );
    Ok(())
}

fn write_grid<W: Write>(grid: &Grid, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", show_cells(grid))?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(grid).context("Failed to serialize grid")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

fn show_command(
    pattern: Option<Pattern>,
    input: Option<PathBuf>,
    rows: usize,
    columns: usize,
) -> Result<()> {
    let (title, grid) = match (pattern, input) {
        (_, Some(path)) => {
            let grid = load_grid_from_file(&path)?;
            (path.display().to_string(), grid)
        }
        (Some(pattern), None) => (pattern.to_string(), pattern.place(rows, columns)?),
        (None, None) => anyhow::bail!("Either --pattern or --input is required"),
    };

    println!(
        "{}",
        ColorOutput::info(&format!("{} ({}x{}):", title, grid.rows(), grid.columns()))
    );
    println!("{}", show_cells(&grid));
    println!("Living cells: {}", grid.living_count());
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration files..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!("Skipped: {} (already exists)", config_path.display()))
        );
    }

    let examples_dir = config_dir.join("examples");

    // Streams a blinker for a few generations
    let mut blinker = Settings::default();
    blinker.simulation.iterations = 4;
    blinker.simulation.show_steps = true;
    blinker.simulation.delay_seconds = 0.5;
    blinker.grid.rows = 5;
    blinker.grid.columns = 5;
    blinker.grid.initial = InitialState::Pattern {
        name: Pattern::Blinker,
    };
    blinker.to_file(&examples_dir.join("blinker.yaml"))?;

    // Reproducible random soup
    let mut soup = Settings::default();
    soup.simulation.iterations = 100;
    soup.grid.rows = 20;
    soup.grid.columns = 40;
    soup.grid.seed = Some(42);
    soup.to_file(&examples_dir.join("soup.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("Run: cargo run -- run --config config/examples/blinker.yaml");

    Ok(())
}
