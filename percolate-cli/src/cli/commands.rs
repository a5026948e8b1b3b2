//! Command-line interface orchestration for the percolation simulator.
//!
//! The CLI offers a `run` command that samples a random occupancy grid,
//! labels its clusters, and renders both matrices as text. The renderers
//! consume only a matrix and a title, so alternative front ends can reuse
//! them unchanged.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use percolate_core::{
    LabelMatrix, OccupancyGrid, SimulationBuilder, SimulationError, SimulationOutcome,
};
use thiserror::Error;

const DEFAULT_SIDE: usize = 16;
const DEFAULT_PROBABILITY: f64 = 0.5;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "percolate",
    about = "Simulate site percolation and label occupied clusters."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Sample a random grid and label its clusters.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Lattice side length.
    #[arg(long, default_value_t = DEFAULT_SIDE)]
    pub side: usize,

    /// Probability in [0, 1] that each site is occupied.
    #[arg(long, default_value_t = DEFAULT_PROBABILITY)]
    pub probability: f64,

    /// Seed for the random source; fixed seeds reproduce identical grids.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Render only the label matrix, skipping the occupancy grid.
    #[arg(long)]
    pub labels_only: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core simulation failed.
    #[error(transparent)]
    Core(#[from] SimulationError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Grid and label matrix produced by the simulation.
    pub outcome: SimulationOutcome,
    /// Probability the grid was sampled with, echoed in the rendering.
    pub probability: f64,
    /// Seed the grid was sampled with.
    pub seed: u64,
    /// Whether the occupancy grid rendering was suppressed.
    pub labels_only: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the simulation parameters are invalid.
///
/// # Examples
/// ```
/// use percolate_cli::cli::{Cli, Command, RunCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         side: 4,
///         probability: 1.0,
///         seed: 0,
///         labels_only: false,
///     }),
/// };
/// let summary = run_cli(cli).expect("parameters are valid");
/// assert_eq!(summary.outcome.labels().cluster_count(), 1);
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => run_command(run),
    }
}

fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let simulation = SimulationBuilder::new()
        .with_side(command.side)
        .with_probability(command.probability)
        .with_seed(command.seed)
        .build()?;

    Ok(ExecutionSummary {
        outcome: simulation.run(),
        probability: command.probability,
        seed: command.seed,
        labels_only: command.labels_only,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let grid = summary.outcome.grid();
    let labels = summary.outcome.labels();

    if !summary.labels_only {
        let title = format!(
            "occupancy grid (side {}, p {:.2}, seed {})",
            grid.side(),
            summary.probability,
            summary.seed,
        );
        render_grid(grid, &title, &mut writer)?;
        writeln!(writer)?;
    }

    let title = format!("cluster labels ({} clusters)", labels.cluster_count());
    render_labels(labels, &title, &mut writer)
}

/// Renders an occupancy grid under `title`, one row per line, using `#` for
/// occupied sites and `.` for empty ones.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_grid(grid: &OccupancyGrid, title: &str, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{title}")?;
    for row in 0..grid.side() {
        let mut line = String::with_capacity(grid.side() * 2);
        for col in 0..grid.side() {
            if col > 0 {
                line.push(' ');
            }
            line.push(if grid.is_occupied(row, col) { '#' } else { '.' });
        }
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Renders a label matrix under `title`, one row per line, with labels
/// right-aligned to a shared column width. Empty cells render as `0`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_labels(labels: &LabelMatrix, title: &str, mut writer: impl Write) -> io::Result<()> {
    let widest = labels.labels().iter().max().copied().unwrap_or(0);
    let width = widest.to_string().len();

    writeln!(writer, "{title}")?;
    for row in 0..labels.side() {
        let mut line = String::new();
        for col in 0..labels.side() {
            if col > 0 {
                line.push(' ');
            }
            line.push_str(&format!("{:>width$}", labels.get(row, col)));
        }
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
