//! Command-line interface for the percolation simulator.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, render_grid, render_labels,
    render_summary, run_cli,
};
