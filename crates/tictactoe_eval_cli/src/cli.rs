//! Command-line interface for tictactoe_eval.

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Classify N×N tic-tac-toe boards as no winner, X wins, O wins or unreachable
#[derive(Parser, Debug)]
#[command(name = "tictactoe_eval")]
#[command(about = "Validate and classify tic-tac-toe boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Boards to evaluate, each a row-major string of markers (e.g. "xxxo.oxo.")
    pub boards: Vec<String>,

    /// Read boards from a file, one per line (ignored when boards are given)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the grid under each text result
    #[arg(long)]
    pub show_board: bool,

    /// Exit with failure when any board is unreachable
    #[arg(long)]
    pub fail_on_unreachable: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
