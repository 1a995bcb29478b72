//! Command-line harness for [`tictactoe_eval`].
//!
//! Boards come from arguments, a file or stdin; each is classified and
//! written as a text or JSON Lines record.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod report;

pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, EvalConfig, OutputFormat};
pub use report::{Report, Summary, parse_lines, run};

use anyhow::Context;
use std::io::Read;
use tracing::{debug, instrument};

/// Collects the boards to evaluate: arguments, else `--file`, else stdin.
///
/// # Errors
///
/// Fails when the board file or stdin cannot be read.
#[instrument(skip(cli))]
pub fn collect_inputs(cli: &Cli) -> anyhow::Result<Vec<String>> {
    if !cli.boards.is_empty() {
        debug!(count = cli.boards.len(), "Boards from arguments");
        return Ok(cli.boards.clone());
    }

    let text = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read board file {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read boards from stdin")?;
            text
        }
    };
    Ok(parse_lines(&text))
}
