//! tictactoe_eval - classify tic-tac-toe boards from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tictactoe_eval_cli::{Cli, EvalConfig, collect_inputs, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = EvalConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(&cli);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(output = %config.output(), "Starting tictactoe_eval");

    let inputs = collect_inputs(&cli)?;
    let summary = run(&config, &inputs, &mut std::io::stdout().lock())?;

    if summary.is_success(*config.fail_on_unreachable()) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
