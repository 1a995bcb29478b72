//! Evaluator configuration.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_eval.toml";

/// How results are written to stdout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated `input`, `state` lines.
    #[default]
    Text,
    /// One JSON object per board (JSON Lines).
    Json,
}

/// Configuration for an evaluation run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Output format.
    #[serde(default)]
    output: OutputFormat,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Print the grid under each text result.
    #[serde(default)]
    show_board: bool,

    /// Treat unreachable boards as a failed run.
    #[serde(default)]
    fail_on_unreachable: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            log_filter: default_log_filter(),
            show_board: false,
            fail_on_unreachable: false,
        }
    }
}

impl EvalConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(output = %config.output, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present, otherwise the defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line flags on top of file values.
    #[instrument(skip(self, cli))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(format) = cli.format {
            self.output = format;
        }
        self.show_board |= cli.show_board;
        self.fail_on_unreachable |= cli.fail_on_unreachable;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
