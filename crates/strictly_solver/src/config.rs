//! Solver configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How command results are printed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON document per command.
    Json,
}

/// Configuration for the solver CLI.
///
/// ```toml
/// format = "json"
/// log_filter = "strictly_tictactoe=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Output format for command results.
    #[serde(default)]
    format: OutputFormat,

    /// Tracing filter used when neither `--log` nor `RUST_LOG` is set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl SolverConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(format = %config.format, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(*config.format(), OutputFormat::Text);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: SolverConfig = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(*config.format(), OutputFormat::Json);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_format_override() {
        let config = SolverConfig::default().with_format(Some(OutputFormat::Json));
        assert_eq!(*config.format(), OutputFormat::Json);
        let config = config.with_format(None);
        assert_eq!(*config.format(), OutputFormat::Json);
    }
}
