//! Structured logging infrastructure for the bikeshare explorer.
//!
//! Diagnostics always go to stderr (or a file) so that report text on stdout
//! stays clean for the interactive session.

use crate::error::{BikeshareError, Result};
use serde::{Deserialize, Serialize};
use std::io;
use tracing::debug;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output layout of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line records.
    #[default]
    Compact,
    /// Multi-line human friendly records.
    Pretty,
    /// Newline-delimited JSON records.
    Json,
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "warn", "info", "debug", "bikeshare_stats=trace")
    pub level: String,
    /// Line layout
    pub format: LogFormat,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Whether to include span open/close events in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

/// Builds the level filter, falling back to `warn` for unparseable directives.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Installing a second global subscriber fails; that case is reported as a
/// configuration error rather than a panic.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let format = config.format;
    let destination = config
        .file_path
        .clone()
        .unwrap_or_else(|| "stderr".to_string());
    let registry = tracing_subscriber::registry().with(build_filter(&config.level));

    let result = match (config.format, config.file_path) {
        (LogFormat::Json, Some(path)) => {
            let file = open_log_file(&path)?;
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_span_events(span_events)
                        .with_target(config.include_targets)
                        .with_writer(file),
                )
                .try_init()
        }
        (LogFormat::Json, None) => registry
            .with(
                fmt::layer()
                    .json()
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(io::stderr),
            )
            .try_init(),
        (LogFormat::Pretty, Some(path)) => {
            let file = open_log_file(&path)?;
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_ansi(false)
                        .with_span_events(span_events)
                        .with_target(config.include_targets)
                        .with_writer(file),
                )
                .try_init()
        }
        (LogFormat::Pretty, None) => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(io::stderr),
            )
            .try_init(),
        (LogFormat::Compact, Some(path)) => {
            let file = open_log_file(&path)?;
            registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_ansi(false)
                        .with_span_events(span_events)
                        .with_target(config.include_targets)
                        .with_writer(file),
                )
                .try_init()
        }
        (LogFormat::Compact, None) => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_span_events(span_events)
                    .with_target(config.include_targets)
                    .with_writer(io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| BikeshareError::config_with_source("Failed to install log subscriber", e))?;

    debug!(?format, %destination, level = %config.level, "Logging initialized");
    Ok(())
}

fn open_log_file(path: &str) -> Result<std::fs::File> {
    Ok(std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?)
}

/// Initialize logging with default configuration
pub fn init_default_logging() -> Result<()> {
    init_logging(LoggingConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.file_path.is_none());
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }

    #[test]
    fn test_log_format_deserializes_lowercase() {
        let format: LogFormat = serde_json::from_str("\"pretty\"").unwrap();
        assert_eq!(format, LogFormat::Pretty);
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_level_falls_back() {
        // Must not panic on garbage directives.
        let _filter = build_filter("not a [valid directive");
    }
}
