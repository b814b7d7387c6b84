//! Error types and utilities for the bikeshare explorer.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for bikeshare operations.
pub type Result<T> = std::result::Result<T, BikeshareError>;

/// Main error type for bikeshare operations.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from a record source
    #[error("Column '{column}' is missing from {}", path.display())]
    MissingColumn { column: String, path: PathBuf },

    /// A cell could not be converted to its column type
    #[error("Cannot parse row {row} of {}: {message}", path.display())]
    Parse {
        path: PathBuf,
        row: usize,
        message: String,
    },

    /// User input outside a fixed enumeration
    #[error("{value} is not an available option for {field}")]
    Validation { field: String, value: String },

    /// The console input stream ended
    #[error("Input stream closed")]
    InputClosed,
}

impl BikeshareError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a parse error for a data row
    pub fn parse(path: impl AsRef<Path>, row: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            row,
            message: msg.into(),
        }
    }

    /// Create a validation error for an input outside its enumeration
    pub fn invalid_option(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Check if this error can be recovered from by asking again
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Get the error category for logging
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Io(_) => "io",
            Self::Csv(_) => "csv",
            Self::MissingColumn { .. } => "schema",
            Self::Parse { .. } => "parse",
            Self::Validation { .. } => "validation",
            Self::InputClosed => "input",
        }
    }
}
