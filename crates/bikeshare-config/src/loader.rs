//! Configuration loading from TOML files.

use crate::schema::Config;
use bikeshare_common::{BikeshareError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration loader for a TOML file.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads configuration from file.
    ///
    /// Sections and keys missing from the file keep their defaults.
    pub fn load(&self) -> Result<Config> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            BikeshareError::config_with_source(
                format!("Cannot read {}", self.path.display()),
                e,
            )
        })?;

        let config = Self::parse(&contents).map_err(|e| match e {
            BikeshareError::Config { message, source } => BikeshareError::Config {
                message: format!("{}: {message}", self.path.display()),
                source,
            },
            other => other,
        })?;

        info!(path = %self.path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Config> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| BikeshareError::config_with_source("Invalid TOML configuration", e))?;
        debug!(?config, "Parsed configuration");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::new(path).load(),
            None => {
                debug!("No configuration file given, using defaults");
                Ok(Config::default())
            }
        }
    }
}
