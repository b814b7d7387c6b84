//! Configuration schema definitions using serde.

use bikeshare_common::{BikeshareError, City, LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Main configuration structure for the bikeshare explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record source configuration.
    pub data: DataConfig,
    /// Console display configuration.
    pub display: DisplayConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Where the per-city record sources live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory the city files are resolved against.
    pub directory: PathBuf,
    /// City name (as typed at the prompt) to file name.
    pub cities: BTreeMap<String, String>,
}

/// Console display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows per raw data window.
    pub page_size: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level filter directive.
    pub level: String,
    /// Line layout.
    pub format: LogFormat,
    /// Optional log file; stderr when unset.
    pub file: Option<PathBuf>,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), BikeshareError> {
        if self.display.page_size == 0 {
            return Err(BikeshareError::config(
                "display.page_size must be at least 1",
            ));
        }

        for (name, file) in &self.data.cities {
            name.parse::<City>().map_err(|_| {
                BikeshareError::config(format!("data.cities has unknown city '{name}'"))
            })?;
            if file.trim().is_empty() {
                return Err(BikeshareError::config(format!(
                    "data.cities.'{name}' must name a file"
                )));
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(BikeshareError::config("logging.level cannot be empty"));
        }

        Ok(())
    }

    /// Resolves the record source of a city.
    pub fn city_file(&self, city: City) -> PathBuf {
        let file = self
            .data
            .cities
            .get(city.name())
            .map_or(city.default_file(), String::as_str);
        self.data.directory.join(file)
    }

    /// Logging system configuration derived from these settings.
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.logging.level.clone(),
            format: self.logging.format,
            file_path: self
                .logging
                .file
                .as_ref()
                .map(|path| path.to_string_lossy().into_owned()),
            ..LoggingConfig::default()
        }
    }
}
