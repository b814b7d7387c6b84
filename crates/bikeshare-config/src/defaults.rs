//! Default values for every configuration section.

use crate::schema::*;
use bikeshare_common::{City, LogFormat};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Rows per raw data window unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        let cities: BTreeMap<String, String> = City::ALL
            .into_iter()
            .map(|city| (city.name().to_string(), city.default_file().to_string()))
            .collect();

        Self {
            directory: PathBuf::from("."),
            cities,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            file: None,
        }
    }
}
