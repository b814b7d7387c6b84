//! Runtime validation of a loaded configuration against the filesystem.

use crate::schema::Config;
use bikeshare_common::{BikeshareError, City, Result};
use tracing::warn;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    ///
    /// Schema rules are fatal. A missing data directory is fatal too, while a
    /// missing city file only logs a warning since the user may never pick
    /// that city.
    pub fn validate(config: &Config) -> Result<()> {
        config.validate()?;

        if !config.data.directory.is_dir() {
            return Err(BikeshareError::config(format!(
                "Data directory {} does not exist",
                config.data.directory.display()
            )));
        }

        for city in City::ALL {
            let path = config.city_file(city);
            if !path.is_file() {
                warn!(%city, path = %path.display(), "Record source not found");
            }
        }

        Ok(())
    }
}
