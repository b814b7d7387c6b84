//! Command line arguments.

use bikeshare_common::Result;
use bikeshare_config::{Config, ConfigLoader};
use clap::Parser;
use std::path::PathBuf;

/// Interactive explorer for US bikeshare trip data.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "bikeshare", version, about)]
pub struct Args {
    /// Configuration file (TOML).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the city record sources.
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "bikeshare_stats=trace".
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Raw data rows shown per window.
    #[arg(long, value_name = "ROWS")]
    pub page_size: Option<usize>,
}

impl Args {
    /// Loads the configuration file, if any, and applies command line overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = ConfigLoader::load_or_default(self.config.as_deref())?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Applies the flags that were given on top of `config`.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.data_dir {
            config.data.directory.clone_from(dir);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if let Some(rows) = self.page_size {
            config.display.page_size = rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "bikeshare",
            "--data-dir",
            "/srv/bikeshare",
            "--log-level",
            "debug",
            "--page-size",
            "10",
        ])
        .unwrap();
        assert_eq!(args.data_dir, Some(PathBuf::from("/srv/bikeshare")));
        assert_eq!(args.page_size, Some(10));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let args = Args {
            data_dir: Some(PathBuf::from("data")),
            log_level: Some("info".to_string()),
            page_size: Some(3),
            ..Args::default()
        };
        let mut config = Config::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.data.directory, PathBuf::from("data"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.display.page_size, 3);
    }

    #[test]
    fn test_no_flags_keep_defaults() {
        let config = Args::default().resolve_config().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let args = Args {
            page_size: Some(0),
            ..Args::default()
        };
        assert!(args.resolve_config().is_err());
    }

    #[test]
    fn test_rejects_non_numeric_page_size() {
        assert!(Args::try_parse_from(["bikeshare", "--page-size", "many"]).is_err());
    }
}
