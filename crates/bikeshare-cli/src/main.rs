//! Main entry point for the bikeshare explorer.

use anyhow::Context;
use bikeshare_cli::{Args, Console, Session};
use bikeshare_common::init_logging;
use bikeshare_config::ConfigValidator;
use bikeshare_stats::DatasetLoader;
use clap::Parser;
use std::io;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = args.resolve_config().context("Failed to load configuration")?;
    init_logging(config.logging_config()).context("Failed to initialize logging")?;
    ConfigValidator::validate(&config).context("Invalid configuration")?;

    info!(
        data_dir = %config.data.directory.display(),
        page_size = config.display.page_size,
        "Starting bikeshare explorer"
    );

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let loader = DatasetLoader::from_config(&config);
    let mut session = Session::new(console, loader, config.display.page_size);

    if let Err(e) = session.run() {
        error!("Session failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
