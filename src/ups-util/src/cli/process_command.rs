use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use super::commands::Cli;
use super::handlers;
use crate::config::ConfigLoader;
use crate::logging::setup_logging;
use crate::platform::CfSessionProvider;

/// Process the command line.
pub fn process_command() -> Result<()> {
    // NOTE: this exits the process if there is a parsing error
    let cli = Cli::parse();

    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    if let Some(concurrency) = cli.concurrency {
        config.fetch_concurrency = usize::from(concurrency);
    }

    setup_logging(&config.log_level, cli.verbose, config.log_file.as_deref())?;
    debug!("Config: {}", config.to_safe_json());

    let sessions = CfSessionProvider::from_config(&config);

    let statements = tokio::runtime::Runtime::new()
        .context("Failed to start async runtime")?
        .block_on(handlers::suggest(&cli.app_names, cli.format, &config, &sessions))?;

    for statement in statements {
        println!("{}", statement);
    }
    Ok(())
}
