use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level selected by the number of `-v` flags, `None` keeps the configured level.
fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn build_filter(log_level: &str, verbose: u8) -> EnvFilter {
    // RUST_LOG wins over everything else
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = verbosity_level(verbose).unwrap_or(log_level);
        EnvFilter::new(format!("warn,ups_util={}", level))
    })
}

/// Installs the global subscriber. Logs go to stderr unless `log_file` is set,
/// stdout stays reserved for provisioning statements.
pub fn setup_logging(log_level: &str, verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = build_filter(log_level, verbose);
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(directory).with_context(|| {
                format!("Failed to create log directory: {}", directory.display())
            })?;

            let file_appender = RollingFileAppender::new(Rotation::NEVER, directory, file_name);
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_writer(file_appender);

            registry
                .with(file_layer)
                .try_init()
                .context("Failed to set tracing subscriber")?;
        }
        None => {
            let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

            registry
                .with(stderr_layer)
                .try_init()
                .context("Failed to set tracing subscriber")?;
        }
    }

    tracing::debug!("Logging initialized");
    Ok(())
}
