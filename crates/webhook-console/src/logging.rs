//! Diagnostic logging.
//!
//! The console owns the terminal while it runs, so its logs go to a file.
//! The headless `summary` command logs to stderr instead. `RUST_LOG`
//! overrides the configured level in both cases.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use eyre::{eyre, Result};
use tracing_subscriber::EnvFilter;

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive such as `info` or `webhook_console=debug`.
    pub level: String,
    pub target: LogTarget,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            target: LogTarget::File(PathBuf::from("webhook-console.log")),
        }
    }
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.is_empty() => Ok(EnvFilter::try_new(directives)?),
        _ => EnvFilter::try_new(level).map_err(|e| eyre!("invalid log level '{}': {}", level, e)),
    }
}

/// Installs the global subscriber. Calling it twice is an error.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    if LOGGING_INITIALIZED.set(()).is_err() {
        return Err(eyre!("logging already initialized"));
    }

    let filter = build_filter(&config.level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match &config.target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| eyre!("failed to set global subscriber: {}", e))?;
        }
        LogTarget::Stderr => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| eyre!("failed to set global subscriber: {}", e))?;
        }
    }
    Ok(())
}
