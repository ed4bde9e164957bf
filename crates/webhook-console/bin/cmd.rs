use std::time::Duration;

use clap::Args;
use webhook_console::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use webhook_console::ConsoleConfig;

pub mod console;
pub mod summary;

/// Connection and logging options shared by all subcommands
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// Base URL of the webhook bridge
    #[arg(long, env = "WEBHOOK_CONSOLE_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Basic auth user for the admin routes
    #[arg(long, env = "LOGS_USER")]
    pub user: Option<String>,

    /// Basic auth password for the admin routes
    #[arg(long, env = "LOGS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, env = "WEBHOOK_CONSOLE_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ConnectionArgs {
    pub fn config(&self) -> ConsoleConfig {
        ConsoleConfig::new(self.url.clone())
            .with_credentials(self.user.clone(), self.password.clone())
            .with_timeout(Duration::from_millis(self.timeout_ms))
    }
}
