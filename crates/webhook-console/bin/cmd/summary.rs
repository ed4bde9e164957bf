use clap::Args;
use eyre::Result;
use tracing::info;
use webhook_console::logging::{init_logging, LogConfig, LogTarget};
use webhook_console::report::render_summary;
use webhook_console::{AdminClient, DashboardSummary, Format, LogStore};

use crate::cmd::ConnectionArgs;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Output format: table, json or json-pretty
    #[arg(long, default_value = "table")]
    pub format: Format,
}

impl SummaryArgs {
    pub fn run(&self) -> Result<()> {
        init_logging(&LogConfig {
            level: self.connection.log_level.clone(),
            target: LogTarget::Stderr,
        })?;

        let client = AdminClient::new(self.connection.config());
        let store = LogStore::new(client.fetch_logs()?);
        info!(entries = store.len(), "fetched logs");

        let summary = DashboardSummary::from_logs(store.entries());
        println!("{}", render_summary(&summary, self.format)?);
        Ok(())
    }
}
