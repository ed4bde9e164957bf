use clap::{Parser, Subcommand};
use eyre::Result;

mod cmd;

use cmd::console::ConsoleArgs;
use cmd::summary::SummaryArgs;

#[derive(Debug, Parser)]
#[command(
    name = "webhook-console",
    version,
    about = "Admin console for the Memberful webhook bridge"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive dashboard with logs, email cache and merge map tabs
    Console(ConsoleArgs),
    /// Print the dashboard summary and exit
    Summary(SummaryArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Console(args) => args.run(),
        Command::Summary(args) => args.run(),
    }
}
