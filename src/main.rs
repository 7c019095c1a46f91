mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recsvc::config::RecsvcConfig;
use recsvc::server;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recsvc", version, about = "Product recommendation relationship service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve,
    /// Print store statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = RecsvcConfig::load()?;

    // Initialize tracing with the configured log level.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Command::Serve => {
            server::serve(config).await?;
        }
        Command::Stats => {
            cli::stats(&config)?;
        }
    }

    Ok(())
}
