mod cli;
mod config;
mod pdf;
mod reader;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing - only show warnings by default, use RUST_LOG=info for more detail
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Read {
            path,
            backend,
            output,
            json,
        } => {
            cli::commands::read::run(path, backend, output, json).await?;
        }
        Commands::Init { force } => {
            cli::commands::init::run(force).await?;
        }
    }

    Ok(())
}
