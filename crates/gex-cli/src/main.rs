//! GEX CLI - Graph Export
//!
//! A one-shot export tool that dumps datasets from a Neo4j graph into
//! JSON and CSV files.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gex=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Environment is read once at startup; a .env file is a convenience
    // for local runs and is not required.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();
    cli.execute().await
}
