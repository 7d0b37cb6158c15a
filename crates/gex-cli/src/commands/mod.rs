//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod drugs;
pub mod load;
pub mod movies;

/// Graph Export - one-shot Neo4j to JSON/CSV export tool
#[derive(Parser)]
#[command(name = "gex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export drugs with aliases and relationships
    Drugs,

    /// Export movies with director and cast, then print graph stats
    Movies,

    /// Load a movies CSV into Neo4j, replacing existing graph content
    Load {
        /// Path to the movies CSV (actors separated by '|')
        file: PathBuf,
    },
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Drugs => drugs::execute().await,
            Commands::Movies => movies::execute().await,
            Commands::Load { file } => load::execute(file).await,
        }
    }
}
