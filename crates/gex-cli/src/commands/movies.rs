//! Movie export pipeline.
//!
//! connect → query → write JSON → write CSV → print graph summary.
//! Connection parameters fall back to local-development defaults.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use gex_export::{write_csv, write_json};
use gex_graph::{fetch_movies, fetch_summary, GraphClient, GraphConfig};

use crate::output;

const JSON_PATH: &str = "movie_data.json";
const CSV_PATH: &str = "movie_data.csv";

pub async fn execute() -> Result<()> {
    let config = GraphConfig::from_env_or_default();
    let client = GraphClient::connect(&config).await?;

    let records = fetch_movies(&client).await?;

    write_json(Path::new(JSON_PATH), &records)?;
    write_csv(Path::new(CSV_PATH), &records)?;

    println!(
        "{} {} movie(s) to {} and {}",
        "Exported".green().bold(),
        records.len().to_string().bold(),
        JSON_PATH.cyan(),
        CSV_PATH.cyan()
    );

    // Observational only; the export files are already on disk.
    let summary = fetch_summary(&client).await?;
    output::print_summary(&summary);

    Ok(())
}
