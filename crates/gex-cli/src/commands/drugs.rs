//! Drug export pipeline.
//!
//! connect → query → write JSON → write CSV. Connection parameters
//! have no fallback here: all three NEO4J_* variables must be set.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use gex_export::{write_csv, write_json};
use gex_graph::{fetch_drugs, GraphClient, GraphConfig};

const JSON_PATH: &str = "drug_data.json";
const CSV_PATH: &str = "drug_data.csv";

pub async fn execute() -> Result<()> {
    let config = GraphConfig::from_env()?;
    let client = GraphClient::connect(&config).await?;

    let records = fetch_drugs(&client).await?;

    write_json(Path::new(JSON_PATH), &records)?;
    write_csv(Path::new(CSV_PATH), &records)?;

    println!(
        "{} {} drug(s) to {} and {}",
        "Exported".green().bold(),
        records.len().to_string().bold(),
        JSON_PATH.cyan(),
        CSV_PATH.cyan()
    );

    Ok(())
}
