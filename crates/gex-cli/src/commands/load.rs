//! Movie graph loader pipeline.
//!
//! parse CSV → connect → wipe and reload graph → print graph summary.
//! The input CSV carries actors as a `|`-separated field, the same
//! encoding the movie export writes back out.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Deserialize;

use gex_graph::queries::movies::ACTOR_SEPARATOR;
use gex_graph::{fetch_summary, load_movies, GraphClient, GraphConfig, MovieSeed};

use crate::output;

/// One row as it appears in the movies CSV. Deserialization fails if a
/// required column is missing from the header.
#[derive(Debug, Deserialize)]
struct MovieCsvRow {
    movie_id: String,
    title: String,
    director: String,
    genre: String,
    actors: String,
    description: String,
}

fn split_actors(raw: &str) -> Vec<String> {
    raw.split(ACTOR_SEPARATOR)
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and validate the movies CSV.
pub fn read_movies_csv(path: &Path) -> Result<Vec<MovieSeed>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open movies CSV: {}", path.display()))?;

    let mut movies = Vec::new();
    for row in reader.deserialize() {
        let row: MovieCsvRow = row.context("Malformed movies CSV row")?;
        movies.push(MovieSeed {
            movie_id: row.movie_id,
            title: row.title,
            director: row.director,
            genre: row.genre,
            actors: split_actors(&row.actors),
            description: row.description,
        });
    }

    Ok(movies)
}

pub async fn execute(file: PathBuf) -> Result<()> {
    let movies = read_movies_csv(&file)?;
    println!(
        "{} {} record(s) from {}",
        "Parsed".bold(),
        movies.len().to_string().bold(),
        file.display().to_string().cyan()
    );

    let config = GraphConfig::from_env_or_default();
    let client = GraphClient::connect(&config).await?;

    load_movies(&client, &movies).await?;
    println!("{}", "Load complete.".green().bold());

    let summary = fetch_summary(&client).await?;
    output::print_summary(&summary);

    Ok(())
}
