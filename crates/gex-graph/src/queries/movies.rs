//! Movie export query and record shape.

use anyhow::Result;
use gex_export::CsvRecord;
use neo4rs::Query;
use serde::{Deserialize, Serialize};

use crate::GraphClient;

/// Separator for the flattened actor list in the CSV output.
pub const ACTOR_SEPARATOR: &str = "|";

/// One exported movie.
///
/// `director` comes from a to-one relationship and is null when the
/// movie has none; `actors` is the de-duplicated cast list in whatever
/// order the database returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub movie_id: String,
    pub title: String,
    pub genre: String,
    pub description: String,
    pub director: Option<String>,
    pub actors: Vec<String>,
}

impl CsvRecord for MovieRecord {
    const HEADERS: &'static [&'static str] =
        &["movie_id", "title", "genre", "description", "director", "actors"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.movie_id.clone(),
            self.title.clone(),
            self.genre.clone(),
            self.description.clone(),
            self.director.clone().unwrap_or_default(),
            self.actors.join(ACTOR_SEPARATOR),
        ]
    }
}

const MOVIE_EXPORT_QUERY: &str = "\
    MATCH (m:Movie)
    OPTIONAL MATCH (d:Director)-[:DIRECTED]->(m)
    OPTIONAL MATCH (a:Actor)-[:ACTED_IN]->(m)
    WITH m, d.name AS director, collect(DISTINCT a.name) AS actors
    RETURN m.movie_id AS movie_id,
           m.title AS title,
           m.genre AS genre,
           m.description AS description,
           director,
           actors";

/// Fetch every movie with its director and distinct cast.
pub async fn fetch_movies(client: &GraphClient) -> Result<Vec<MovieRecord>> {
    let rows = client.query(Query::new(MOVIE_EXPORT_QUERY.to_string())).await?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        records.push(MovieRecord {
            movie_id: row.get("movie_id").unwrap_or_default(),
            title: row.get("title").unwrap_or_default(),
            genre: row.get("genre").unwrap_or_default(),
            description: row.get("description").unwrap_or_default(),
            director: row.get("director").unwrap_or_default(),
            actors: row.get("actors").unwrap_or_default(),
        });
    }

    tracing::info!(count = records.len(), "fetched movie records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MovieRecord {
        MovieRecord {
            movie_id: "M001".to_string(),
            title: "The Matrix".to_string(),
            genre: "Sci-Fi".to_string(),
            description: "A computer programmer discovers a hidden world.".to_string(),
            director: Some("Wachowski Sisters".to_string()),
            actors: vec![
                "Keanu Reeves".to_string(),
                "Laurence Fishburne".to_string(),
                "Carrie-Anne Moss".to_string(),
            ],
        }
    }

    #[test]
    fn test_csv_row_order_matches_headers() {
        let row = sample().to_row();
        assert_eq!(row.len(), MovieRecord::HEADERS.len());
        assert_eq!(row[0], "M001");
        assert_eq!(row[1], "The Matrix");
        assert_eq!(row[4], "Wachowski Sisters");
    }

    #[test]
    fn test_actors_joined_with_pipe_in_csv_order() {
        let record = sample();
        let row = record.to_row();
        assert_eq!(row[5], "Keanu Reeves|Laurence Fishburne|Carrie-Anne Moss");
        assert_eq!(
            row[5].split(ACTOR_SEPARATOR).collect::<Vec<_>>(),
            record.actors.iter().map(String::as_str).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_missing_director_is_null_in_json_and_empty_in_csv() {
        let record = MovieRecord { director: None, ..sample() };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["director"], serde_json::Value::Null);

        assert_eq!(record.to_row()[4], "");
    }

    #[test]
    fn test_empty_cast_renders_as_empty_field() {
        let record = MovieRecord { actors: vec![], ..sample() };
        assert_eq!(record.to_row()[5], "");
    }
}
