//! Movie graph ingestion.
//!
//! One-shot loader and counterpart of the movie export pipeline: wipes
//! the graph, recreates the indexes, then creates one `Movie` node per
//! seed and MERGEs its `Director` and `Actor` nodes with their
//! relationships. Director and actor nodes are shared across movies by
//! name.

use anyhow::Result;
use neo4rs::Query;
use serde::Deserialize;

use crate::GraphClient;

/// One movie parsed from the input CSV, ready for loading.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSeed {
    pub movie_id: String,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub actors: Vec<String>,
    pub description: String,
}

const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX movie_id IF NOT EXISTS FOR (m:Movie) ON (m.movie_id)",
    "CREATE INDEX actor_name IF NOT EXISTS FOR (a:Actor) ON (a.name)",
    "CREATE INDEX director_name IF NOT EXISTS FOR (d:Director) ON (d.name)",
];

const CREATE_MOVIE: &str = "\
    CREATE (m:Movie {
        movie_id: $movie_id,
        title: $title,
        genre: $genre,
        description: $description
    })";

const LINK_DIRECTOR: &str = "\
    MERGE (d:Director {name: $director})
    WITH d
    MATCH (m:Movie {movie_id: $movie_id})
    CREATE (d)-[:DIRECTED]->(m)";

const LINK_ACTOR: &str = "\
    MERGE (a:Actor {name: $actor})
    WITH a
    MATCH (m:Movie {movie_id: $movie_id})
    CREATE (a)-[:ACTED_IN]->(m)";

/// Load the movie set into Neo4j, replacing all existing graph content.
pub async fn load_movies(client: &GraphClient, movies: &[MovieSeed]) -> Result<()> {
    client
        .execute(Query::new("MATCH (n) DETACH DELETE n".to_string()))
        .await?;

    for cypher in CREATE_INDEXES {
        client.execute(Query::new(cypher.to_string())).await?;
    }

    for movie in movies {
        client
            .execute(
                Query::new(CREATE_MOVIE.to_string())
                    .param("movie_id", movie.movie_id.as_str())
                    .param("title", movie.title.as_str())
                    .param("genre", movie.genre.as_str())
                    .param("description", movie.description.as_str()),
            )
            .await?;

        client
            .execute(
                Query::new(LINK_DIRECTOR.to_string())
                    .param("director", movie.director.as_str())
                    .param("movie_id", movie.movie_id.as_str()),
            )
            .await?;

        for actor in &movie.actors {
            client
                .execute(
                    Query::new(LINK_ACTOR.to_string())
                        .param("actor", actor.as_str())
                        .param("movie_id", movie.movie_id.as_str()),
                )
                .await?;
        }
    }

    tracing::info!(count = movies.len(), "loaded movies into Neo4j");
    Ok(())
}
