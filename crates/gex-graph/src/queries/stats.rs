//! Aggregate counts for the movie pipeline's console summary.

use anyhow::Result;
use neo4rs::Query;

use crate::GraphClient;

/// Population counts over the movie graph.
#[derive(Debug, Clone)]
pub struct GraphSummary {
    pub movies: i64,
    pub actors: i64,
    pub directors: i64,
    pub acted_in: i64,
    pub directed: i64,
}

/// Count the five entity/relationship populations.
///
/// One count query per population; a label with no nodes simply counts
/// to zero.
pub async fn fetch_summary(client: &GraphClient) -> Result<GraphSummary> {
    Ok(GraphSummary {
        movies: count(client, "MATCH (m:Movie) RETURN count(m) AS count").await?,
        actors: count(client, "MATCH (a:Actor) RETURN count(a) AS count").await?,
        directors: count(client, "MATCH (d:Director) RETURN count(d) AS count").await?,
        acted_in: count(client, "MATCH ()-[r:ACTED_IN]->() RETURN count(r) AS count").await?,
        directed: count(client, "MATCH ()-[r:DIRECTED]->() RETURN count(r) AS count").await?,
    })
}

async fn count(client: &GraphClient, cypher: &str) -> Result<i64> {
    Ok(client
        .query_scalar(Query::new(cypher.to_string()), "count")
        .await?
        .unwrap_or(0))
}
