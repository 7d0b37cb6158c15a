//! Neo4j connection client.

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Configuration for connecting to Neo4j.
///
/// Resolved once at startup from `NEO4J_URI`, `NEO4J_USER` and
/// `NEO4J_PASSWORD`; there is no hot reload.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "password".to_string(),
        }
    }
}

impl GraphConfig {
    /// Read the connection settings from the environment, failing if
    /// any of the three variables is unset.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            uri: require_var("NEO4J_URI")?,
            user: require_var("NEO4J_USER")?,
            password: require_var("NEO4J_PASSWORD")?,
        })
    }

    /// Read the connection settings from the environment, filling in
    /// the local-development defaults for anything unset.
    pub fn from_env_or_default() -> Self {
        let defaults = Self::default();
        Self {
            uri: std::env::var("NEO4J_URI").unwrap_or(defaults.uri),
            user: std::env::var("NEO4J_USER").unwrap_or(defaults.user),
            password: std::env::var("NEO4J_PASSWORD").unwrap_or(defaults.password),
        }
    }
}

fn require_var(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("Environment variable {} is not set", name))
}

/// Client for read-only Neo4j export queries.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// Note: neo4rs uses a lazy deadpool — `Graph::connect` only creates the pool
    /// object and does NOT establish a real bolt connection yet.  We run a cheap
    /// `RETURN 1` ping immediately so an unreachable or misconfigured server
    /// fails here, before any output file has been touched.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db("neo4j")
            .max_connections(4)  // Keep pool small for CLI use-cases
            .fetch_size(500)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .context("Failed to create Neo4j connection pool")?;

        // Ping to force an actual TCP+bolt handshake.
        graph.run(Query::new("RETURN 1".to_string())).await
            .context("Neo4j is not responding to queries")?;

        tracing::debug!(uri = %config.uri, "connected to Neo4j");

        Ok(Self { graph })
    }

    /// Execute a Cypher query that returns no results.
    pub async fn execute(&self, query: Query) -> Result<()> {
        self.graph.run(query).await.context("Neo4j query execution failed")?;
        Ok(())
    }

    /// Execute a Cypher query and return all result rows.
    pub async fn query(&self, query: Query) -> Result<Vec<neo4rs::Row>> {
        let mut result = self.graph.execute(query).await
            .context("Neo4j query failed")?;

        let mut rows = Vec::new();
        while let Some(row) = result.next().await.context("Neo4j result stream failed")? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a Cypher query and return a single scalar value.
    pub async fn query_scalar<T: DeserializeOwned>(&self, query: Query, field: &str) -> Result<Option<T>> {
        let rows = self.query(query).await?;
        if let Some(row) = rows.into_iter().next() {
            let val: T = row.get(field)
                .map_err(|e| anyhow::anyhow!("Failed to get field '{}': {:?}", field, e))?;
            Ok(Some(val))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraphConfig::default();
        assert_eq!(config.uri, "bolt://localhost:7687");
        assert_eq!(config.user, "neo4j");
        assert_eq!(config.password, "password");
    }

    #[test]
    fn test_env_resolution() {
        // Sequential on purpose: both cases touch the same process-wide vars.
        std::env::remove_var("NEO4J_URI");
        std::env::remove_var("NEO4J_USER");
        std::env::remove_var("NEO4J_PASSWORD");

        let err = GraphConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("NEO4J_URI"));

        let config = GraphConfig::from_env_or_default();
        assert_eq!(config.uri, "bolt://localhost:7687");

        std::env::set_var("NEO4J_URI", "bolt://graph.internal:7687");
        std::env::set_var("NEO4J_USER", "exporter");
        std::env::set_var("NEO4J_PASSWORD", "s3cret");

        let config = GraphConfig::from_env().unwrap();
        assert_eq!(config.uri, "bolt://graph.internal:7687");
        assert_eq!(config.user, "exporter");
        assert_eq!(config.password, "s3cret");

        std::env::remove_var("NEO4J_URI");
        std::env::remove_var("NEO4J_USER");
        std::env::remove_var("NEO4J_PASSWORD");
    }

    #[tokio::test]
    async fn test_connect_to_unreachable_server_fails() {
        // Port 1 refuses immediately; the connect-time ping must turn
        // that into an error instead of deferring it to the first query.
        let config = GraphConfig {
            uri: "bolt://127.0.0.1:1".to_string(),
            ..GraphConfig::default()
        };

        assert!(GraphClient::connect(&config).await.is_err());
    }
}
