//! # GEX Graph
//!
//! Neo4j connectivity for the gex export tool.
//!
//! Provides the connection client, the fixed read queries behind the
//! drug and movie export pipelines, and the movie graph loader.

pub mod client;
pub mod loader;
pub mod queries;

pub use client::{GraphClient, GraphConfig};
pub use loader::{MovieSeed, load_movies};
pub use queries::drugs::{DrugRecord, DrugRelationship, fetch_drugs};
pub use queries::movies::{MovieRecord, fetch_movies};
pub use queries::stats::{GraphSummary, fetch_summary};
