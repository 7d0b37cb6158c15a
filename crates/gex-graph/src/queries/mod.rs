//! Fixed read queries for the export pipelines.
//!
//! Each pipeline issues exactly one export query; the movie pipeline
//! additionally runs the aggregate counts behind the console summary.

pub mod drugs;
pub mod movies;
pub mod stats;
