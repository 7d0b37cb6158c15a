//! Centralized error types for export writers.

use thiserror::Error;

/// Main error type for export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
