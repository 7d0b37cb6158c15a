//! # GEX Export
//!
//! Dual-format serialization for exported record sets: a pretty-printed
//! JSON array plus a CSV table, written side by side with identical row
//! counts.

pub mod csv;
pub mod error;
pub mod json;

pub use crate::csv::{CsvRecord, write_csv};
pub use error::{ExportError, ExportResult};
pub use json::write_json;
