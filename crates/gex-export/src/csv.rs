//! CSV export writer.

use std::path::Path;

use crate::ExportResult;

/// A record that knows its CSV column layout.
///
/// Each pipeline fixes its own column order; list-valued fields decide
/// their own flat rendering in `to_row`.
pub trait CsvRecord {
    /// Header row, in output order.
    const HEADERS: &'static [&'static str];

    /// One CSV row, aligned with `HEADERS`.
    fn to_row(&self) -> Vec<String>;
}

/// Write the full record set as a CSV table: one header row, then one
/// row per record.
///
/// The file is truncated and rewritten on every call. An empty record
/// set produces a header-only file.
pub fn write_csv<T: CsvRecord>(path: &Path, records: &[T]) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(T::HEADERS)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), records = records.len(), "wrote CSV export");
    Ok(())
}
