//! JSON export writer.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::ExportResult;

/// Write the full record set as a pretty-printed JSON array.
///
/// The file is truncated and rewritten on every call. List-valued
/// fields stay native JSON arrays; an empty record set produces `[]`.
pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> ExportResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;

    tracing::info!(path = %path.display(), records = records.len(), "wrote JSON export");
    Ok(())
}
