//! CSV record source.
//!
//! Reads the whole problem file up front; files are expected to be small.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::QuizError;
use crate::model::RawRecord;

/// Open `path` and read every row as a [`RawRecord`].
///
/// The file handle is dropped before returning on every path.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>, QuizError> {
    let file = File::open(path).map_err(|source| QuizError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records_from(file, path)?;
    tracing::debug!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse CSV rows from any reader. `source_path` is only used in errors.
///
/// Parsing is strict: every row must have the same number of fields as the
/// first one, and there is no header row.
pub fn read_records_from<R: Read>(
    reader: R,
    source_path: &Path,
) -> Result<Vec<RawRecord>, QuizError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(reader);

    csv_reader
        .records()
        .map(|row| {
            row.map(|record| record.iter().map(str::to_string).collect())
                .map_err(|source| QuizError::Parse {
                    path: source_path.to_path_buf(),
                    line: source.position().map(|p| p.line()),
                    source,
                })
        })
        .collect()
}
