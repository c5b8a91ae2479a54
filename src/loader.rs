//! CSV resource loading.
//!
//! Reads the product CSV into `RawRow`s with dynamically typed cells.
//! Header names are kept exactly as written, surrounding whitespace
//! included, because they are matched byte-for-byte downstream.

use crate::constants::columns;
use crate::error::{NormalizerError, Result};
use crate::models::{RawRow, RawValue};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tokio::task;
use tracing::{debug, info, warn};

/// Read rows from any CSV byte source; `source` names it in errors
pub fn read_rows_from_reader<R: Read>(reader: R, source: &Path) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| NormalizerError::csv(source, e))?
        .clone();

    let missing: Vec<&str> = columns::EXPECTED
        .iter()
        .copied()
        .filter(|expected| !headers.iter().any(|h| h == *expected))
        .collect();
    if !missing.is_empty() {
        warn!(
            "{} is missing expected columns: {}",
            source.display(),
            missing
                .iter()
                .map(|c| format!("'{}'", c))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| NormalizerError::csv(source, e))?;

        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header, RawValue::infer(cell)))
            .collect();
        rows.push(row);
    }

    debug!("Read {} rows from {}", rows.len(), source.display());
    Ok(rows)
}

/// Read rows from a CSV file on disk
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    if !path.exists() {
        return Err(NormalizerError::ResourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| NormalizerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    read_rows_from_reader(file, path)
}

/// Read rows from a CSV file on a blocking task
pub async fn load_rows(path: impl Into<PathBuf>) -> Result<Vec<RawRow>> {
    let path = path.into();
    info!("Loading electrolyte data from {}", path.display());

    let path_for_task = path.clone();
    task::spawn_blocking(move || read_rows(&path_for_task))
        .await
        .map_err(|e| NormalizerError::TaskFailed {
            reason: format!("reading {}: {}", path.display(), e),
        })?
}
