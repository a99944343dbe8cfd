//! Flat record-store I/O
//!
//! Both durable stores are headerless CSV files. Reads surface each row
//! individually so one unreadable row never aborts a scan; full rewrites
//! go through a temp file and an atomic rename so a failed rewrite cannot
//! truncate the store.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use csv::StringRecord;
use tracing::warn;

use crate::error::{FintrackError, FintrackResult};

/// Read all raw rows, returning an empty list if the file doesn't exist
///
/// Rows the CSV layer itself cannot decode (invalid UTF-8 and the like)
/// are skipped with a warning. Field-count and field-value validation is
/// the caller's job; rows of any width are surfaced as-is.
pub fn read_raw_records(path: &Path) -> FintrackResult<Vec<StringRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| FintrackError::storage(path, e))?;

    let mut records = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Skipping an unreadable row in {}: {}", path.display(), e);
            }
        }
    }

    Ok(records)
}

/// Append a single row, creating the file (and parent directory) if needed
pub fn append_record<I, T>(path: &Path, fields: I) -> FintrackResult<()>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| FintrackError::storage(path, e))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FintrackError::storage(path, e))?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(fields)
        .map_err(|e| FintrackError::storage(path, e))?;
    writer
        .flush()
        .map_err(|e| FintrackError::storage(path, e))?;

    Ok(())
}

/// Rewrite the whole store atomically (write to temp, sync, then rename)
///
/// Either the new contents land completely or the old file is untouched.
pub fn rewrite_records_atomic(path: &Path, records: &[StringRecord]) -> FintrackResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| FintrackError::storage(path, e))?;
    }

    // Temp file in the same directory, required for the rename to be atomic
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path).map_err(|e| FintrackError::storage(path, e))?;

    // flexible: preserved rows may not all have the same width
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(file);
    for record in records {
        writer
            .write_record(record)
            .map_err(|e| FintrackError::storage(path, e))?;
    }
    writer
        .flush()
        .map_err(|e| FintrackError::storage(path, e))?;

    let file = writer
        .into_inner()
        .map_err(|e| FintrackError::storage(path, e))?;
    file.sync_all()
        .map_err(|e| FintrackError::storage(path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FintrackError::storage(path, e)
    })?;

    Ok(())
}
