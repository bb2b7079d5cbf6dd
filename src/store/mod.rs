//! Append-only table stores
//!
//! The remote spreadsheet exposes no row-append primitive, only a full
//! read and a full rewrite, so appending is read-modify-write: the
//! current table is read whole, the new row concatenated last, and the
//! whole table written back. Concurrent writers racing on the same
//! table resolve last-writer-wins; callers needing stronger guarantees
//! must serialize writes themselves.
//!
//! The record table and the validation table are two independent store
//! instances and are never conflated.

pub mod codec;
pub mod csv;
pub mod memory;

pub use csv::CsvTableStore;
pub use memory::MemoryTableStore;

use crate::error::{Result, ScreenError};
use crate::models::record::{RECORD_COLUMNS, Record};
use crate::validation::{VALIDATION_COLUMNS, ValidationEntry};

/// A full-read / full-rewrite table
pub trait TableStore {
    /// All data rows, in stored order, minus fully-empty rows
    fn read_all(&self) -> Result<Vec<Vec<String>>>;

    /// Replace the whole table with a header and the given rows
    fn write_all(&mut self, header: &[&str], rows: &[Vec<String>]) -> Result<()>;
}

/// Append one row, preserving the order of existing rows
///
/// Returns the new row count. Any underlying failure is reported as
/// `PersistFailure` so the boundary can distinguish a storage outage
/// from a bad form entry.
pub fn append_row(
    store: &mut dyn TableStore,
    header: &[&str],
    row: Vec<String>,
) -> Result<usize> {
    let mut rows = store.read_all().map_err(ScreenError::persist)?;
    rows.push(row);
    store.write_all(header, &rows).map_err(ScreenError::persist)?;
    Ok(rows.len())
}

/// Append a completed record to the record table
pub fn append_record(store: &mut dyn TableStore, record: &Record) -> Result<usize> {
    append_row(store, &RECORD_COLUMNS, record.to_row())
}

/// Append a clinician validation to the validation table
pub fn append_validation(store: &mut dyn TableStore, entry: &ValidationEntry) -> Result<usize> {
    append_row(store, &VALIDATION_COLUMNS, entry.to_row())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_existing_row_order() {
        let mut store = MemoryTableStore::default();
        for i in 0..3 {
            append_row(&mut store, &["a", "b"], vec![format!("r{i}"), i.to_string()]).unwrap();
        }
        let before = store.read_all().unwrap();

        let count = append_row(
            &mut store,
            &["a", "b"],
            vec!["new".to_string(), "9".to_string()],
        )
        .unwrap();
        assert_eq!(count, 4);

        let after = store.read_all().unwrap();
        assert_eq!(&after[..3], &before[..]);
        assert_eq!(after[3], vec!["new".to_string(), "9".to_string()]);
    }

    #[test]
    fn failed_write_reports_persist_failure() {
        let mut store = MemoryTableStore::failing();
        let err = append_row(&mut store, &["a"], vec!["x".to_string()]).unwrap_err();
        assert!(matches!(err, ScreenError::PersistFailure(_)));
    }
}
