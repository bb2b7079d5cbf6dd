//! File-backed table store
//!
//! Persists a table as a delimited text file, the demo stand-in for the
//! remote spreadsheet. Reads tolerate a missing file (an empty table);
//! writes always rewrite the whole file, header first.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::store::TableStore;
use crate::store::codec::{parse_table, render_line};
use crate::utils::log_operation_complete;

/// Table persisted as a delimited file
#[derive(Debug, Clone)]
pub struct CsvTableStore {
    path: PathBuf,
    delimiter: char,
}

impl CsvTableStore {
    /// Store backed by `path`, comma-delimited
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path, delimiter: ',' }
    }

    /// Override the delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Path backing this store
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TableStore for CsvTableStore {
    fn read_all(&self) -> Result<Vec<Vec<String>>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let mut rows = parse_table(&content, self.delimiter);
        if !rows.is_empty() {
            rows.remove(0); // header
        }
        rows.retain(|row| !row.iter().all(|field| field.is_empty()));
        Ok(rows)
    }

    fn write_all(&mut self, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
        let mut content = String::new();
        content.push_str(&render_line(header, self.delimiter));
        content.push('\n');
        for row in rows {
            content.push_str(&render_line(row, self.delimiter));
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        log_operation_complete("wrote", &self.path, rows.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::append_row;

    fn temp_store(tag: &str) -> CsvTableStore {
        let path = std::env::temp_dir().join(format!(
            "cvd_screen_{tag}_{}.csv",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        CsvTableStore::new(path)
    }

    #[test]
    fn missing_file_reads_as_empty_table() {
        let store = temp_store("missing");
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn append_keeps_prior_rows_byte_identical() {
        let mut store = temp_store("append");
        let header = ["Name", "Note"];
        append_row(
            &mut store,
            &header,
            vec!["Maria".to_string(), "No, pre-diabetes or borderline diabetes".to_string()],
        )
        .unwrap();

        let first_write = fs::read_to_string(store.path()).unwrap();
        let first_rows: Vec<&str> = first_write.lines().collect();

        append_row(&mut store, &header, vec!["Arun".to_string(), "ok".to_string()]).unwrap();

        let second_write = fs::read_to_string(store.path()).unwrap();
        let second_rows: Vec<&str> = second_write.lines().collect();
        assert_eq!(&second_rows[..first_rows.len()], &first_rows[..]);
        assert_eq!(second_rows.len(), first_rows.len() + 1);

        let rows = store.read_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], "No, pre-diabetes or borderline diabetes");

        let _ = fs::remove_file(store.path());
    }
}
