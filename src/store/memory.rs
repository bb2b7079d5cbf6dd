//! In-memory table store
//!
//! Stand-in for the remote table in tests and demos. Also supports a
//! failing mode so persistence outages can be exercised without a real
//! backend.

use crate::error::{Result, ScreenError};
use crate::store::TableStore;

/// Table held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryTableStore {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    fail_writes: bool,
}

impl MemoryTableStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose writes always fail
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// The header from the last write
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TableStore for MemoryTableStore {
    fn read_all(&self) -> Result<Vec<Vec<String>>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| !row.iter().all(|field| field.is_empty()))
            .cloned()
            .collect())
    }

    fn write_all(&mut self, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
        if self.fail_writes {
            return Err(ScreenError::Table("memory store is in failing mode".to_string()));
        }
        self.header = header.iter().map(|h| (*h).to_string()).collect();
        self.rows = rows.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_empty_rows_are_dropped_on_read() {
        let mut store = MemoryTableStore::new();
        store
            .write_all(
                &["a", "b"],
                &[
                    vec!["1".to_string(), "2".to_string()],
                    vec![String::new(), String::new()],
                    vec!["3".to_string(), String::new()],
                ],
            )
            .unwrap();
        let rows = store.read_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "3");
    }
}
