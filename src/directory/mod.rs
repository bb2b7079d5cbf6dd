//! Doctor directory lookup
//!
//! A read-only table of cardiologists, loaded once and filtered by
//! state on demand. Filtering builds a boolean mask over the state
//! column and applies Arrow's filter kernel, then converts the
//! surviving rows to typed entries.

use std::path::Path;

use arrow::array::{Array, BooleanArray};
use arrow::compute::filter_record_batch;
use arrow::record_batch::RecordBatch;
use itertools::Itertools;

use crate::error::Result;
use crate::utils::{numeric_value, read_csv_batches, string_column};

/// One cardiologist listing
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorEntry {
    /// State the practice is in
    pub state: String,
    /// Doctor name
    pub name: String,
    /// Street address
    pub address: String,
    /// Phone number
    pub phone: String,
    /// Email address
    pub email: String,
    /// Practice website
    pub url: String,
    /// City
    pub city: String,
    /// Practice latitude, if geocoded
    pub latitude: Option<f64>,
    /// Practice longitude, if geocoded
    pub longitude: Option<f64>,
}

impl DoctorEntry {
    /// Convert every row of a batch into entries
    pub fn from_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        let states = string_column(batch, "State")?;
        let names = string_column(batch, "Doctor Name")?;
        let addresses = string_column(batch, "Address")?;
        let phones = string_column(batch, "Phone")?;
        let emails = string_column(batch, "Email")?;
        let urls = string_column(batch, "URL")?;
        let cities = string_column(batch, "City")?;

        (0..batch.num_rows())
            .map(|row| {
                Ok(Self {
                    state: states.value(row).to_string(),
                    name: names.value(row).to_string(),
                    address: addresses.value(row).to_string(),
                    phone: phones.value(row).to_string(),
                    email: emails.value(row).to_string(),
                    url: urls.value(row).to_string(),
                    city: cities.value(row).to_string(),
                    latitude: numeric_value(batch, "lat", row)?,
                    longitude: numeric_value(batch, "lng", row)?,
                })
            })
            .collect()
    }
}

/// Read-only directory of cardiologists keyed by state
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    batches: Vec<RecordBatch>,
}

impl DoctorDirectory {
    /// Load the directory table from a delimited file
    pub fn load(path: &Path, infer_rows: usize) -> Result<Self> {
        let batches = read_csv_batches(path, infer_rows)?;
        Ok(Self { batches })
    }

    /// Build from already-loaded batches
    #[must_use]
    pub fn from_batches(batches: Vec<RecordBatch>) -> Self {
        Self { batches }
    }

    /// Number of listings
    #[must_use]
    pub fn len(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }

    /// Whether the directory holds no listings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct states, in first-seen order
    pub fn states(&self) -> Result<Vec<String>> {
        let mut states = Vec::new();
        for batch in &self.batches {
            let column = string_column(batch, "State")?;
            states.extend(
                (0..column.len())
                    .filter(|row| !column.is_null(*row))
                    .map(|row| column.value(row).to_string()),
            );
        }
        Ok(states.into_iter().unique().collect())
    }

    /// All listings in a state
    pub fn lookup_state(&self, state: &str) -> Result<Vec<DoctorEntry>> {
        let mut entries = Vec::new();
        for batch in &self.batches {
            let column = string_column(batch, "State")?;
            let mask = BooleanArray::from(
                (0..column.len())
                    .map(|row| !column.is_null(row) && column.value(row) == state)
                    .collect_vec(),
            );
            let filtered = filter_record_batch(batch, &mask)?;
            if filtered.num_rows() > 0 {
                entries.extend(DoctorEntry::from_batch(&filtered)?);
            }
        }
        log::debug!("Found {} doctors in {state}", entries.len());
        Ok(entries)
    }
}
