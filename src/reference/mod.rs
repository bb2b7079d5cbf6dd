//! Population statistics from the static reference dataset
//!
//! The reference dataset is read once at startup and reduced to the
//! per-column means the explanation builder compares against. The
//! resulting table is read-only for the lifetime of the process; no
//! submission ever mutates it.

use std::path::Path;

use arrow::array::{Array, Float64Array, Int64Array};
use arrow::record_batch::RecordBatch;

use crate::error::{Result, ScreenError};
use crate::utils::read_csv_batches;

/// The consumption columns compared against population means
pub const CONSUMPTION_COLUMNS: [&str; 4] = [
    "Alcohol_Consumption",
    "Fruit_Consumption",
    "Green_Vegetables_Consumption",
    "FriedPotato_Consumption",
];

/// Immutable per-column mean table
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationMeans {
    entries: Vec<(String, f64)>,
}

impl PopulationMeans {
    /// Build directly from (column, mean) pairs
    #[must_use]
    pub fn from_pairs(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    /// Mean for a column, if present
    #[must_use]
    pub fn get(&self, column: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, mean)| *mean)
    }

    /// Compute means for the given columns across record batches
    ///
    /// Nulls are skipped; a column that is entirely null or absent from
    /// every batch is an error, since a missing mean would silently
    /// break every explanation later.
    pub fn from_batches(batches: &[RecordBatch], columns: &[&str]) -> Result<Self> {
        let entries = columns
            .iter()
            .map(|column| column_mean(batches, column).map(|mean| ((*column).to_string(), mean)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }
}

fn column_mean(batches: &[RecordBatch], column: &str) -> Result<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;

    for batch in batches {
        let Some(array) = batch.column_by_name(column) else {
            return Err(ScreenError::Table(format!(
                "column {column} not found in reference dataset"
            )));
        };
        if let Some(floats) = array.as_any().downcast_ref::<Float64Array>() {
            sum += floats.iter().flatten().sum::<f64>();
            count += floats.len() - floats.null_count();
        } else if let Some(ints) = array.as_any().downcast_ref::<Int64Array>() {
            sum += ints.iter().flatten().map(|v| v as f64).sum::<f64>();
            count += ints.len() - ints.null_count();
        } else {
            return Err(ScreenError::Table(format!(
                "column {column} in reference dataset is not numeric"
            )));
        }
    }

    if count == 0 {
        return Err(ScreenError::Table(format!(
            "column {column} in reference dataset has no values"
        )));
    }
    Ok(sum / count as f64)
}

/// Load the reference dataset and compute the consumption-column means
pub fn load_population_means(path: &Path, infer_rows: usize) -> Result<PopulationMeans> {
    let batches = read_csv_batches(path, infer_rows)?;
    PopulationMeans::from_batches(&batches, &CONSUMPTION_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use arrow::array::{ArrayRef, Float64Array, Int64Array};
    use arrow::datatypes::{DataType, Field, Schema};

    fn batch(alcohol: Vec<i64>, fruit: Vec<f64>) -> RecordBatch {
        let schema = Schema::new(vec![
            Field::new("Alcohol_Consumption", DataType::Int64, false),
            Field::new("Fruit_Consumption", DataType::Float64, false),
        ]);
        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(Int64Array::from(alcohol)) as ArrayRef,
                Arc::new(Float64Array::from(fruit)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn means_accumulate_across_batches() {
        let batches = vec![
            batch(vec![0, 10], vec![30.0, 60.0]),
            batch(vec![2], vec![90.0]),
        ];
        let means = PopulationMeans::from_batches(
            &batches,
            &["Alcohol_Consumption", "Fruit_Consumption"],
        )
        .unwrap();
        assert_eq!(means.get("Alcohol_Consumption"), Some(4.0));
        assert_eq!(means.get("Fruit_Consumption"), Some(60.0));
        assert_eq!(means.get("BMI"), None);
    }

    #[test]
    fn missing_column_is_an_error() {
        let batches = vec![batch(vec![1], vec![2.0])];
        assert!(PopulationMeans::from_batches(&batches, &["Green_Vegetables_Consumption"]).is_err());
    }
}
