//! Utility functions for working with delimited tabular files

use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, Float64Array, Int64Array, StringArray};
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;

use crate::error::{Result, ScreenError};

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file that was operated on
/// * `items` - Number of items processed
pub fn log_operation_complete(operation: &str, path: &Path, items: usize) {
    log::info!("Successfully {} {} items from {}", operation, items, path.display());
}

/// Read a delimited file into Arrow record batches
///
/// The schema is inferred from the first `infer_rows` data rows; the
/// first line is treated as a header.
///
/// # Arguments
/// * `path` - Path to the delimited file
/// * `infer_rows` - Rows sampled for schema inference
///
/// # Returns
/// A vector of `RecordBatch` objects
///
/// # Errors
/// Returns an error if the file cannot be opened or parsed
pub fn read_csv_batches(path: &Path, infer_rows: usize) -> Result<Vec<RecordBatch>> {
    log_operation_start("Reading table", path);

    let mut file = File::open(path).map_err(|e| {
        ScreenError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Failed to open file {}: {}", path.display(), e),
        ))
    })?;

    let format = Format::default().with_header(true);
    let (schema, _) = format.infer_schema(&mut file, Some(infer_rows))?;
    file.rewind()?;

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_format(format)
        .build(file)?;

    let batches = reader.collect::<arrow::error::Result<Vec<_>>>()?;
    let rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
    log_operation_complete("read", path, rows);
    Ok(batches)
}

/// Borrow a named column as a string array
///
/// # Errors
/// Returns an error if the column is absent or not a string column
pub fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray> {
    batch
        .column_by_name(name)
        .ok_or_else(|| ScreenError::Table(format!("column {name} not found")))?
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| ScreenError::Table(format!("column {name} is not a string column")))
}

/// Read a numeric cell as `f64`, accepting integer or float columns
///
/// # Errors
/// Returns an error if the column is absent or non-numeric
pub fn numeric_value(batch: &RecordBatch, name: &str, row: usize) -> Result<Option<f64>> {
    let column = batch
        .column_by_name(name)
        .ok_or_else(|| ScreenError::Table(format!("column {name} not found")))?;

    if let Some(floats) = column.as_any().downcast_ref::<Float64Array>() {
        return Ok((!floats.is_null(row)).then(|| floats.value(row)));
    }
    if let Some(ints) = column.as_any().downcast_ref::<Int64Array>() {
        return Ok((!ints.is_null(row)).then(|| ints.value(row) as f64));
    }
    Err(ScreenError::Table(format!(
        "column {name} is not a numeric column"
    )))
}
