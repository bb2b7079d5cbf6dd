//! Configuration for the screening pipeline.

use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Configuration for the screening pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path to the serialized classifier artifact
    pub artifact_path: PathBuf,
    /// Path to the static reference dataset used for population means
    pub reference_path: PathBuf,
    /// Path to the doctor directory table
    pub directory_path: PathBuf,
    /// Path backing the record table
    pub record_table_path: PathBuf,
    /// Path backing the validation table
    pub validation_table_path: PathBuf,
    /// Rows sampled when inferring a CSV schema
    pub infer_rows: usize,
    /// Accepted measurement ranges for numeric answers
    pub limits: MeasurementLimits,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from("model.json"),
            reference_path: PathBuf::from("CVD_cleaned.csv"),
            directory_path: PathBuf::from("Cardiologist_List.csv"),
            record_table_path: PathBuf::from("record.csv"),
            validation_table_path: PathBuf::from("validation.csv"),
            infer_rows: 100,
            limits: MeasurementLimits::default(),
        }
    }
}

/// Accepted ranges for numeric survey answers
///
/// A resolved value outside its range rejects the whole submission
/// before anything is encoded or written.
#[derive(Debug, Clone)]
pub struct MeasurementLimits {
    /// Height in centimeters
    pub height_cm: RangeInclusive<f64>,
    /// Weight in kilograms
    pub weight_kg: RangeInclusive<f64>,
    /// Days with alcohol in the last 30 days
    pub alcohol_days: RangeInclusive<u8>,
    /// Per-period food consumption count
    pub consumption_count: RangeInclusive<u8>,
}

impl Default for MeasurementLimits {
    fn default() -> Self {
        Self {
            height_cm: 25.0..=300.0,
            weight_kg: 25.0..=300.0,
            alcohol_days: 0..=30,
            consumption_count: 0..=5,
        }
    }
}
