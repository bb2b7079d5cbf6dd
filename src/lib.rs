//! A Rust library for cardiovascular risk screening: survey answer
//! resolution, ordinal feature encoding, classifier inference, and
//! auditable append-only record keeping.

pub mod config;
pub mod directory;
pub mod encode;
pub mod error;
pub mod export;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod predictor;
pub mod reference;
pub mod store;
pub mod utils;
pub mod validation;
pub mod verdict;

// Re-export the most common types for easier use
// Core types
pub use config::{MeasurementLimits, PipelineConfig};
pub use error::{Result, ScreenError};
pub use models::{Answer, Record, SurveyDraft, SurveyResponse, Vocabulary};

// Encoding and prediction
pub use encode::{FEATURE_COLUMNS, FeatureVector, encode as encode_features};
pub use predictor::{LinearRiskModel, RiskLabel, RiskModel};

// Verdict and explanation
pub use verdict::{Explanation, Verdict, build_explanation};

// Persistence
pub use store::{CsvTableStore, MemoryTableStore, TableStore, append_record, append_validation};

// Orchestration
pub use pipeline::{
    PersistStatus, ScreenContext, SubmissionOutcome, SubmissionState, process_submission,
    record_validation,
};
