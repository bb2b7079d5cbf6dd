//! Domain models for the screening pipeline
//!
//! This module contains the survey answer types, the category vocabulary
//! that fixes the encoder/classifier contract, and the persisted record.

pub mod record;
pub mod survey;
pub mod types;

pub use record::Record;
pub use survey::{Answer, ConsumptionEntry, HeightInput, SurveyDraft, SurveyResponse};
pub use types::{
    AgeCategory, CheckupRecency, DiabetesStatus, GeneralHealth, Sex, Vocabulary, YesNo,
};
