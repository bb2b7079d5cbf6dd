//! Persisted record model
//!
//! A [`Record`] pairs a resolved survey response with its verdict and
//! knows how to render itself as one row of the append-only record
//! table. Row order and column names mirror the remote table layout.

use crate::models::survey::SurveyResponse;
use crate::verdict::Verdict;

/// Column layout of the record table: respondent identity, the eighteen
/// feature columns in contract order, then the verdict label.
pub const RECORD_COLUMNS: [&str; 20] = [
    "Name",
    "General_Health",
    "Checkup",
    "Exercise",
    "Skin_Cancer",
    "Other_Cancer",
    "Depression",
    "Diabetes",
    "Arthritis",
    "Sex",
    "Age_Category",
    "Height_(cm)",
    "Weight_(kg)",
    "BMI",
    "Smoking_History",
    "Alcohol_Consumption",
    "Fruit_Consumption",
    "Green_Vegetables_Consumption",
    "FriedPotato_Consumption",
    "Heart_Disease",
];

/// A survey response resolved to a verdict, ready for persistence
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The resolved answers
    pub response: SurveyResponse,
    /// The verdict derived from the classifier output
    pub verdict: Verdict,
}

impl Record {
    /// Pair a response with its verdict
    #[must_use]
    pub fn new(response: SurveyResponse, verdict: Verdict) -> Self {
        Self { response, verdict }
    }

    /// Render the record as one table row, in [`RECORD_COLUMNS`] order
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        let r = &self.response;
        vec![
            r.name.clone(),
            r.general_health.as_str().to_string(),
            r.checkup.as_str().to_string(),
            r.exercise.as_str().to_string(),
            r.skin_cancer.as_str().to_string(),
            r.other_cancer.as_str().to_string(),
            r.depression.as_str().to_string(),
            r.diabetes.as_str().to_string(),
            r.arthritis.as_str().to_string(),
            r.sex.as_str().to_string(),
            r.age_category.as_str().to_string(),
            format_number(r.height_cm),
            format_number(r.weight_kg),
            format_number(r.bmi),
            r.smoking_history.as_str().to_string(),
            r.alcohol_consumption.to_string(),
            r.fruit_consumption.to_string(),
            r.green_vegetables_consumption.to_string(),
            r.fried_potato_consumption.to_string(),
            self.verdict.heart_disease_label().to_string(),
        ]
    }
}

/// Render a numeric value without a spurious trailing `.0`
///
/// Whole numbers print as integers so the persisted rows look like the
/// values the respondent actually typed.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
