//! Clinician validation entries
//!
//! A clinician may later record their own opinion against a reported
//! verdict. The entry is created only when both a clinician name and an
//! opinion are supplied, tagged Correct or Wrong by comparison with the
//! stored verdict, and appended to the validation table. Entries are
//! never retracted or edited once appended.

use crate::verdict::Verdict;

/// Column layout of the validation table
pub const VALIDATION_COLUMNS: [&str; 5] = [
    "Patient Name",
    "Model output",
    "Doctor output",
    "Validation",
    "Doctor Name",
];

/// Agreement between the classifier and the clinician
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationTag {
    /// Clinician agreed with the verdict
    Correct,
    /// Clinician disagreed with the verdict
    Wrong,
}

impl ValidationTag {
    /// Canonical wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "Correct",
            Self::Wrong => "Wrong",
        }
    }
}

/// One clinician opinion recorded against a prior verdict
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationEntry {
    /// Name of the patient the verdict was issued for
    pub patient_name: String,
    /// The verdict the classifier produced
    pub model_output: Verdict,
    /// The clinician's own opinion
    pub doctor_output: Verdict,
    /// Agreement tag
    pub validation: ValidationTag,
    /// Name of the validating clinician
    pub doctor_name: String,
}

impl ValidationEntry {
    /// Build an entry, deriving the agreement tag
    #[must_use]
    pub fn new(
        patient_name: String,
        model_output: Verdict,
        doctor_output: Verdict,
        doctor_name: String,
    ) -> Self {
        let validation = if model_output == doctor_output {
            ValidationTag::Correct
        } else {
            ValidationTag::Wrong
        };
        Self {
            patient_name,
            model_output,
            doctor_output,
            validation,
            doctor_name,
        }
    }

    /// Render the entry as one table row, in [`VALIDATION_COLUMNS`] order
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.patient_name.clone(),
            self.model_output.risk().to_string(),
            self.doctor_output.risk().to_string(),
            self.validation.as_str().to_string(),
            self.doctor_name.clone(),
        ]
    }
}
