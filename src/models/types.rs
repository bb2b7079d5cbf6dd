//! Common domain type definitions
//!
//! This module contains the categorical answer types used across the
//! pipeline. Each enum carries the exact wire strings the classifier was
//! trained against; parsing an unlisted string is an error, never a
//! silent fallback, because an arbitrary ordinal would corrupt the
//! feature vector.

use crate::error::{Result, ScreenError};

/// Sex of a respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Female
    Female,
    /// Male
    Male,
}

impl Sex {
    /// Vocabulary column this type encodes into
    pub const COLUMN: &'static str = "Sex";

    /// Canonical wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }

    /// Parse a wire value, rejecting anything outside the accepted list
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Female" => Ok(Self::Female),
            "Male" => Ok(Self::Male),
            other => Err(unrecognized(Self::COLUMN, other)),
        }
    }
}

/// Thirteen fixed age bands used by the screening questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeCategory {
    /// 18-24 years
    Age18To24,
    /// 25-29 years
    Age25To29,
    /// 30-34 years
    Age30To34,
    /// 35-39 years
    Age35To39,
    /// 40-44 years
    Age40To44,
    /// 45-49 years
    Age45To49,
    /// 50-54 years
    Age50To54,
    /// 55-59 years
    Age55To59,
    /// 60-64 years
    Age60To64,
    /// 65-69 years
    Age65To69,
    /// 70-74 years
    Age70To74,
    /// 75-79 years
    Age75To79,
    /// 80 years or older
    Age80Plus,
}

impl AgeCategory {
    /// Vocabulary column this type encodes into
    pub const COLUMN: &'static str = "Age_Category";

    /// All bands in questionnaire order (youngest first)
    pub const ALL: [Self; 13] = [
        Self::Age18To24,
        Self::Age25To29,
        Self::Age30To34,
        Self::Age35To39,
        Self::Age40To44,
        Self::Age45To49,
        Self::Age50To54,
        Self::Age55To59,
        Self::Age60To64,
        Self::Age65To69,
        Self::Age70To74,
        Self::Age75To79,
        Self::Age80Plus,
    ];

    /// Canonical wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Age18To24 => "18-24",
            Self::Age25To29 => "25-29",
            Self::Age30To34 => "30-34",
            Self::Age35To39 => "35-39",
            Self::Age40To44 => "40-44",
            Self::Age45To49 => "45-49",
            Self::Age50To54 => "50-54",
            Self::Age55To59 => "55-59",
            Self::Age60To64 => "60-64",
            Self::Age65To69 => "65-69",
            Self::Age70To74 => "70-74",
            Self::Age75To79 => "75-79",
            Self::Age80Plus => "80+",
        }
    }

    /// Parse a wire value, rejecting anything outside the accepted list
    pub fn parse(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|band| band.as_str() == s)
            .ok_or_else(|| unrecognized(Self::COLUMN, s))
    }
}

/// Self-rated general health, five ordered levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralHealth {
    /// Poor
    Poor,
    /// Fair
    Fair,
    /// Good
    Good,
    /// Very good
    VeryGood,
    /// Excellent
    Excellent,
}

impl GeneralHealth {
    /// Vocabulary column this type encodes into
    pub const COLUMN: &'static str = "General_Health";

    /// Canonical wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Parse a wire value, rejecting anything outside the accepted list
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Poor" => Ok(Self::Poor),
            "Fair" => Ok(Self::Fair),
            "Good" => Ok(Self::Good),
            "Very Good" => Ok(Self::VeryGood),
            "Excellent" => Ok(Self::Excellent),
            other => Err(unrecognized(Self::COLUMN, other)),
        }
    }
}

/// Time since the last routine checkup, five levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckupRecency {
    /// Within the past year
    WithinPastYear,
    /// Within the past 2 years
    WithinPast2Years,
    /// Within the past 5 years
    WithinPast5Years,
    /// 5 or more years ago
    FiveOrMoreYearsAgo,
    /// Never had a routine checkup
    Never,
}

impl CheckupRecency {
    /// Vocabulary column this type encodes into
    pub const COLUMN: &'static str = "Checkup";

    /// Canonical wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WithinPastYear => "Within the past year",
            Self::WithinPast2Years => "Within the past 2 years",
            Self::WithinPast5Years => "Within the past 5 years",
            Self::FiveOrMoreYearsAgo => "5 or more years ago",
            Self::Never => "Never",
        }
    }

    /// Parse a wire value, rejecting anything outside the accepted list
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Within the past year" => Ok(Self::WithinPastYear),
            "Within the past 2 years" => Ok(Self::WithinPast2Years),
            "Within the past 5 years" => Ok(Self::WithinPast5Years),
            "5 or more years ago" => Ok(Self::FiveOrMoreYearsAgo),
            "Never" => Ok(Self::Never),
            other => Err(unrecognized(Self::COLUMN, other)),
        }
    }
}

/// Binary yes/no answer used by the health-history flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    /// No
    No,
    /// Yes
    Yes,
}

impl YesNo {
    /// Canonical wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Yes => "Yes",
        }
    }

    /// Parse a wire value against a named flag column
    pub fn parse(column: &'static str, s: &str) -> Result<Self> {
        match s {
            "No" => Ok(Self::No),
            "Yes" => Ok(Self::Yes),
            other => Err(unrecognized(column, other)),
        }
    }
}

/// Diabetes screening answer, four source categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiabetesStatus {
    /// No diabetes diagnosis
    No,
    /// Diagnosed with diabetes
    Yes,
    /// Pre-diabetes or borderline diabetes
    Borderline,
    /// Diagnosed only during pregnancy
    DuringPregnancyOnly,
}

impl DiabetesStatus {
    /// Vocabulary column this type encodes into
    pub const COLUMN: &'static str = "Diabetes";

    /// Canonical wire value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Yes => "Yes",
            Self::Borderline => "No, pre-diabetes or borderline diabetes",
            Self::DuringPregnancyOnly => "Yes, but female told only during pregnancy",
        }
    }

    /// Parse a wire value, rejecting anything outside the accepted list
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "No" => Ok(Self::No),
            "Yes" => Ok(Self::Yes),
            "No, pre-diabetes or borderline diabetes" => Ok(Self::Borderline),
            "Yes, but female told only during pregnancy" => Ok(Self::DuringPregnancyOnly),
            other => Err(unrecognized(Self::COLUMN, other)),
        }
    }
}

fn unrecognized(field: &'static str, value: &str) -> ScreenError {
    ScreenError::UnrecognizedCategory {
        field,
        value: value.to_string(),
    }
}

/// Fixed, per-column ordered lists of accepted categorical values
///
/// The position of a value within its column list is the ordinal the
/// encoder emits, so the orderings below are part of the classifier
/// contract and must match the ones the model was trained with. They are
/// not alphabetical or questionnaire order; they mirror the training
/// data's category discovery order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    columns: Vec<(&'static str, Vec<&'static str>)>,
}

impl Vocabulary {
    /// The vocabulary the cardiovascular classifier was trained with
    #[must_use]
    pub fn cvd() -> Self {
        Self {
            columns: vec![
                (
                    "General_Health",
                    vec!["Poor", "Very Good", "Good", "Fair", "Excellent"],
                ),
                (
                    "Checkup",
                    vec![
                        "Within the past 2 years",
                        "Within the past year",
                        "5 or more years ago",
                        "Within the past 5 years",
                        "Never",
                    ],
                ),
                ("Exercise", vec!["No", "Yes"]),
                ("Skin_Cancer", vec!["No", "Yes"]),
                ("Other_Cancer", vec!["No", "Yes"]),
                ("Depression", vec!["No", "Yes"]),
                (
                    "Diabetes",
                    vec![
                        "No",
                        "Yes",
                        "No, pre-diabetes or borderline diabetes",
                        "Yes, but female told only during pregnancy",
                    ],
                ),
                ("Arthritis", vec!["Yes", "No"]),
                ("Sex", vec!["Female", "Male"]),
                (
                    "Age_Category",
                    vec![
                        "70-74", "60-64", "75-79", "80+", "65-69", "50-54", "45-49", "18-24",
                        "30-34", "55-59", "35-39", "40-44", "25-29",
                    ],
                ),
                ("Smoking_History", vec!["Yes", "No"]),
            ],
        }
    }

    /// Number of categorical columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the vocabulary holds no columns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Ordered accepted values for a column
    pub fn values(&self, column: &'static str) -> Result<&[&'static str]> {
        self.columns
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, values)| values.as_slice())
            .ok_or_else(|| ScreenError::Table(format!("no vocabulary column named {column}")))
    }

    /// Ordinal of `value` within `column`'s accepted list
    ///
    /// Fails with `UnrecognizedCategory` if the value is absent; a value
    /// outside the list must never map to an arbitrary ordinal.
    pub fn ordinal(&self, column: &'static str, value: &str) -> Result<f64> {
        let values = self.values(column)?;
        values
            .iter()
            .position(|accepted| *accepted == value)
            .map(|pos| pos as f64)
            .ok_or_else(|| unrecognized(column, value))
    }
}
