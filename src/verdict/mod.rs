//! Verdict mapping and result explanation
//!
//! Converts the classifier's raw label into the user-facing risk
//! category and builds the comparison statistics shown next to it.

pub mod explanation;

pub use explanation::{ComparisonLine, Explanation, MeanRelation, build_explanation};

use crate::error::{Result, ScreenError};
use crate::predictor::RiskLabel;

/// Binary risk classification shown to the respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Low risk (classifier output 0)
    Low,
    /// High risk (any nonzero classifier output)
    High,
}

impl Verdict {
    /// Risk category string shown to the respondent
    #[must_use]
    pub fn risk(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::High => "HIGH",
        }
    }

    /// Label persisted in the record table's `Heart_Disease` column
    #[must_use]
    pub fn heart_disease_label(self) -> &'static str {
        match self {
            Self::Low => "No",
            Self::High => "Yes",
        }
    }

    /// Parse a clinician's LOW/HIGH opinion
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "LOW" => Ok(Self::Low),
            "HIGH" => Ok(Self::High),
            other => Err(ScreenError::UnrecognizedCategory {
                field: "Doctor output",
                value: other.to_string(),
            }),
        }
    }
}

impl From<RiskLabel> for Verdict {
    fn from(label: RiskLabel) -> Self {
        if label.is_positive() { Self::High } else { Self::Low }
    }
}

/// Recommendations shown with a low-risk verdict
pub const LOW_RISK_RECOMMENDATIONS: [&str; 4] = [
    "Maintain a heart-healthy diet rich in fruits(pomegranate,avacado,berries), vegetables(tomatoes,onions,dioscorea), whole grains, and lean proteins.",
    "Engage in regular physical activity such as meditation/yoga or exercise for at least 30 minutes most days of the week.",
    "Keep up-to-date with current health guidelines to ensure ongoing adherence to heart-healthy habits.",
    "Regular check-ups can help monitor overall health and detect any potential issues early on.",
];

/// Recommendations shown with a high-risk verdict
pub const HIGH_RISK_RECOMMENDATIONS: [&str; 5] = [
    "Adhere to prescribed medications and regular medical check-ups.",
    "Seek professional guidance and support from healthcare providers or nutritionists for personalized preventive strategies.",
    "Incorporate stress-reducing activities such as meditation into daily routine and ensure adequate sleep duration",
    "Avoid smoking and alcohol consumption with immediate effect",
    "Adopt dietary modifications to reduce salt and sugar intake.",
];

/// Fixed recommendation text for a verdict
#[must_use]
pub fn recommendations(verdict: Verdict) -> &'static [&'static str] {
    match verdict {
        Verdict::Low => &LOW_RISK_RECOMMENDATIONS,
        Verdict::High => &HIGH_RISK_RECOMMENDATIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_mapping_is_total_and_deterministic() {
        assert_eq!(Verdict::from(RiskLabel(0)), Verdict::Low);
        assert_eq!(Verdict::from(RiskLabel(1)), Verdict::High);
        assert_eq!(Verdict::from(RiskLabel(7)), Verdict::High);
        assert_eq!(Verdict::from(RiskLabel(-1)), Verdict::High);
    }

    #[test]
    fn verdict_strings() {
        assert_eq!(Verdict::Low.risk(), "LOW");
        assert_eq!(Verdict::Low.heart_disease_label(), "No");
        assert_eq!(Verdict::High.risk(), "HIGH");
        assert_eq!(Verdict::High.heart_disease_label(), "Yes");
    }

    #[test]
    fn clinician_opinion_parses_strictly() {
        assert_eq!(Verdict::parse("LOW").unwrap(), Verdict::Low);
        assert_eq!(Verdict::parse("HIGH").unwrap(), Verdict::High);
        assert!(Verdict::parse("high").is_err());
    }

    #[test]
    fn recommendations_differ_per_verdict() {
        assert_eq!(recommendations(Verdict::Low).len(), 4);
        assert_eq!(recommendations(Verdict::High).len(), 5);
    }
}
