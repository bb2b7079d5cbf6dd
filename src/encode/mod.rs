//! Feature encoding
//!
//! Maps a resolved survey response to the fixed-order numeric vector the
//! classifier consumes. Slot order and names are part of the training
//! contract; changing either without retraining silently breaks every
//! prediction, so both live here as constants.

use crate::error::{Result, ScreenError};
use crate::models::survey::SurveyResponse;
use crate::models::types::Vocabulary;

/// Feature slot names in classifier contract order
pub const FEATURE_COLUMNS: [&str; 18] = [
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
];

/// Fixed-width, ordered numeric encoding of one survey response
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COLUMNS.len()],
}

impl FeatureVector {
    /// Number of feature slots
    pub const WIDTH: usize = FEATURE_COLUMNS.len();

    /// Wrap raw slot values; the caller guarantees contract order
    #[must_use]
    pub fn from_values(values: [f64; Self::WIDTH]) -> Self {
        Self { values }
    }

    /// Slot values in contract order
    #[must_use]
    pub fn values(&self) -> &[f64; Self::WIDTH] {
        &self.values
    }

    /// Value of a named slot
    #[must_use]
    pub fn get(&self, column: &str) -> Option<f64> {
        FEATURE_COLUMNS
            .iter()
            .position(|name| *name == column)
            .map(|index| self.values[index])
    }
}

/// Encode a resolved response against the vocabulary
///
/// Categorical slots become the ordinal position of their value within
/// the vocabulary column; numeric slots pass through unchanged. Pure:
/// no side effects, and a lookup miss fails the whole encoding with
/// `UnrecognizedCategory`.
pub fn encode(response: &SurveyResponse, vocabulary: &Vocabulary) -> Result<FeatureVector> {
    let values = [
        vocabulary.ordinal("General_Health", response.general_health.as_str())?,
        vocabulary.ordinal("Checkup", response.checkup.as_str())?,
        vocabulary.ordinal("Exercise", response.exercise.as_str())?,
        vocabulary.ordinal("Skin_Cancer", response.skin_cancer.as_str())?,
        vocabulary.ordinal("Other_Cancer", response.other_cancer.as_str())?,
        vocabulary.ordinal("Depression", response.depression.as_str())?,
        vocabulary.ordinal("Diabetes", response.diabetes.as_str())?,
        vocabulary.ordinal("Arthritis", response.arthritis.as_str())?,
        vocabulary.ordinal("Sex", response.sex.as_str())?,
        vocabulary.ordinal("Age_Category", response.age_category.as_str())?,
        response.height_cm,
        response.weight_kg,
        response.bmi,
        vocabulary.ordinal("Smoking_History", response.smoking_history.as_str())?,
        f64::from(response.alcohol_consumption),
        f64::from(response.fruit_consumption),
        f64::from(response.green_vegetables_consumption),
        f64::from(response.fried_potato_consumption),
    ];
    Ok(FeatureVector::from_values(values))
}

/// Check that a list of feature names matches the contract order
///
/// Used when loading a model artifact so a stale or reordered artifact
/// is rejected at startup instead of producing garbage predictions.
pub fn check_feature_names(names: &[String]) -> Result<()> {
    if names.len() != FeatureVector::WIDTH {
        return Err(ScreenError::Artifact(format!(
            "artifact lists {} features, expected {}",
            names.len(),
            FeatureVector::WIDTH
        )));
    }
    for (supplied, expected) in names.iter().zip(FEATURE_COLUMNS.iter()) {
        if supplied != expected {
            return Err(ScreenError::Artifact(format!(
                "artifact feature {supplied:?} does not match expected column {expected:?}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeasurementLimits;
    use crate::metrics::Frequency;
    use crate::models::survey::{Answer, ConsumptionEntry, HeightInput, SurveyDraft};
    use crate::models::types::{
        AgeCategory, CheckupRecency, DiabetesStatus, GeneralHealth, Sex, YesNo,
    };

    fn scenario_response() -> SurveyResponse {
        SurveyDraft {
            name: Answer::Resolved("Maria".to_string()),
            sex: Answer::Resolved(Sex::Female),
            age_category: Answer::Resolved(AgeCategory::Age45To49),
            height: Answer::Resolved(HeightInput::Centimeters(165.0)),
            weight_kg: Answer::Resolved(60.0),
            smoking_history: Answer::Resolved(YesNo::No),
            general_health: Answer::Resolved(GeneralHealth::Good),
            checkup: Answer::Resolved(CheckupRecency::WithinPastYear),
            exercise: Answer::Resolved(YesNo::Yes),
            depression: Answer::Resolved(YesNo::No),
            diabetes: Answer::Resolved(DiabetesStatus::No),
            arthritis: Answer::Resolved(YesNo::No),
            skin_cancer: Answer::Resolved(YesNo::No),
            other_cancer: Answer::Resolved(YesNo::No),
            alcohol_days: Answer::Resolved(2),
            fruit: ConsumptionEntry::resolved(Frequency::PerDay, 3),
            green_vegetables: ConsumptionEntry::resolved(Frequency::PerWeek, 1),
            fried_potato: ConsumptionEntry::resolved(Frequency::PerMonth, 2),
        }
        .resolve(&MeasurementLimits::default())
        .unwrap()
    }

    #[test]
    fn encodes_scenario_in_contract_order() {
        let vector = encode(&scenario_response(), &Vocabulary::cvd()).unwrap();
        let expected = [
            2.0,  // General_Health: Good
            1.0,  // Checkup: Within the past year
            1.0,  // Exercise: Yes
            0.0,  // Skin_Cancer: No
            0.0,  // Other_Cancer: No
            0.0,  // Depression: No
            0.0,  // Diabetes: No
            1.0,  // Arthritis: No
            0.0,  // Sex: Female
            6.0,  // Age_Category: 45-49
            165.0, 60.0, 22.04,
            1.0,  // Smoking_History: No
            2.0, 90.0, 4.0, 2.0,
        ];
        assert_eq!(vector.values(), &expected);
    }

    #[test]
    fn named_slot_lookup() {
        let vector = encode(&scenario_response(), &Vocabulary::cvd()).unwrap();
        assert_eq!(vector.get("BMI"), Some(22.04));
        assert_eq!(vector.get("Fruit_Consumption"), Some(90.0));
        assert_eq!(vector.get("Blood_Pressure"), None);
    }

    #[test]
    fn feature_name_check_rejects_wrong_arity_and_order() {
        let too_short: Vec<String> = FEATURE_COLUMNS[..17].iter().map(|s| (*s).to_string()).collect();
        assert!(check_feature_names(&too_short).is_err());

        let mut reordered: Vec<String> = FEATURE_COLUMNS.iter().map(|s| (*s).to_string()).collect();
        reordered.swap(0, 1);
        assert!(check_feature_names(&reordered).is_err());

        let exact: Vec<String> = FEATURE_COLUMNS.iter().map(|s| (*s).to_string()).collect();
        assert!(check_feature_names(&exact).is_ok());
    }
}
