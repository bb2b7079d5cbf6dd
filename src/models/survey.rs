//! Survey response model
//!
//! A draft collects answers as they arrive from the form; every field is
//! an [`Answer`] that is either `Unresolved` or `Resolved`. Resolution
//! turns a complete draft into a [`SurveyResponse`] with all derived
//! metrics computed, or fails closed without touching any store.

use crate::config::MeasurementLimits;
use crate::error::{Result, ScreenError};
use crate::metrics::{self, Frequency};
use crate::models::types::{AgeCategory, CheckupRecency, DiabetesStatus, GeneralHealth, Sex, YesNo};

/// A form field that may not have been answered yet
///
/// The form's unit selectors can be set while the underlying count is
/// still at its placeholder; modeling every field this way makes "no
/// value yet" impossible to confuse with a real answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<T> {
    /// No concrete value has been supplied
    Unresolved,
    /// A concrete value
    Resolved(T),
}

// Not derived: the derive would bound `T: Default`.
impl<T> Default for Answer<T> {
    fn default() -> Self {
        Self::Unresolved
    }
}

impl<T> Answer<T> {
    /// The resolved value, or `IncompleteInput` naming the field
    pub fn resolved(&self, field: &'static str) -> Result<&T> {
        match self {
            Self::Resolved(value) => Ok(value),
            Self::Unresolved => Err(ScreenError::IncompleteInput { field }),
        }
    }

    /// Whether a concrete value has been supplied
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl<T> From<T> for Answer<T> {
    fn from(value: T) -> Self {
        Self::Resolved(value)
    }
}

/// Height as entered on the form, in either unit system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeightInput {
    /// Height entered directly in centimeters
    Centimeters(f64),
    /// Height entered as feet and inches
    FeetInches {
        /// Whole feet
        feet: u8,
        /// Remaining inches
        inches: u8,
    },
}

impl HeightInput {
    /// Height in centimeters, converting feet and inches if needed
    #[must_use]
    pub fn to_centimeters(self) -> f64 {
        match self {
            Self::Centimeters(cm) => cm,
            Self::FeetInches { feet, inches } => metrics::height_from_feet_inches(feet, inches),
        }
    }
}

/// One food-consumption question: a period unit plus a count
///
/// Both parts resolve independently on the form, so a selected unit with
/// a placeholder count is a legal draft state that must still fail
/// resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsumptionEntry {
    /// Selected period unit
    pub frequency: Answer<Frequency>,
    /// Count per period, 0-5 on the form
    pub count: Answer<u8>,
}

impl ConsumptionEntry {
    /// Convenience constructor for a fully-answered entry
    #[must_use]
    pub fn resolved(frequency: Frequency, count: u8) -> Self {
        Self {
            frequency: Answer::Resolved(frequency),
            count: Answer::Resolved(count),
        }
    }

    fn normalize(&self, field: &'static str, limits: &MeasurementLimits) -> Result<u32> {
        let frequency = *self.frequency.resolved(field)?;
        let count = *self.count.resolved(field)?;
        if !limits.consumption_count.contains(&count) {
            return Err(ScreenError::OutOfRange { field });
        }
        Ok(frequency.normalize(count))
    }
}

/// All answers collected from the form, each possibly unresolved
#[derive(Debug, Clone, Default)]
pub struct SurveyDraft {
    /// Respondent name, free text
    pub name: Answer<String>,
    /// Sex
    pub sex: Answer<Sex>,
    /// Age band
    pub age_category: Answer<AgeCategory>,
    /// Height in either unit system
    pub height: Answer<HeightInput>,
    /// Weight in kilograms
    pub weight_kg: Answer<f64>,
    /// Smoked at least 100 cigarettes in their life
    pub smoking_history: Answer<YesNo>,
    /// Self-rated general health
    pub general_health: Answer<GeneralHealth>,
    /// Time since last routine checkup
    pub checkup: Answer<CheckupRecency>,
    /// Exercised in the past month
    pub exercise: Answer<YesNo>,
    /// Diagnosed with a depressive disorder
    pub depression: Answer<YesNo>,
    /// Diabetes screening answer
    pub diabetes: Answer<DiabetesStatus>,
    /// Diagnosed with arthritis
    pub arthritis: Answer<YesNo>,
    /// Diagnosed with skin cancer
    pub skin_cancer: Answer<YesNo>,
    /// Diagnosed with any other cancer
    pub other_cancer: Answer<YesNo>,
    /// Days with at least one drink in the last 30 days
    pub alcohol_days: Answer<u8>,
    /// Fruit consumption question
    pub fruit: ConsumptionEntry,
    /// Green vegetable consumption question
    pub green_vegetables: ConsumptionEntry,
    /// Fried potato consumption question
    pub fried_potato: ConsumptionEntry,
}

impl SurveyDraft {
    /// Resolve every field into a [`SurveyResponse`]
    ///
    /// Fails with `IncompleteInput` on the first unresolved field or
    /// `OutOfRange` on a value outside the configured limits. No store
    /// is touched on failure; the caller re-prompts and resubmits.
    pub fn resolve(&self, limits: &MeasurementLimits) -> Result<SurveyResponse> {
        let name = self.name.resolved("Name")?.clone();
        let sex = *self.sex.resolved(Sex::COLUMN)?;
        let age_category = *self.age_category.resolved(AgeCategory::COLUMN)?;

        let height_cm = self.height.resolved("Height_(cm)")?.to_centimeters();
        if !limits.height_cm.contains(&height_cm) {
            return Err(ScreenError::OutOfRange { field: "Height_(cm)" });
        }
        let weight_kg = *self.weight_kg.resolved("Weight_(kg)")?;
        if !limits.weight_kg.contains(&weight_kg) {
            return Err(ScreenError::OutOfRange { field: "Weight_(kg)" });
        }

        let alcohol_days = *self.alcohol_days.resolved("Alcohol_Consumption")?;
        if !limits.alcohol_days.contains(&alcohol_days) {
            return Err(ScreenError::OutOfRange {
                field: "Alcohol_Consumption",
            });
        }

        Ok(SurveyResponse {
            name,
            sex,
            age_category,
            height_cm,
            weight_kg,
            bmi: metrics::bmi(weight_kg, height_cm),
            smoking_history: *self.smoking_history.resolved("Smoking_History")?,
            general_health: *self.general_health.resolved(GeneralHealth::COLUMN)?,
            checkup: *self.checkup.resolved(CheckupRecency::COLUMN)?,
            exercise: *self.exercise.resolved("Exercise")?,
            depression: *self.depression.resolved("Depression")?,
            diabetes: *self.diabetes.resolved(DiabetesStatus::COLUMN)?,
            arthritis: *self.arthritis.resolved("Arthritis")?,
            skin_cancer: *self.skin_cancer.resolved("Skin_Cancer")?,
            other_cancer: *self.other_cancer.resolved("Other_Cancer")?,
            alcohol_consumption: u32::from(alcohol_days),
            fruit_consumption: self.fruit.normalize("Fruit_Consumption", limits)?,
            green_vegetables_consumption: self
                .green_vegetables
                .normalize("Green_Vegetables_Consumption", limits)?,
            fried_potato_consumption: self
                .fried_potato
                .normalize("FriedPotato_Consumption", limits)?,
        })
    }
}

/// A fully-resolved survey response with derived metrics computed
///
/// Exists only for the duration of one submission; nothing here is
/// shared or mutated across submissions.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyResponse {
    /// Respondent name
    pub name: String,
    /// Sex
    pub sex: Sex,
    /// Age band
    pub age_category: AgeCategory,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Body mass index, 2 decimal places
    pub bmi: f64,
    /// Smoking history flag
    pub smoking_history: YesNo,
    /// Self-rated general health
    pub general_health: GeneralHealth,
    /// Checkup recency
    pub checkup: CheckupRecency,
    /// Exercise flag
    pub exercise: YesNo,
    /// Depression flag
    pub depression: YesNo,
    /// Diabetes status
    pub diabetes: DiabetesStatus,
    /// Arthritis flag
    pub arthritis: YesNo,
    /// Skin cancer flag
    pub skin_cancer: YesNo,
    /// Other cancer flag
    pub other_cancer: YesNo,
    /// Drinking days in the last 30 days
    pub alcohol_consumption: u32,
    /// Fruit servings per 30 days
    pub fruit_consumption: u32,
    /// Green vegetable servings per 30 days
    pub green_vegetables_consumption: u32,
    /// Fried potato servings per 30 days
    pub fried_potato_consumption: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> SurveyDraft {
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
    }

    #[test]
    fn complete_draft_resolves_with_derived_metrics() {
        let response = complete_draft().resolve(&MeasurementLimits::default()).unwrap();
        assert_eq!(response.bmi, 22.04);
        assert_eq!(response.fruit_consumption, 90);
        assert_eq!(response.green_vegetables_consumption, 4);
        assert_eq!(response.fried_potato_consumption, 2);
        assert_eq!(response.alcohol_consumption, 2);
    }

    #[test]
    fn feet_and_inches_height_is_converted_before_bmi() {
        let mut draft = complete_draft();
        draft.height = Answer::Resolved(HeightInput::FeetInches { feet: 5, inches: 10 });
        let response = draft.resolve(&MeasurementLimits::default()).unwrap();
        assert_eq!(response.height_cm, 177.8);
        // 60 / 1.778^2
        assert_eq!(response.bmi, 18.98);
    }

    #[test]
    fn unit_selected_without_count_fails_closed() {
        let mut draft = complete_draft();
        draft.fruit = ConsumptionEntry {
            frequency: Answer::Resolved(Frequency::PerDay),
            count: Answer::Unresolved,
        };
        let err = draft.resolve(&MeasurementLimits::default()).unwrap_err();
        assert!(matches!(
            err,
            ScreenError::IncompleteInput {
                field: "Fruit_Consumption"
            }
        ));
    }

    #[test]
    fn missing_demographic_fails_closed() {
        let mut draft = complete_draft();
        draft.sex = Answer::Unresolved;
        let err = draft.resolve(&MeasurementLimits::default()).unwrap_err();
        assert!(matches!(err, ScreenError::IncompleteInput { field: "Sex" }));
    }

    #[test]
    fn out_of_range_weight_is_rejected() {
        let mut draft = complete_draft();
        draft.weight_kg = Answer::Resolved(12.0);
        let err = draft.resolve(&MeasurementLimits::default()).unwrap_err();
        assert!(matches!(err, ScreenError::OutOfRange { field: "Weight_(kg)" }));
    }
}
