//! End-to-end submission scenario through the public API.

use cvd_screen::config::MeasurementLimits;
use cvd_screen::export;
use cvd_screen::metrics::Frequency;
use cvd_screen::models::survey::{Answer, ConsumptionEntry, HeightInput};
use cvd_screen::models::types::{
    AgeCategory, CheckupRecency, DiabetesStatus, GeneralHealth, Sex, YesNo,
};
use cvd_screen::pipeline::{PersistStatus, ScreenContext, SubmissionState};
use cvd_screen::predictor::{LinearRiskModel, ModelArtifact};
use cvd_screen::reference::PopulationMeans;
use cvd_screen::{
    MemoryTableStore, SurveyDraft, TableStore, Verdict, Vocabulary, process_submission,
    record_validation,
};

fn scenario_draft() -> SurveyDraft {
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

fn context() -> ScreenContext {
    // A zero-weight artifact with a negative intercept always scores low.
    let artifact = ModelArtifact {
        feature_names: Vec::new(),
        weights: vec![0.0; 18],
        intercept: -2.0,
        threshold: 0.5,
    };
    ScreenContext {
        vocabulary: Vocabulary::cvd(),
        means: PopulationMeans::from_pairs(vec![
            ("Alcohol_Consumption".to_string(), 5.1),
            ("Fruit_Consumption".to_string(), 29.8),
            ("Green_Vegetables_Consumption".to_string(), 15.1),
            ("FriedPotato_Consumption".to_string(), 6.3),
        ]),
        model: Box::new(LinearRiskModel::from_artifact(artifact).unwrap()),
        limits: MeasurementLimits::default(),
    }
}

#[test]
fn scenario_produces_verdict_record_and_exports() {
    let ctx = context();
    let mut records = MemoryTableStore::new();

    let outcome = process_submission(&scenario_draft(), &ctx, &mut records).unwrap();

    // Derived metrics
    let response = &outcome.record.response;
    assert_eq!(response.bmi, 22.04);
    assert_eq!(response.fruit_consumption, 90);
    assert_eq!(response.green_vegetables_consumption, 4);
    assert_eq!(response.fried_potato_consumption, 2);

    // Feature vector in vocabulary order
    assert_eq!(outcome.features.get("General_Health"), Some(2.0));
    assert_eq!(outcome.features.get("Sex"), Some(0.0));
    assert_eq!(outcome.features.get("Age_Category"), Some(6.0));
    assert_eq!(outcome.features.get("BMI"), Some(22.04));
    assert_eq!(outcome.features.get("Fruit_Consumption"), Some(90.0));

    // Verdict and persistence
    assert_eq!(outcome.verdict(), Verdict::Low);
    assert_eq!(outcome.state, SubmissionState::Persisted);
    assert_eq!(outcome.persistence, PersistStatus::Persisted);
    assert_eq!(records.len(), 1);
    let rows = records.read_all().unwrap();
    assert_eq!(rows[0][0], "Maria");
    assert_eq!(rows[0][19], "No");

    // Both exports render from the same record
    let csv = export::record_csv(&outcome.record);
    assert_eq!(csv.lines().count(), 2);
    let document = export::record_document(&outcome.record);
    assert!(document.contains("Name:Maria"));
    assert!(document.contains("The risk of developing Cardiovascular Disease (CVD) is:LOW"));

    // Explanation covers the four consumption metrics
    assert_eq!(outcome.explanation.comparisons.len(), 4);
}

#[test]
fn incomplete_input_reaches_neither_table() {
    let ctx = context();
    let mut records = MemoryTableStore::new();

    let mut draft = scenario_draft();
    draft.green_vegetables = ConsumptionEntry {
        frequency: Answer::Resolved(Frequency::PerWeek),
        count: Answer::Unresolved,
    };

    assert!(process_submission(&draft, &ctx, &mut records).is_err());
    assert!(records.is_empty());
}

#[test]
fn clinician_validation_is_recorded_against_the_reported_verdict() {
    let ctx = context();
    let mut records = MemoryTableStore::new();
    let mut validations = MemoryTableStore::new();

    let outcome = process_submission(&scenario_draft(), &ctx, &mut records).unwrap();
    let entry = record_validation(
        "Maria",
        outcome.verdict(),
        "Dr. Rao",
        Verdict::Low,
        &mut validations,
    )
    .unwrap();

    assert_eq!(entry.validation.as_str(), "Correct");
    let rows = validations.read_all().unwrap();
    assert_eq!(rows, vec![vec![
        "Maria".to_string(),
        "LOW".to_string(),
        "LOW".to_string(),
        "Correct".to_string(),
        "Dr. Rao".to_string(),
    ]]);
    // The record table is untouched by the validation append.
    assert_eq!(records.len(), 1);
}
