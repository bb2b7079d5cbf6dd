use anyhow::Context;
use chrono::Local;
use log::{info, warn};

use cvd_screen::directory::DoctorDirectory;
use cvd_screen::metrics::Frequency;
use cvd_screen::models::survey::{Answer, ConsumptionEntry, HeightInput};
use cvd_screen::models::types::{
    AgeCategory, CheckupRecency, DiabetesStatus, GeneralHealth, Sex, YesNo,
};
use cvd_screen::{
    CsvTableStore, PersistStatus, PipelineConfig, ScreenContext, ScreenError, SurveyDraft,
    Verdict, export, process_submission, record_validation,
};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig::default();
    if !config.artifact_path.exists() || !config.reference_path.exists() {
        warn!(
            "Model artifact or reference dataset not found ({}, {})",
            config.artifact_path.display(),
            config.reference_path.display()
        );
        return Ok(());
    }

    let ctx = ScreenContext::load(&config)?;
    let mut records = CsvTableStore::new(config.record_table_path.clone());
    let mut validations = CsvTableStore::new(config.validation_table_path.clone());

    // A sample submission, standing in for the form boundary
    let draft = sample_draft();

    match process_submission(&draft, &ctx, &mut records) {
        Ok(outcome) => {
            let name = outcome.record.response.name.clone();
            info!("Hello, {name}!");
            info!(
                "Based on the model, your risk of developing Cardiovascular Disease (CVD) is: {}",
                outcome.verdict().risk()
            );
            for sentence in outcome.explanation.sentences() {
                info!("{sentence}");
            }
            for recommendation in outcome.recommendations {
                info!("- {recommendation}");
            }
            if let PersistStatus::Failed(reason) = &outcome.persistence {
                warn!("Your result could not be saved: {reason}");
            }

            // Downloads
            let today = Local::now().date_naive();
            let csv_name = export::csv_filename(&name, today);
            let document_name = export::document_filename(&name, today);
            std::fs::write(&csv_name, export::record_csv(&outcome.record))
                .with_context(|| format!("writing {csv_name}"))?;
            std::fs::write(&document_name, export::record_document(&outcome.record))
                .with_context(|| format!("writing {document_name}"))?;
            info!("Wrote {csv_name} and {document_name}");

            // A sample clinician validation against the reported verdict
            let entry = record_validation(
                &name,
                outcome.verdict(),
                "Dr. Rao",
                Verdict::Low,
                &mut validations,
            )?;
            info!(
                "Thank you Dr.{} for validating our model! ({})",
                entry.doctor_name,
                entry.validation.as_str()
            );
        }
        Err(e) if e.is_input_error() => {
            // All input-class failures collapse to one generic re-prompt.
            warn!("Please enter valid values");
        }
        Err(ScreenError::PredictionFailure(reason)) => {
            warn!("Please enter valid values");
            log::debug!("Predictor failure: {reason}");
        }
        Err(e) => return Err(e.into()),
    }

    if config.directory_path.exists() {
        let directory = DoctorDirectory::load(&config.directory_path, config.infer_rows)?;
        let states = directory.states()?;
        info!("Doctor directory covers {} states", states.len());
        if let Some(state) = states.first() {
            for doctor in directory.lookup_state(state)? {
                info!(
                    "{} - {}, {} ({})",
                    doctor.name, doctor.address, doctor.city, doctor.phone
                );
            }
        }
    }

    Ok(())
}

fn sample_draft() -> SurveyDraft {
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
