//! Submission orchestration
//!
//! One submission is a single synchronous chain: resolve the draft,
//! encode, predict, build the verdict and explanation, then append the
//! record. Failures before the verdict reject the submission outright;
//! a failure while persisting is carried in the outcome instead, so a
//! result that was already computed is never retracted from the user.

use crate::config::{MeasurementLimits, PipelineConfig};
use crate::encode::{self, FeatureVector};
use crate::error::{Result, ScreenError};
use crate::models::record::Record;
use crate::models::survey::SurveyDraft;
use crate::models::types::Vocabulary;
use crate::predictor::{LinearRiskModel, RiskModel};
use crate::reference::{PopulationMeans, load_population_means};
use crate::store::{TableStore, append_record, append_validation};
use crate::validation::ValidationEntry;
use crate::verdict::{Explanation, Verdict, build_explanation, recommendations};

/// Lifecycle of one submission
///
/// Failures in `Validating` or `Encoding` return the session to
/// `Collecting`; `PersistFailed` is terminal for the submission but the
/// verdict stays visible. `ValidationRecorded` is reached independently
/// later, from clinician input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    /// Answers are still being collected
    Collecting,
    /// Resolving the draft into a complete response
    Validating,
    /// Building the feature vector
    Encoding,
    /// Scoring the feature vector
    Predicting,
    /// Verdict and explanation computed and shown
    Reported,
    /// Record appended to the record table
    Persisted,
    /// Record append failed; verdict still shown
    PersistFailed,
    /// Clinician validation appended to the validation table
    ValidationRecorded,
}

/// Whether the record made it into the record table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistStatus {
    /// Record appended as the last row
    Persisted,
    /// Append failed; the error text is kept for the boundary
    Failed(String),
}

/// Process-wide read-only state, loaded once at startup
///
/// Shared across all submissions; nothing in here is mutated after
/// loading.
pub struct ScreenContext {
    /// Category vocabulary fixing the encoder/classifier contract
    pub vocabulary: Vocabulary,
    /// Population means for the explanation builder
    pub means: PopulationMeans,
    /// The pre-trained classifier
    pub model: Box<dyn RiskModel>,
    /// Accepted measurement ranges
    pub limits: MeasurementLimits,
}

impl ScreenContext {
    /// Load the model artifact and reference statistics per the config
    pub fn load(config: &PipelineConfig) -> Result<Self> {
        let model = LinearRiskModel::load(&config.artifact_path)?;
        let means = load_population_means(&config.reference_path, config.infer_rows)?;
        Ok(Self {
            vocabulary: Vocabulary::cvd(),
            means,
            model: Box::new(model),
            limits: config.limits.clone(),
        })
    }
}

/// Everything produced by one successful submission
#[derive(Debug)]
pub struct SubmissionOutcome {
    /// The record (response + verdict) as computed
    pub record: Record,
    /// The encoded feature vector that was scored
    pub features: FeatureVector,
    /// Comparison statistics against population means
    pub explanation: Explanation,
    /// Recommendation texts for the verdict
    pub recommendations: &'static [&'static str],
    /// Whether the record table append succeeded
    pub persistence: PersistStatus,
    /// Final state of the submission
    pub state: SubmissionState,
}

impl SubmissionOutcome {
    /// The verdict shown to the respondent
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.record.verdict
    }
}

/// Run one submission end to end
///
/// Encoding and prediction errors abort before any store is touched and
/// the caller re-prompts. A persist failure does not: the verdict was
/// already computed and shown, so it is reported in the outcome's
/// `persistence` field instead.
pub fn process_submission(
    draft: &SurveyDraft,
    ctx: &ScreenContext,
    records: &mut dyn TableStore,
) -> Result<SubmissionOutcome> {
    // Validating
    let response = draft.resolve(&ctx.limits)?;
    log::debug!("Resolved submission for {}", response.name);

    // Encoding
    let features = encode::encode(&response, &ctx.vocabulary)?;

    // Predicting
    let label = ctx
        .model
        .predict(&features)
        .map_err(|e| match e {
            ScreenError::PredictionFailure(_) => e,
            other => ScreenError::prediction(other),
        })?;

    // Reported
    let verdict = Verdict::from(label);
    let explanation = build_explanation(&response, &ctx.means)?;
    let record = Record::new(response, verdict);
    log::info!("Verdict for {}: {}", record.response.name, verdict.risk());

    let (persistence, state) = match append_record(records, &record) {
        Ok(count) => {
            log::debug!("Record table now holds {count} rows");
            (PersistStatus::Persisted, SubmissionState::Persisted)
        }
        Err(e) => {
            log::warn!("Record append failed, verdict stays visible: {e}");
            (PersistStatus::Failed(e.to_string()), SubmissionState::PersistFailed)
        }
    };

    Ok(SubmissionOutcome {
        recommendations: recommendations(record.verdict),
        record,
        features,
        explanation,
        persistence,
        state,
    })
}

/// Record a clinician's validation of a reported verdict
///
/// Only called once both the clinician name and opinion exist; the
/// entry is appended to the validation table, never the record table.
pub fn record_validation(
    patient_name: &str,
    model_output: Verdict,
    doctor_name: &str,
    doctor_output: Verdict,
    validations: &mut dyn TableStore,
) -> Result<ValidationEntry> {
    let entry = ValidationEntry::new(
        patient_name.to_string(),
        model_output,
        doctor_output,
        doctor_name.to_string(),
    );
    append_validation(validations, &entry)?;
    log::info!(
        "Validation by {} for {}: {}",
        entry.doctor_name,
        entry.patient_name,
        entry.validation.as_str()
    );
    Ok(entry)
}
