//! Serialized classifier artifact
//!
//! The artifact is a logistic model exported by the training process:
//! one weight per feature slot, an intercept, and a decision threshold.
//! It is loaded once at startup and validated against the feature
//! contract so a stale artifact fails loudly instead of mis-scoring.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::encode::{self, FeatureVector};
use crate::error::{Result, ScreenError};
use crate::predictor::{RiskLabel, RiskModel};

/// On-disk form of the trained classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Feature names in the order the weights apply, if exported
    #[serde(default)]
    pub feature_names: Vec<String>,
    /// One weight per feature slot
    pub weights: Vec<f64>,
    /// Intercept term
    pub intercept: f64,
    /// Probability threshold for the positive class
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

/// Logistic classifier backed by a [`ModelArtifact`]
#[derive(Debug, Clone)]
pub struct LinearRiskModel {
    artifact: ModelArtifact,
}

impl LinearRiskModel {
    /// Load and validate an artifact from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("Loading model artifact from {}", path.display());
        let file = File::open(path).map_err(|e| {
            ScreenError::Artifact(format!("failed to open {}: {e}", path.display()))
        })?;
        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ScreenError::Artifact(format!("failed to decode {}: {e}", path.display())))?;
        Self::from_artifact(artifact)
    }

    /// Validate an already-decoded artifact
    ///
    /// Weight arity must match the feature-vector width, and if the
    /// artifact names its features they must match the contract order
    /// exactly.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        if artifact.weights.len() != FeatureVector::WIDTH {
            return Err(ScreenError::Artifact(format!(
                "artifact has {} weights, expected {}",
                artifact.weights.len(),
                FeatureVector::WIDTH
            )));
        }
        if !artifact.feature_names.is_empty() {
            encode::check_feature_names(&artifact.feature_names)?;
        }
        if !artifact.threshold.is_finite() {
            return Err(ScreenError::Artifact(format!(
                "threshold {} is not finite",
                artifact.threshold
            )));
        }
        Ok(Self { artifact })
    }
}

impl RiskModel for LinearRiskModel {
    fn predict(&self, features: &FeatureVector) -> Result<RiskLabel> {
        let z: f64 = features
            .values()
            .iter()
            .zip(self.artifact.weights.iter())
            .map(|(value, weight)| value * weight)
            .sum::<f64>()
            + self.artifact.intercept;
        if !z.is_finite() {
            return Err(ScreenError::PredictionFailure(format!(
                "non-finite score {z} from feature vector"
            )));
        }
        let probability = 1.0 / (1.0 + (-z).exp());
        let label = i64::from(probability >= self.artifact.threshold);
        Ok(RiskLabel(label))
    }
}
