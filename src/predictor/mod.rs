//! Risk predictor interface
//!
//! The classifier is opaque and already trained; the pipeline only ever
//! calls [`RiskModel::predict`] and never updates it. Any failure from
//! the predictor aborts the submission before a record is written.

pub mod artifact;

pub use artifact::{LinearRiskModel, ModelArtifact};

use crate::encode::FeatureVector;
use crate::error::Result;

/// Raw binary output of the classifier
///
/// Zero means low risk; any nonzero value means high risk. The verdict
/// mapping lives with the verdict builder, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskLabel(pub i64);

impl RiskLabel {
    /// Whether the classifier flagged the respondent
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 != 0
    }
}

/// A pre-trained binary classifier over the fixed feature vector
pub trait RiskModel {
    /// Score one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<RiskLabel>;
}
