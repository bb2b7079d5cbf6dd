//! Error handling for the screening pipeline.
//!
//! Every failure a submission can hit carries its own tag so the
//! presentation boundary can choose user-facing text per class instead
//! of collapsing everything into one generic message.

/// Specialized error type for the screening pipeline
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    /// A required survey field was left unresolved
    #[error("Required field is not resolved: {field}")]
    IncompleteInput {
        /// Name of the unresolved field
        field: &'static str,
    },

    /// A categorical answer is not in the accepted list for its column
    #[error("Value {value:?} is not in the accepted list for {field}")]
    UnrecognizedCategory {
        /// Vocabulary column the lookup ran against
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// A numeric answer is outside the accepted measurement range
    #[error("{field} is outside the accepted range")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
    },

    /// The classifier failed while scoring a feature vector
    #[error("Prediction failed: {0}")]
    PredictionFailure(String),

    /// A write to one of the append-only tables failed
    #[error("Persistence failed: {0}")]
    PersistFailure(String),

    /// The model artifact could not be loaded or is inconsistent
    #[error("Model artifact error: {0}")]
    Artifact(String),

    /// A tabular source is missing a column or holds the wrong type
    #[error("Table error: {0}")]
    Table(String),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error processing Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

impl ScreenError {
    /// Wrap any error as a `PredictionFailure`
    pub fn prediction<E: std::fmt::Display>(error: E) -> Self {
        Self::PredictionFailure(error.to_string())
    }

    /// Wrap any error as a `PersistFailure`
    pub fn persist<E: std::fmt::Display>(error: E) -> Self {
        Self::PersistFailure(error.to_string())
    }

    /// Whether this error class is caused by user input
    ///
    /// Input errors are collapsed to one generic re-prompt at the
    /// boundary; anything else is an operational fault and must not be
    /// presented as a bad form entry.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::IncompleteInput { .. } | Self::UnrecognizedCategory { .. } | Self::OutOfRange { .. }
        )
    }
}

/// Result type for screening pipeline operations
pub type Result<T> = std::result::Result<T, ScreenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_are_flagged() {
        assert!(ScreenError::IncompleteInput { field: "Sex" }.is_input_error());
        assert!(
            ScreenError::UnrecognizedCategory {
                field: "Sex",
                value: "Other".to_string(),
            }
            .is_input_error()
        );
        assert!(ScreenError::OutOfRange { field: "Weight_(kg)" }.is_input_error());
        assert!(!ScreenError::PersistFailure("table locked".to_string()).is_input_error());
        assert!(!ScreenError::PredictionFailure("shape mismatch".to_string()).is_input_error());
    }
}
