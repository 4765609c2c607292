/// Classifier weight loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier weights not found at {path}")]
    WeightsNotFound { path: String },

    #[error("malformed classifier weights: {reason}")]
    Malformed { reason: String },

    #[error("feature mismatch: expected {expected} features, got {actual}")]
    FeatureMismatch { expected: usize, actual: usize },
}
