use super::{ClassifierError, EmbeddingError, LexiconError};

/// Top-level error type for the riddle workspace.
#[derive(Debug, thiserror::Error)]
pub enum RiddleError {
    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("lexicon error: {0}")]
    LexiconError(#[from] LexiconError),

    #[error("classifier error: {0}")]
    ClassifierError(#[from] ClassifierError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("ambiguity resolver failed: {reason}")]
    ResolverFailed { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience alias used across every riddle crate.
pub type RiddleResult<T> = Result<T, RiddleError>;
