/// Learned-lexicon loading errors.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("lexicon source unavailable at {path}: {reason}")]
    SourceUnavailable { path: String, reason: String },

    #[error("malformed lexicon: {reason}")]
    Malformed { reason: String },
}
