use crate::errors::RiddleResult;
use crate::models::JudgeResult;

/// What the decision ladder knew when it reached the ambiguous band.
#[derive(Debug, Clone, Copy)]
pub struct AmbiguityContext<'a> {
    /// Normalized question with negation already stripped.
    pub question: &'a str,
    pub content: &'a str,
    pub answer: &'a str,
    pub answer_score: f64,
    pub content_score: f64,
    /// Number of contradiction detectors that fired (0..=3).
    pub antonym_signals: u8,
}

/// Second opinion consulted only inside the narrow ambiguous band.
///
/// `Ok(None)` means "no opinion"; the ladder then decides on its own.
/// The returned label is for the negation-stripped question and is
/// inverted by the caller when the original was negated.
pub trait IAmbiguityResolver: Send + Sync {
    fn resolve(&self, context: &AmbiguityContext<'_>) -> RiddleResult<Option<JudgeResult>>;

    fn name(&self) -> &str;
}

/// Resolver that never has an opinion.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpResolver;

impl IAmbiguityResolver for NoOpResolver {
    fn resolve(&self, _context: &AmbiguityContext<'_>) -> RiddleResult<Option<JudgeResult>> {
        Ok(None)
    }

    fn name(&self) -> &str {
        "noop"
    }
}
