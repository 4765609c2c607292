use crate::errors::RiddleResult;
use crate::models::LearnedLexicon;

/// Upstream source of learned lexicon data. Consumed read-only.
pub trait ILexiconSource: Send + Sync {
    fn load(&self) -> RiddleResult<LearnedLexicon>;

    fn name(&self) -> &str;
}
