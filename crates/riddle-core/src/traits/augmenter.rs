use crate::errors::RiddleResult;
use crate::models::KnowledgeAugmentation;

/// Supplies extra synonyms, taxonomy edges, and concepts for one puzzle.
pub trait IKnowledgeAugmenter: Send + Sync {
    fn augment(&self, content: &str, answer: &str) -> RiddleResult<KnowledgeAugmentation>;
}

/// Augmenter that adds nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpAugmenter;

impl IKnowledgeAugmenter for NoOpAugmenter {
    fn augment(&self, _content: &str, _answer: &str) -> RiddleResult<KnowledgeAugmentation> {
        Ok(KnowledgeAugmentation::default())
    }
}
