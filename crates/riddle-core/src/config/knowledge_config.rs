use serde::{Deserialize, Serialize};

use super::defaults;

/// Knowledge construction and concept expansion limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Tokens shorter than this (in chars) are dropped. Korean tokens use 1.
    pub min_token_chars: usize,
    /// Cap on tokens kept per text.
    pub max_tokens: usize,
    /// Sentences kept per side before embedding.
    pub top_k_sentences: usize,
    /// Size of the frequency-ranked entity set.
    pub entity_set_size: usize,
    /// Hard cap on any expanded concept set.
    pub max_concepts: usize,
    /// Hypernyms/hyponyms added per token.
    pub max_hierarchy_per_token: usize,
    /// Taxonomy traversal depth.
    pub taxonomy_depth: usize,
    /// Cosine bar for embedding-derived synonyms from the entity set.
    pub embedding_synonym_threshold: f64,
    /// Question tokens compared against entities for embedding-derived synonyms.
    pub embedding_synonym_tokens: usize,
    pub min_question_chars: usize,
    pub max_question_chars: usize,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            min_token_chars: defaults::DEFAULT_MIN_TOKEN_CHARS,
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            top_k_sentences: defaults::DEFAULT_TOP_K_SENTENCES,
            entity_set_size: defaults::DEFAULT_ENTITY_SET_SIZE,
            max_concepts: defaults::DEFAULT_MAX_CONCEPTS,
            max_hierarchy_per_token: defaults::DEFAULT_MAX_HIERARCHY_PER_TOKEN,
            taxonomy_depth: defaults::DEFAULT_TAXONOMY_DEPTH,
            embedding_synonym_threshold: defaults::DEFAULT_EMBEDDING_SYNONYM_THRESHOLD,
            embedding_synonym_tokens: defaults::DEFAULT_EMBEDDING_SYNONYM_TOKENS,
            min_question_chars: defaults::DEFAULT_MIN_QUESTION_CHARS,
            max_question_chars: defaults::DEFAULT_MAX_QUESTION_CHARS,
        }
    }
}
