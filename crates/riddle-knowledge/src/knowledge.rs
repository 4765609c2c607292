//! The per-puzzle knowledge bundle.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use dashmap::DashMap;
use riddle_core::config::KnowledgeConfig;
use riddle_core::errors::RiddleResult;
use riddle_lexicon::{AntonymAxis, Lexicon};

use crate::taxonomy::TaxonomyGraph;
use crate::text::{Locale, Tokenizer};

/// Quantity vocabulary relevant to one puzzle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantityPatterns {
    /// Totality quantifiers looked for in questions.
    pub totality: Vec<String>,
    /// Singularity phrases that actually occur in the truth text.
    pub singularity: Vec<String>,
}

impl QuantityPatterns {
    pub fn answer_is_singular(&self) -> bool {
        !self.singularity.is_empty()
    }
}

/// Everything the judge knows about one puzzle. Built once by
/// [`crate::KnowledgeBuilder`] and then only read, apart from the concept
/// vector memo.
#[derive(Debug)]
pub struct ProblemKnowledge {
    /// Normalized narrative.
    pub content: String,
    /// Normalized truth, with hints and explanation appended.
    pub answer: String,
    pub content_lower: String,
    pub answer_lower: String,
    pub content_sentences: Vec<String>,
    pub answer_sentences: Vec<String>,
    pub content_tokens: Vec<String>,
    pub answer_tokens: Vec<String>,
    /// Most frequent puzzle tokens, most frequent first.
    pub entity_set: Vec<String>,
    pub locale: Locale,
    pub synonym_map: HashMap<String, BTreeSet<String>>,
    pub antonym_map: HashMap<String, BTreeSet<String>>,
    /// Axes whose two poles both occur in the puzzle.
    pub antonym_axes: Vec<AntonymAxis>,
    pub lexicon: Arc<Lexicon>,
    /// Part-of edges touching a puzzle token.
    pub ontology: Vec<(String, String)>,
    pub taxonomy: TaxonomyGraph,
    pub hypernym_map: HashMap<String, Vec<String>>,
    pub hyponym_map: HashMap<String, Vec<String>>,
    pub inferred_concepts: BTreeSet<String>,
    pub quantity_patterns: QuantityPatterns,
    pub(crate) config: KnowledgeConfig,
    pub(crate) concept_vec_cache: DashMap<String, Arc<Vec<f32>>>,
}

impl ProblemKnowledge {
    /// No narrative and no truth: every question is irrelevant.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.answer.is_empty()
    }

    pub fn config(&self) -> &KnowledgeConfig {
        &self.config
    }

    /// Tokenizer configured like the one that built this bundle.
    pub fn tokenizer(&self) -> Tokenizer<'_> {
        Tokenizer::new(&self.lexicon, &self.config)
    }

    /// Puzzle-specific synonyms merged with the global lexicon.
    pub fn synonyms_of(&self, word: &str) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        if let Some(local) = self.synonym_map.get(word) {
            out.extend(local.iter().cloned());
        }
        if let Some(global) = self.lexicon.synonyms_of(word) {
            out.extend(global.iter().cloned());
        }
        out
    }

    pub fn antonyms_of(&self, word: &str) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        if let Some(local) = self.antonym_map.get(word) {
            out.extend(local.iter().cloned());
        }
        if let Some(global) = self.lexicon.antonyms_of(word) {
            out.extend(global.iter().cloned());
        }
        out
    }

    /// Hypernyms of `word`, from the precomputed map when it is a puzzle
    /// token and from the graph otherwise.
    pub fn hypernyms_of(&self, word: &str) -> Vec<String> {
        match self.hypernym_map.get(word) {
            Some(h) => h.clone(),
            None => self.taxonomy.hypernyms(
                word,
                self.config.taxonomy_depth,
                self.config.max_hierarchy_per_token,
            ),
        }
    }

    pub fn hyponyms_of(&self, word: &str) -> Vec<String> {
        match self.hyponym_map.get(word) {
            Some(h) => h.clone(),
            None => self.taxonomy.hyponyms(
                word,
                self.config.taxonomy_depth,
                self.config.max_hierarchy_per_token,
            ),
        }
    }

    /// Wholes and parts linked to `word` by a part-of edge.
    pub fn part_neighbours(&self, word: &str) -> Vec<String> {
        self.ontology
            .iter()
            .filter_map(|(whole, part)| {
                if whole == word {
                    Some(part.clone())
                } else if part == word {
                    Some(whole.clone())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Memoized concept embedding, computed with `embed` on first request.
    pub fn concept_vector(
        &self,
        concept: &str,
        embed: impl FnOnce(&str) -> RiddleResult<Arc<Vec<f32>>>,
    ) -> RiddleResult<Arc<Vec<f32>>> {
        if let Some(hit) = self.concept_vec_cache.get(concept) {
            return Ok(hit.clone());
        }
        let vector = embed(concept)?;
        self.concept_vec_cache
            .insert(concept.to_string(), vector.clone());
        Ok(vector)
    }

    pub fn cached_concept_vectors(&self) -> usize {
        self.concept_vec_cache.len()
    }
}
