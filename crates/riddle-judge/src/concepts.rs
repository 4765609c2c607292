//! Concept extraction.
//!
//! A question (or the puzzle's truth) is expanded from its own tokens into
//! synonyms, taxonomy and part-of neighbours, and compound contextual
//! concepts. Every layer is capped so the total never exceeds
//! `max_concepts`.

use std::collections::BTreeSet;

use riddle_core::errors::RiddleResult;
use riddle_embeddings::{cosine_similarity, EmbeddingEngine};
use riddle_knowledge::text::contains_any;
use riddle_knowledge::ProblemKnowledge;
use riddle_lexicon::data::patterns;
use tracing::debug;

/// Concepts by origin. Kept apart because scoring weighs them differently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptSet {
    pub exact: BTreeSet<String>,
    pub synonyms: BTreeSet<String>,
    pub hierarchy: BTreeSet<String>,
    pub contextual: BTreeSet<String>,
    pub inferred: BTreeSet<String>,
    /// Puzzle entities that embed close to a question token.
    pub embedded: BTreeSet<String>,
}

impl ConceptSet {
    pub fn len(&self) -> usize {
        self.exact.len()
            + self.synonyms.len()
            + self.hierarchy.len()
            + self.contextual.len()
            + self.inferred.len()
            + self.embedded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn all(&self) -> BTreeSet<&str> {
        self.exact
            .iter()
            .chain(&self.synonyms)
            .chain(&self.hierarchy)
            .chain(&self.contextual)
            .chain(&self.inferred)
            .chain(&self.embedded)
            .map(String::as_str)
            .collect()
    }

    /// Exact, synonym, contextual, and embedded concepts: the ones that
    /// count as the question actually naming something.
    pub fn core(&self) -> BTreeSet<&str> {
        self.exact
            .iter()
            .chain(&self.synonyms)
            .chain(&self.contextual)
            .chain(&self.embedded)
            .map(String::as_str)
            .collect()
    }

    pub fn contains(&self, concept: &str) -> bool {
        self.exact.contains(concept)
            || self.synonyms.contains(concept)
            || self.hierarchy.contains(concept)
            || self.contextual.contains(concept)
            || self.inferred.contains(concept)
            || self.embedded.contains(concept)
    }

    /// How many of `self`'s core concepts appear anywhere in `other`.
    pub fn hits_in(&self, other: &ConceptSet) -> usize {
        self.core().iter().filter(|c| other.contains(c)).count()
    }
}

/// Inserts into one layer while the shared budget lasts.
struct Budget {
    remaining: usize,
}

impl Budget {
    fn add(&mut self, layer: &mut BTreeSet<String>, concept: impl Into<String>) -> bool {
        if self.remaining == 0 {
            return false;
        }
        if layer.insert(concept.into()) {
            self.remaining -= 1;
        }
        true
    }
}

/// Compound concepts recognised from raw text.
pub fn contextual_concepts(lower: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    if contains_any(lower, patterns::TEMPORAL_ORDER) {
        out.insert("temporal_order".to_string());
    }
    if contains_any(lower, patterns::CAUSALITY) {
        out.insert("causality".to_string());
    }
    let person = contains_any(lower, patterns::PERSON);
    if person && contains_any(lower, patterns::DEATH) {
        out.insert("person_death".to_string());
    }
    if person && contains_any(lower, patterns::KILL) {
        out.insert("homicide".to_string());
    }
    if contains_any(lower, patterns::PLACE) && contains_any(lower, patterns::ESCAPE) {
        out.insert("escape".to_string());
    }
    out
}

/// Expand tokens with lexicon and taxonomy knowledge.
fn expand(tokens: &[String], lower: &str, knowledge: &ProblemKnowledge) -> ConceptSet {
    let config = knowledge.config();
    let mut set = ConceptSet::default();
    let mut budget = Budget {
        remaining: config.max_concepts,
    };

    for token in tokens {
        budget.add(&mut set.exact, token.clone());
    }
    for token in tokens {
        for synonym in knowledge.synonyms_of(token) {
            if !set.exact.contains(&synonym) && !budget.add(&mut set.synonyms, synonym) {
                break;
            }
        }
    }
    for token in tokens {
        let up = knowledge.hypernyms_of(token);
        let down = knowledge.hyponyms_of(token);
        let parts = knowledge.part_neighbours(token);
        for related in up
            .into_iter()
            .chain(down)
            .chain(parts)
            .filter(|r| r != token)
            .take(config.max_hierarchy_per_token)
        {
            if !budget.add(&mut set.hierarchy, related) {
                break;
            }
        }
    }
    for concept in contextual_concepts(lower) {
        budget.add(&mut set.contextual, concept);
    }
    set
}

/// Concepts of a prepared question, lexical layers only.
pub fn question_concepts(tokens: &[String], lower: &str, knowledge: &ProblemKnowledge) -> ConceptSet {
    expand(tokens, lower, knowledge)
}

/// Concepts of the truth text, including the puzzle's inferred concepts.
pub fn answer_concepts(knowledge: &ProblemKnowledge) -> ConceptSet {
    let mut set = expand(&knowledge.answer_tokens, &knowledge.answer_lower, knowledge);
    let mut budget = Budget {
        remaining: knowledge.config().max_concepts.saturating_sub(set.len()),
    };
    for concept in &knowledge.inferred_concepts {
        budget.add(&mut set.inferred, concept.clone());
    }
    set
}

pub fn content_concepts(knowledge: &ProblemKnowledge) -> ConceptSet {
    expand(&knowledge.content_tokens, &knowledge.content_lower, knowledge)
}

/// Add puzzle entities whose embedding is close to a question token.
///
/// Only the first `embedding_synonym_tokens` tokens are compared. Vectors are
/// memoized on the knowledge bundle.
pub fn add_embedded_synonyms(
    set: &mut ConceptSet,
    tokens: &[String],
    knowledge: &ProblemKnowledge,
    engine: &EmbeddingEngine,
) -> RiddleResult<()> {
    let config = knowledge.config();
    let mut budget = Budget {
        remaining: config.max_concepts.saturating_sub(set.len()),
    };
    if budget.remaining == 0 || knowledge.entity_set.is_empty() {
        return Ok(());
    }

    let embed = |text: &str| engine.embed(text);
    let mut added = 0usize;
    for token in tokens.iter().take(config.embedding_synonym_tokens) {
        let asked = knowledge.concept_vector(token, embed)?;
        for entity in &knowledge.entity_set {
            if entity == token || set.contains(entity) {
                continue;
            }
            let candidate = knowledge.concept_vector(entity, embed)?;
            if cosine_similarity(&asked, &candidate) >= config.embedding_synonym_threshold {
                if !budget.add(&mut set.embedded, entity.clone()) {
                    break;
                }
                added += 1;
            }
        }
    }
    if added > 0 {
        debug!(added, "embedding-derived synonyms");
    }
    Ok(())
}
