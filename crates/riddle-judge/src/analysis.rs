//! The analysis pipeline shared by both strategies.
//!
//! [`lexical`] needs no model and is enough for the force rules;
//! [`score`] adds embeddings, sentence similarity, and adjusted scores.

use std::collections::HashSet;
use std::sync::Arc;

use riddle_core::config::RiddleConfig;
use riddle_core::errors::RiddleResult;
use riddle_embeddings::{EmbeddingEngine, SimilarityStats};
use riddle_knowledge::selection::select_top_k;
use riddle_knowledge::text::contains_any;
use riddle_knowledge::ProblemKnowledge;
use riddle_lexicon::data::patterns;
use tracing::debug;

use crate::concepts::{self, ConceptSet};
use crate::contradiction::{self, ContradictionReport};
use crate::decision::LadderInputs;
use crate::force_rules::{self, TaxonomyOutcome};
use crate::question::{self, PreparedQuestion, Rejection};
use crate::scoring::{self, ScoreSignals};

/// Everything derivable from text alone.
#[derive(Debug, Clone)]
pub struct LexicalAnalysis {
    pub question: PreparedQuestion,
    pub question_concepts: ConceptSet,
    pub answer_concepts: ConceptSet,
    pub content_concepts: ConceptSet,
    pub contradiction: ContradictionReport,
    pub quantity_mismatch: bool,
    pub taxonomy: TaxonomyOutcome,
    /// Share of question tokens the puzzle also uses.
    pub token_overlap: f64,
    /// Share of question concepts among the puzzle's entities and inferred concepts.
    pub domain_overlap: f64,
    pub modality_mismatch: bool,
}

pub fn lexical(question: &str, knowledge: &ProblemKnowledge) -> Result<LexicalAnalysis, Rejection> {
    let question = question::prepare(question, knowledge)?;

    let question_concepts = concepts::question_concepts(&question.tokens, &question.lower, knowledge);
    let answer_concepts = concepts::answer_concepts(knowledge);
    let content_concepts = concepts::content_concepts(knowledge);

    let contradiction =
        contradiction::detect_all(&question, &question_concepts, &answer_concepts, knowledge);
    let quantity_mismatch = force_rules::quantity_mismatch(&question, knowledge);
    let taxonomy = force_rules::taxonomy_outcome(&question, knowledge);

    let token_overlap = token_overlap(&question, knowledge);
    let domain_overlap = domain_overlap(&question_concepts, knowledge);
    let answer_modal = contains_any(&knowledge.answer_lower, patterns::MODALITY_MARKERS);

    debug!(
        tokens = question.tokens.len(),
        concepts = question_concepts.len(),
        signals = contradiction.signal_count(),
        quantity_mismatch,
        taxonomy = ?taxonomy,
        token_overlap,
        "lexical analysis"
    );

    Ok(LexicalAnalysis {
        modality_mismatch: question.modal != answer_modal,
        question,
        question_concepts,
        answer_concepts,
        content_concepts,
        contradiction,
        quantity_mismatch,
        taxonomy,
        token_overlap,
        domain_overlap,
    })
}

fn token_overlap(question: &PreparedQuestion, knowledge: &ProblemKnowledge) -> f64 {
    let asked: HashSet<&String> = question.tokens.iter().collect();
    if asked.is_empty() {
        return 0.0;
    }
    let puzzle: HashSet<&String> = knowledge
        .content_tokens
        .iter()
        .chain(&knowledge.answer_tokens)
        .collect();
    asked.iter().filter(|t| puzzle.contains(*t)).count() as f64 / asked.len() as f64
}

fn domain_overlap(question: &ConceptSet, knowledge: &ProblemKnowledge) -> f64 {
    let all = question.all();
    if all.is_empty() {
        return 0.0;
    }
    let hits = all
        .iter()
        .filter(|c| {
            knowledge.entity_set.iter().any(|e| e == *c) || knowledge.inferred_concepts.contains(**c)
        })
        .count();
    hits as f64 / all.len() as f64
}

/// One side (truth or narrative) after similarity and adjustment.
#[derive(Debug, Clone, Default)]
pub struct SideScore {
    pub stats: SimilarityStats,
    /// Highest-similarity selected sentence.
    pub best_sentence: Option<String>,
    pub signals: ScoreSignals,
    /// Adjusted, blended score the ladder reads.
    pub score: f64,
}

/// Lexical analysis plus embedding similarity.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub lexical: LexicalAnalysis,
    pub question_vector: Arc<Vec<f32>>,
    pub answer: SideScore,
    pub content: SideScore,
}

impl Analysis {
    pub fn ladder_inputs<'a>(&'a self, knowledge: &'a ProblemKnowledge) -> LadderInputs<'a> {
        LadderInputs {
            answer_score: self.answer.score,
            content_score: self.content.score,
            strong_mismatch: self.lexical.contradiction.is_strong(),
            antonym_signals: self.lexical.contradiction.signal_count(),
            token_overlap: self.lexical.token_overlap,
            domain_overlap: self.lexical.domain_overlap,
            is_wh: self.lexical.question.is_wh,
            question: &self.lexical.question.text,
            content: &knowledge.content,
            answer: &knowledge.answer,
        }
    }
}

fn as_slices(vectors: &[Arc<Vec<f32>>]) -> Vec<&[f32]> {
    vectors.iter().map(|v| v.as_slice()).collect()
}

/// Embed, compare, and adjust.
pub fn score(
    mut lexical: LexicalAnalysis,
    knowledge: &ProblemKnowledge,
    engine: &EmbeddingEngine,
    config: &RiddleConfig,
) -> RiddleResult<Analysis> {
    concepts::add_embedded_synonyms(
        &mut lexical.question_concepts,
        &lexical.question.tokens,
        knowledge,
        engine,
    )?;

    let k = config.knowledge.top_k_sentences;
    let answer_selected = select_top_k(knowledge, &lexical.question.tokens, &knowledge.answer_sentences, k);
    let content_selected = select_top_k(knowledge, &lexical.question.tokens, &knowledge.content_sentences, k);

    let mut texts = Vec::with_capacity(1 + answer_selected.len() + content_selected.len());
    texts.push(lexical.question.text.clone());
    texts.extend(answer_selected.iter().map(|s| s.text.clone()));
    texts.extend(content_selected.iter().map(|s| s.text.clone()));
    let mut vectors = engine.embed_many(&texts)?.into_iter();

    let question_vector = vectors.next().unwrap_or_default();
    let answer_vectors: Vec<Arc<Vec<f32>>> = vectors.by_ref().take(answer_selected.len()).collect();
    let content_vectors: Vec<Arc<Vec<f32>>> = vectors.collect();

    let answer_stats = SimilarityStats::compute(&question_vector, &as_slices(&answer_vectors));
    let content_stats = SimilarityStats::compute(&question_vector, &as_slices(&content_vectors));

    let q = &lexical.question_concepts;
    let inferred_hits = q
        .all()
        .iter()
        .filter(|c| knowledge.inferred_concepts.contains(**c))
        .count();
    let contextual_hits = q
        .contextual
        .iter()
        .filter(|c| {
            lexical.answer_concepts.contextual.contains(*c)
                || lexical.content_concepts.contextual.contains(*c)
        })
        .count();

    let answer_signals = ScoreSignals {
        strong_mismatch: lexical.contradiction.is_strong(),
        concept_hits: q.hits_in(&lexical.answer_concepts),
        inferred_hits,
        contextual_hits,
        taxonomy: lexical.taxonomy,
        modality_mismatch: lexical.modality_mismatch,
    };
    let content_signals = ScoreSignals {
        strong_mismatch: false,
        concept_hits: q.hits_in(&lexical.content_concepts),
        inferred_hits: 0,
        contextual_hits,
        taxonomy: lexical.taxonomy,
        modality_mismatch: lexical.modality_mismatch,
    };

    let answer = SideScore {
        score: scoring::adjust(answer_stats.max, answer_stats.mean, &answer_signals, &config.scoring),
        best_sentence: answer_stats.best.map(|i| answer_selected[i].text.clone()),
        stats: answer_stats,
        signals: answer_signals,
    };
    let content = SideScore {
        score: scoring::adjust(content_stats.max, content_stats.mean, &content_signals, &config.scoring),
        best_sentence: content_stats.best.map(|i| content_selected[i].text.clone()),
        stats: content_stats,
        signals: content_signals,
    };

    debug!(
        answer_raw = answer.stats.max,
        answer_score = answer.score,
        content_raw = content.stats.max,
        content_score = content.score,
        "similarity scored"
    );

    Ok(Analysis {
        lexical,
        question_vector,
        answer,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_vectors_feed_similarity_stats() {
        let query = Arc::new(vec![1.0_f32, 0.0]);
        let candidates = vec![Arc::new(vec![0.0_f32, 1.0]), Arc::new(vec![1.0_f32, 0.0])];
        let stats = SimilarityStats::compute(&query, &as_slices(&candidates));
        assert_eq!(stats.best, Some(1));
        assert!((stats.max - 1.0).abs() < 1e-6);
        assert!((stats.mean - 0.5).abs() < 1e-6);
    }
}
