//! The fixed-order v10 feature vector.

use riddle_core::constants::V10_FEATURE_COUNT;
use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::decision::DecisionPath;

/// Feature names in vector order. A weight file must list exactly these.
pub const FEATURE_NAMES: [&str; V10_FEATURE_COUNT] = [
    "answer_raw_max",
    "answer_raw_avg",
    "content_raw_max",
    "content_raw_avg",
    "pair_answer",
    "pair_content",
    "token_overlap",
    "domain_overlap",
    "answer_concept_hits",
    "content_concept_hits",
    "negation",
    "modality",
    "question_length",
    "antonym_signals",
    "quantity_mismatch",
    "taxonomy_match",
    "force_flag",
    "v9_path",
];

/// Concept hit counts saturate here before scaling into `[0, 1]`.
const CONCEPT_HIT_SATURATION: f64 = 5.0;

/// Pair-embedding similarities for both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PairSimilarities {
    pub answer: f64,
    pub content: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct V10Features {
    pub values: [f64; V10_FEATURE_COUNT],
}

impl Default for V10Features {
    fn default() -> Self {
        Self {
            values: [0.0; V10_FEATURE_COUNT],
        }
    }
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

fn hits(n: usize) -> f64 {
    (n as f64).min(CONCEPT_HIT_SATURATION) / CONCEPT_HIT_SATURATION
}

impl V10Features {
    pub fn extract(
        analysis: &Analysis,
        pairs: PairSimilarities,
        v9_path: DecisionPath,
        max_question_chars: usize,
    ) -> Self {
        let lex = &analysis.lexical;
        let question_chars = lex.question.text.chars().count() as f64;
        Self {
            values: [
                analysis.answer.stats.max,
                analysis.answer.stats.mean,
                analysis.content.stats.max,
                analysis.content.stats.mean,
                pairs.answer,
                pairs.content,
                lex.token_overlap,
                lex.domain_overlap,
                hits(analysis.answer.signals.concept_hits),
                hits(analysis.content.signals.concept_hits),
                flag(lex.question.negated),
                flag(lex.question.modal),
                (question_chars / max_question_chars.max(1) as f64).min(1.0),
                f64::from(lex.contradiction.signal_count()) / 3.0,
                flag(lex.quantity_mismatch),
                flag(lex.taxonomy.is_match()),
                flag(v9_path.is_forced()),
                v9_path.encoded(),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }

    /// `(name, value)` pairs in vector order.
    pub fn named(&self) -> Vec<(&'static str, f64)> {
        FEATURE_NAMES.iter().copied().zip(self.values).collect()
    }
}
