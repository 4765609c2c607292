//! The learned (v10) strategy: feature vector, softmax classifier, hard guards.

pub mod classifier;
pub mod features;
pub mod guards;

use riddle_core::constants::LABEL_COUNT;
use riddle_core::errors::RiddleResult;
use riddle_core::JudgeResult;
use riddle_embeddings::{cosine_similarity, EmbeddingEngine};
use serde::Serialize;

use crate::analysis::Analysis;
use crate::decision::DecisionPath;

pub use classifier::{Prediction, SoftmaxClassifier, WeightFile};
pub use features::{PairSimilarities, V10Features, FEATURE_NAMES};
pub use guards::HardGuard;

/// Raw embedding similarities behind a v10 judgment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RawSimilarities {
    pub answer_max: f64,
    pub answer_avg: f64,
    pub content_max: f64,
    pub content_avg: f64,
    pub pair_answer: f64,
    pub pair_content: f64,
}

/// The heuristic label computed alongside, for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct V9Baseline {
    /// After negation inversion.
    pub label: JudgeResult,
    pub answer_score: f64,
    pub content_score: f64,
    pub path: DecisionPath,
}

impl Default for V9Baseline {
    fn default() -> Self {
        Self {
            label: JudgeResult::Irrelevant,
            answer_score: 0.0,
            content_score: 0.0,
            path: DecisionPath::Rejected,
        }
    }
}

/// Full v10 judgment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct V10Result {
    pub label: JudgeResult,
    pub confidence: f64,
    /// Indexed like [`JudgeResult::ALL`].
    pub probabilities: [f64; LABEL_COUNT],
    pub guards: Vec<HardGuard>,
    pub negated: bool,
    pub features: V10Features,
    pub similarities: RawSimilarities,
    pub baseline: V9Baseline,
}

impl V10Result {
    /// The safe answer for rejected input or a failed pipeline.
    pub fn irrelevant() -> Self {
        Self {
            label: JudgeResult::Irrelevant,
            confidence: 1.0,
            probabilities: [0.0, 0.0, 1.0, 0.0],
            guards: Vec::new(),
            negated: false,
            features: V10Features::default(),
            similarities: RawSimilarities::default(),
            baseline: V9Baseline::default(),
        }
    }

    pub fn probability(&self, label: JudgeResult) -> f64 {
        self.probabilities[label.index()]
    }

    /// Feature names paired with values, for dumps.
    pub fn named_features(&self) -> Vec<(&'static str, f64)> {
        self.features.named()
    }
}

/// Similarity between `question + sentence` and the bare sentence, for the
/// best sentence on each side. Bare sentences were embedded during scoring
/// and come from the cache, so only the two joined texts reach the model.
pub fn pair_similarities(analysis: &Analysis, engine: &EmbeddingEngine) -> RiddleResult<PairSimilarities> {
    let question = &analysis.lexical.question.text;
    let pair = |sentence: &Option<String>| -> RiddleResult<f64> {
        let Some(sentence) = sentence else {
            return Ok(0.0);
        };
        let joined = engine.embed(&format!("{question} {sentence}"))?;
        let bare = engine.embed(sentence)?;
        Ok(cosine_similarity(&joined, &bare))
    };
    Ok(PairSimilarities {
        answer: pair(&analysis.answer.best_sentence)?,
        content: pair(&analysis.content.best_sentence)?,
    })
}
