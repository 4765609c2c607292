use serde::{Deserialize, Serialize};

use super::defaults;

/// Decision ladder thresholds, applied to blended similarities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Rung 1: strong antonym mismatch still above this answer score → no.
    pub strong_mismatch_answer: f64,
    /// Rung 2: both of these → decisive.
    pub decisive_answer: f64,
    pub decisive_content: f64,
    /// Rung 3: answer score at or above → yes.
    pub yes_answer: f64,
    /// Rung 4: content at or above and answer at or below → no.
    pub no_content: f64,
    pub no_answer_max: f64,
    /// Contextual mismatch: both similarities under this...
    pub context_similarity: f64,
    /// ...and token overlap under this...
    pub context_token_overlap: f64,
    /// ...and domain-keyword overlap under this → irrelevant.
    pub context_domain_overlap: f64,
    /// Generic wh-question with token overlap under this → irrelevant.
    pub wh_token_overlap: f64,
    /// Answer band in which the ambiguity resolver may be consulted.
    pub ambiguous_low: f64,
    pub ambiguous_high: f64,
    /// Raw answer similarity at which a strong mismatch hard-guards to no.
    pub hard_guard_answer: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            strong_mismatch_answer: defaults::DEFAULT_STRONG_MISMATCH_ANSWER,
            decisive_answer: defaults::DEFAULT_DECISIVE_ANSWER,
            decisive_content: defaults::DEFAULT_DECISIVE_CONTENT,
            yes_answer: defaults::DEFAULT_YES_ANSWER,
            no_content: defaults::DEFAULT_NO_CONTENT,
            no_answer_max: defaults::DEFAULT_NO_ANSWER_MAX,
            context_similarity: defaults::DEFAULT_CONTEXT_SIMILARITY,
            context_token_overlap: defaults::DEFAULT_CONTEXT_TOKEN_OVERLAP,
            context_domain_overlap: defaults::DEFAULT_CONTEXT_DOMAIN_OVERLAP,
            wh_token_overlap: defaults::DEFAULT_WH_TOKEN_OVERLAP,
            ambiguous_low: defaults::DEFAULT_AMBIGUOUS_LOW,
            ambiguous_high: defaults::DEFAULT_AMBIGUOUS_HIGH,
            hard_guard_answer: defaults::DEFAULT_HARD_GUARD_ANSWER,
        }
    }
}
