use serde::{Deserialize, Serialize};

use super::defaults;

/// Bonus and penalty magnitudes applied to raw similarities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub antonym_penalty: f64,
    /// Bonus per matched concept, capped at `concept_bonus_cap`.
    pub concept_bonus: f64,
    pub concept_bonus_cap: f64,
    /// Multiplier when two or more concepts match.
    pub multi_concept_scale: f64,
    pub inferred_bonus: f64,
    pub contextual_bonus: f64,
    pub taxonomy_bonus: f64,
    pub generalization_penalty: f64,
    pub generalization_bonus: f64,
    pub modality_penalty: f64,
    /// Weight of the adjusted max similarity; the rest goes to the raw average.
    pub adjusted_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            antonym_penalty: defaults::DEFAULT_ANTONYM_PENALTY,
            concept_bonus: defaults::DEFAULT_CONCEPT_BONUS,
            concept_bonus_cap: defaults::DEFAULT_CONCEPT_BONUS_CAP,
            multi_concept_scale: defaults::DEFAULT_MULTI_CONCEPT_SCALE,
            inferred_bonus: defaults::DEFAULT_INFERRED_BONUS,
            contextual_bonus: defaults::DEFAULT_CONTEXTUAL_BONUS,
            taxonomy_bonus: defaults::DEFAULT_TAXONOMY_BONUS,
            generalization_penalty: defaults::DEFAULT_GENERALIZATION_PENALTY,
            generalization_bonus: defaults::DEFAULT_GENERALIZATION_BONUS,
            modality_penalty: defaults::DEFAULT_MODALITY_PENALTY,
            adjusted_weight: defaults::DEFAULT_ADJUSTED_WEIGHT,
        }
    }
}
