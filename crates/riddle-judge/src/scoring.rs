//! Similarity adjustment for the heuristic path.

use riddle_core::config::ScoringConfig;
use serde::Serialize;

use crate::force_rules::TaxonomyOutcome;

/// Signals that move one side's raw similarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreSignals {
    pub strong_mismatch: bool,
    pub concept_hits: usize,
    pub inferred_hits: usize,
    pub contextual_hits: usize,
    pub taxonomy: TaxonomyOutcome,
    pub modality_mismatch: bool,
}

/// Apply penalties and bonuses in order, clamp, then blend with the mean
/// similarity: `w * adjusted + (1 - w) * raw_avg`.
pub fn adjust(raw_max: f64, raw_avg: f64, signals: &ScoreSignals, config: &ScoringConfig) -> f64 {
    let mut score = raw_max;

    if signals.strong_mismatch {
        score -= config.antonym_penalty;
    }
    if signals.concept_hits > 0 {
        let mut bonus = (config.concept_bonus * signals.concept_hits as f64).min(config.concept_bonus_cap);
        if signals.concept_hits >= 2 {
            bonus *= config.multi_concept_scale;
        }
        score += bonus;
    }
    if signals.inferred_hits > 0 {
        score += config.inferred_bonus;
    }
    if signals.contextual_hits > 0 {
        score += config.contextual_bonus;
    }
    match signals.taxonomy {
        TaxonomyOutcome::Related => score += config.taxonomy_bonus,
        TaxonomyOutcome::CoveredGeneralization => score += config.generalization_bonus,
        TaxonomyOutcome::Generalization => score -= config.generalization_penalty,
        TaxonomyOutcome::Unrelated => {}
    }
    if signals.modality_mismatch {
        score -= config.modality_penalty;
    }

    let adjusted = score.clamp(-1.0, 1.0);
    config.adjusted_weight * adjusted + (1.0 - config.adjusted_weight) * raw_avg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn no_signals_is_plain_blend() {
        let cfg = ScoringConfig::default();
        let s = adjust(0.8, 0.4, &ScoreSignals::default(), &cfg);
        assert!(close(s, 0.7 * 0.8 + 0.3 * 0.4));
    }

    #[test]
    fn antonym_penalty_lowers_score() {
        let cfg = ScoringConfig::default();
        let plain = adjust(0.8, 0.4, &ScoreSignals::default(), &cfg);
        let penalized = adjust(
            0.8,
            0.4,
            &ScoreSignals {
                strong_mismatch: true,
                ..ScoreSignals::default()
            },
            &cfg,
        );
        assert!(close(plain - penalized, 0.7 * cfg.antonym_penalty));
    }

    #[test]
    fn concept_bonus_capped_then_scaled() {
        let cfg = ScoringConfig::default();
        let one = adjust(0.0, 0.0, &ScoreSignals { concept_hits: 1, ..Default::default() }, &cfg);
        assert!(close(one, 0.7 * cfg.concept_bonus));
        let many = adjust(0.0, 0.0, &ScoreSignals { concept_hits: 10, ..Default::default() }, &cfg);
        assert!(close(many, 0.7 * cfg.concept_bonus_cap * cfg.multi_concept_scale));
    }

    #[test]
    fn clamped_before_blend() {
        let cfg = ScoringConfig::default();
        let s = adjust(
            1.0,
            1.0,
            &ScoreSignals {
                concept_hits: 5,
                inferred_hits: 1,
                contextual_hits: 1,
                taxonomy: TaxonomyOutcome::Related,
                ..Default::default()
            },
            &cfg,
        );
        assert!(close(s, 1.0));
    }
}
