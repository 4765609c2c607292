//! Hard guards applied after classification. They take precedence over
//! the classifier.

use riddle_core::config::ThresholdConfig;
use riddle_core::JudgeResult;
use serde::Serialize;

use crate::analysis::Analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HardGuard {
    /// Totality asked, singularity in the truth.
    QuantityMismatch,
    /// Strong antonym mismatch with very high raw truth similarity.
    StrongMismatch,
}

/// Guards that fire for this analysis, in precedence order.
pub fn fired(analysis: &Analysis, thresholds: &ThresholdConfig) -> Vec<HardGuard> {
    let mut guards = Vec::new();
    if analysis.lexical.quantity_mismatch {
        guards.push(HardGuard::QuantityMismatch);
    }
    if analysis.lexical.contradiction.is_strong()
        && analysis.answer.stats.max >= thresholds.hard_guard_answer
    {
        guards.push(HardGuard::StrongMismatch);
    }
    guards
}

/// The label every guard forces, before negation inversion.
pub const GUARDED_LABEL: JudgeResult = JudgeResult::No;
