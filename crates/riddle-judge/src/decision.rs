//! The v9 threshold ladder.

use riddle_core::config::ThresholdConfig;
use riddle_core::traits::{AmbiguityContext, IAmbiguityResolver};
use riddle_core::JudgeResult;
use serde::Serialize;
use tracing::{debug, warn};

/// Which rule produced a heuristic label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionPath {
    Rejected,
    QuantityForce,
    TaxonomyForce,
    StrongMismatch,
    Decisive,
    Yes,
    No,
    ContextMismatch,
    Resolver,
    MismatchFallthrough,
    Fallthrough,
}

impl DecisionPath {
    const ORDER: [DecisionPath; 11] = [
        DecisionPath::Rejected,
        DecisionPath::QuantityForce,
        DecisionPath::TaxonomyForce,
        DecisionPath::StrongMismatch,
        DecisionPath::Decisive,
        DecisionPath::Yes,
        DecisionPath::No,
        DecisionPath::ContextMismatch,
        DecisionPath::Resolver,
        DecisionPath::MismatchFallthrough,
        DecisionPath::Fallthrough,
    ];

    /// Position scaled into `[0, 1]`, used as a classifier feature.
    pub fn encoded(self) -> f64 {
        let index = Self::ORDER.iter().position(|p| *p == self).unwrap_or(0);
        index as f64 / (Self::ORDER.len() - 1) as f64
    }

    /// Set by a force rule rather than by similarity.
    pub fn is_forced(self) -> bool {
        matches!(self, DecisionPath::QuantityForce | DecisionPath::TaxonomyForce)
    }
}

/// What the ladder looks at.
#[derive(Debug, Clone, Copy)]
pub struct LadderInputs<'a> {
    pub answer_score: f64,
    pub content_score: f64,
    pub strong_mismatch: bool,
    pub antonym_signals: u8,
    pub token_overlap: f64,
    pub domain_overlap: f64,
    pub is_wh: bool,
    pub question: &'a str,
    pub content: &'a str,
    pub answer: &'a str,
}

/// A label for the positive form of the question, before inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub label: JudgeResult,
    pub path: DecisionPath,
}

impl Decision {
    pub fn new(label: JudgeResult, path: DecisionPath) -> Self {
        Self { label, path }
    }
}

/// Low similarity with little shared vocabulary, or a wh-question that
/// barely touches the puzzle.
pub fn is_contextual_mismatch(inputs: &LadderInputs<'_>, t: &ThresholdConfig) -> bool {
    let best = inputs.answer_score.max(inputs.content_score);
    let unrelated = best < t.context_similarity
        && inputs.token_overlap < t.context_token_overlap
        && inputs.domain_overlap < t.context_domain_overlap;
    let idle_wh = inputs.is_wh && inputs.token_overlap < t.wh_token_overlap;
    unrelated || idle_wh
}

/// First matching rule wins.
pub fn decide(
    inputs: &LadderInputs<'_>,
    t: &ThresholdConfig,
    resolver: &dyn IAmbiguityResolver,
) -> Decision {
    let a = inputs.answer_score;
    let c = inputs.content_score;

    if inputs.strong_mismatch && a > t.strong_mismatch_answer {
        return Decision::new(JudgeResult::No, DecisionPath::StrongMismatch);
    }
    if a >= t.decisive_answer && c >= t.decisive_content {
        return Decision::new(JudgeResult::Decisive, DecisionPath::Decisive);
    }
    if a >= t.yes_answer {
        return Decision::new(JudgeResult::Yes, DecisionPath::Yes);
    }
    if c >= t.no_content && a <= t.no_answer_max {
        return Decision::new(JudgeResult::No, DecisionPath::No);
    }
    if is_contextual_mismatch(inputs, t) {
        return Decision::new(JudgeResult::Irrelevant, DecisionPath::ContextMismatch);
    }

    if inputs.strong_mismatch {
        let best = a.max(c);
        if (t.ambiguous_low..=t.ambiguous_high).contains(&best) {
            let context = AmbiguityContext {
                question: inputs.question,
                content: inputs.content,
                answer: inputs.answer,
                answer_score: a,
                content_score: c,
                antonym_signals: inputs.antonym_signals,
            };
            match resolver.resolve(&context) {
                Ok(Some(label)) => {
                    debug!(resolver = resolver.name(), %label, "ambiguity resolved externally");
                    return Decision::new(label, DecisionPath::Resolver);
                }
                Ok(None) => {}
                Err(e) => warn!(resolver = resolver.name(), error = %e, "ambiguity resolver failed"),
            }
        }
        return Decision::new(JudgeResult::No, DecisionPath::MismatchFallthrough);
    }

    if a >= c {
        Decision::new(JudgeResult::Yes, DecisionPath::Fallthrough)
    } else {
        Decision::new(JudgeResult::No, DecisionPath::Fallthrough)
    }
}

#[cfg(test)]
mod tests {
    use riddle_core::errors::{RiddleError, RiddleResult};
    use riddle_core::traits::NoOpResolver;

    use super::*;

    fn inputs(a: f64, c: f64) -> LadderInputs<'static> {
        LadderInputs {
            answer_score: a,
            content_score: c,
            strong_mismatch: false,
            antonym_signals: 0,
            token_overlap: 1.0,
            domain_overlap: 1.0,
            is_wh: false,
            question: "q",
            content: "c",
            answer: "a",
        }
    }

    fn run(i: &LadderInputs<'_>) -> Decision {
        decide(i, &ThresholdConfig::default(), &NoOpResolver)
    }

    struct Always(JudgeResult);

    impl IAmbiguityResolver for Always {
        fn resolve(&self, _: &AmbiguityContext<'_>) -> RiddleResult<Option<JudgeResult>> {
            Ok(Some(self.0))
        }
        fn name(&self) -> &str {
            "always"
        }
    }

    struct Broken;

    impl IAmbiguityResolver for Broken {
        fn resolve(&self, _: &AmbiguityContext<'_>) -> RiddleResult<Option<JudgeResult>> {
            Err(RiddleError::ResolverFailed { reason: "offline".into() })
        }
        fn name(&self) -> &str {
            "broken"
        }
    }

    #[test]
    fn ladder_order() {
        assert_eq!(run(&inputs(0.9, 0.6)).path, DecisionPath::Decisive);
        assert_eq!(run(&inputs(0.9, 0.1)).path, DecisionPath::Yes);
        assert_eq!(run(&inputs(0.3, 0.5)).label, JudgeResult::No);
        assert_eq!(run(&inputs(0.3, 0.5)).path, DecisionPath::No);
    }

    #[test]
    fn strong_mismatch_beats_decisive() {
        let mut i = inputs(0.95, 0.9);
        i.strong_mismatch = true;
        assert_eq!(run(&i), Decision::new(JudgeResult::No, DecisionPath::StrongMismatch));
    }

    #[test]
    fn wh_question_without_overlap_is_irrelevant() {
        let mut i = inputs(0.3, 0.2);
        i.is_wh = true;
        i.token_overlap = 0.0;
        assert_eq!(run(&i).label, JudgeResult::Irrelevant);
    }

    #[test]
    fn fallthrough_picks_larger_side() {
        assert_eq!(run(&inputs(0.55, 0.3)).label, JudgeResult::Yes);
        assert_eq!(run(&inputs(0.2, 0.4)).label, JudgeResult::No);
    }

    #[test]
    fn resolver_only_consulted_in_band_with_mismatch() {
        let t = ThresholdConfig::default();
        let mut i = inputs(0.45, 0.2);
        i.strong_mismatch = true;
        let d = decide(&i, &t, &Always(JudgeResult::Irrelevant));
        assert_eq!(d.path, DecisionPath::Resolver);

        let d = decide(&inputs(0.45, 0.2), &t, &Always(JudgeResult::Irrelevant));
        assert_eq!(d.path, DecisionPath::Fallthrough);
    }

    #[test]
    fn resolver_failure_falls_back_to_no() {
        let mut i = inputs(0.45, 0.2);
        i.strong_mismatch = true;
        let d = decide(&i, &ThresholdConfig::default(), &Broken);
        assert_eq!(d, Decision::new(JudgeResult::No, DecisionPath::MismatchFallthrough));
    }

    #[test]
    fn path_encoding_spans_unit_interval() {
        assert_eq!(DecisionPath::Rejected.encoded(), 0.0);
        assert_eq!(DecisionPath::Fallthrough.encoded(), 1.0);
        assert!(DecisionPath::QuantityForce.is_forced());
    }
}
