//! Contradiction detection between a question and the puzzle's truth.
//!
//! Three independent detectors; the number that fire is the signal count.
//! Two or more is a strong antonym mismatch.

pub mod concept_level;
pub mod lexicon_level;
pub mod text_level;

use riddle_knowledge::ProblemKnowledge;
use serde::Serialize;

use crate::concepts::ConceptSet;
use crate::question::PreparedQuestion;

/// Signal count at which a mismatch counts as strong.
pub const STRONG_MISMATCH_SIGNALS: u8 = 2;

/// Which detectors fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContradictionReport {
    pub text_level: bool,
    pub concept_level: bool,
    pub lexicon_level: bool,
}

impl ContradictionReport {
    pub fn signal_count(&self) -> u8 {
        u8::from(self.text_level) + u8::from(self.concept_level) + u8::from(self.lexicon_level)
    }

    pub fn is_strong(&self) -> bool {
        self.signal_count() >= STRONG_MISMATCH_SIGNALS
    }
}

/// Run all three detectors.
pub fn detect_all(
    question: &PreparedQuestion,
    question_concepts: &ConceptSet,
    answer_concepts: &ConceptSet,
    knowledge: &ProblemKnowledge,
) -> ContradictionReport {
    ContradictionReport {
        text_level: text_level::detect(question, knowledge),
        concept_level: concept_level::detect(question_concepts, answer_concepts, knowledge),
        lexicon_level: lexicon_level::detect(question, knowledge),
    }
}

/// Which pole(s) of an axis a side touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PoleHits {
    pub positive: bool,
    pub negative: bool,
}

impl PoleHits {
    /// Exactly one pole on each side, and they differ.
    pub(crate) fn crosses(self, other: PoleHits) -> bool {
        (self.positive && !self.negative && other.negative && !other.positive)
            || (self.negative && !self.positive && other.positive && !other.negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_count_and_strength() {
        let report = ContradictionReport {
            text_level: true,
            concept_level: false,
            lexicon_level: true,
        };
        assert_eq!(report.signal_count(), 2);
        assert!(report.is_strong());
        assert!(!ContradictionReport::default().is_strong());
    }

    #[test]
    fn crossing_requires_one_pole_each() {
        let pos = PoleHits { positive: true, negative: false };
        let neg = PoleHits { positive: false, negative: true };
        let both = PoleHits { positive: true, negative: true };
        assert!(pos.crosses(neg));
        assert!(neg.crosses(pos));
        assert!(!pos.crosses(pos));
        assert!(!both.crosses(neg));
    }
}
