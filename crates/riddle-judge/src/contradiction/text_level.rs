//! Raw-text cross-match against the puzzle's active antonym axes.

use riddle_knowledge::text::contains_any;
use riddle_knowledge::ProblemKnowledge;
use riddle_lexicon::AntonymAxis;

use super::PoleHits;
use crate::question::PreparedQuestion;

fn poles(text: &str, axis: &AntonymAxis) -> PoleHits {
    PoleHits {
        positive: contains_any(text, axis.positive.as_slice()),
        negative: contains_any(text, axis.negative.as_slice()),
    }
}

/// A question token outside the axis vocabulary that the puzzle also uses.
fn has_concrete_target(question: &PreparedQuestion, axis: &AntonymAxis, knowledge: &ProblemKnowledge) -> bool {
    question.tokens.iter().any(|t| {
        !axis.positive.contains(t)
            && !axis.negative.contains(t)
            && (knowledge.answer_tokens.contains(t) || knowledge.content_tokens.contains(t))
    })
}

pub fn detect(question: &PreparedQuestion, knowledge: &ProblemKnowledge) -> bool {
    knowledge.antonym_axes.iter().any(|axis| {
        if axis.requires_target && !has_concrete_target(question, axis, knowledge) {
            return false;
        }
        poles(&question.lower, axis).crosses(poles(&knowledge.answer_lower, axis))
    })
}
