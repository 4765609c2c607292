//! Cross-match of extracted concept sets against active antonym axes.

use riddle_knowledge::ProblemKnowledge;
use riddle_lexicon::AntonymAxis;

use super::PoleHits;
use crate::concepts::ConceptSet;

fn poles(concepts: &ConceptSet, axis: &AntonymAxis) -> PoleHits {
    PoleHits {
        positive: axis.positive.iter().any(|w| concepts.contains(w)),
        negative: axis.negative.iter().any(|w| concepts.contains(w)),
    }
}

pub fn detect(question: &ConceptSet, answer: &ConceptSet, knowledge: &ProblemKnowledge) -> bool {
    knowledge
        .antonym_axes
        .iter()
        .any(|axis| poles(question, axis).crosses(poles(answer, axis)))
}
