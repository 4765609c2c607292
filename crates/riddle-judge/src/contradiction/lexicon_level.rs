//! Direct antonym lookup between question tokens and the truth.

use std::collections::HashSet;

use riddle_knowledge::ProblemKnowledge;

use crate::question::PreparedQuestion;

/// Fires when a question token's antonym is an answer token or an
/// inferred concept, and the question does not also use that antonym.
pub fn detect(question: &PreparedQuestion, knowledge: &ProblemKnowledge) -> bool {
    let answer: HashSet<&str> = knowledge
        .answer_tokens
        .iter()
        .chain(&knowledge.inferred_concepts)
        .map(String::as_str)
        .collect();
    let asked: HashSet<&str> = question.tokens.iter().map(String::as_str).collect();

    question.tokens.iter().any(|token| {
        knowledge
            .antonyms_of(token)
            .iter()
            .any(|opposite| answer.contains(opposite.as_str()) && !asked.contains(opposite.as_str()))
    })
}
