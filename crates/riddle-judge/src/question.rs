//! Question preparation: normalization, negation, length bounds.

use riddle_core::config::KnowledgeConfig;
use riddle_knowledge::text::{contains_any, normalize_text, strip_negation};
use riddle_knowledge::ProblemKnowledge;
use riddle_lexicon::data::patterns;

/// Why a question was turned away before any scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    TooLong,
    EmptyPuzzle,
}

/// A question ready for analysis, always in its positive form.
#[derive(Debug, Clone)]
pub struct PreparedQuestion {
    pub original: String,
    /// Normalized, negation stripped.
    pub text: String,
    pub lower: String,
    /// Flip the final yes/no.
    pub negated: bool,
    pub tokens: Vec<String>,
    /// Opens with an interrogative rather than asking yes/no.
    pub is_wh: bool,
    /// Uses generalizing vocabulary ("some kind of", "any").
    pub hedged: bool,
    pub modal: bool,
}

pub fn prepare(question: &str, knowledge: &ProblemKnowledge) -> Result<PreparedQuestion, Rejection> {
    if knowledge.is_empty() {
        return Err(Rejection::EmptyPuzzle);
    }
    let normalized = normalize_text(question);
    check_length(&normalized, knowledge.config())?;

    let negation = strip_negation(&normalized);
    let lower = negation.text.to_lowercase();
    let tokens = knowledge.tokenizer().tokenize(&negation.text);
    let is_wh = starts_with_wh(&lower);

    Ok(PreparedQuestion {
        original: question.to_string(),
        hedged: contains_any(&lower, patterns::GENERALIZATION_MARKERS),
        modal: contains_any(&lower, patterns::MODALITY_MARKERS),
        text: negation.text,
        negated: negation.invert,
        lower,
        tokens,
        is_wh,
    })
}

fn check_length(normalized: &str, config: &KnowledgeConfig) -> Result<(), Rejection> {
    let chars = normalized.chars().count();
    if chars < config.min_question_chars {
        Err(Rejection::TooShort)
    } else if chars > config.max_question_chars {
        Err(Rejection::TooLong)
    } else {
        Ok(())
    }
}

/// English interrogatives must lead the question; Korean ones may appear
/// anywhere since the verb comes last.
fn starts_with_wh(lower: &str) -> bool {
    let first = lower
        .split(|c: char| !c.is_alphanumeric())
        .find(|w| !w.is_empty())
        .unwrap_or("");
    patterns::WH_WORDS.iter().any(|wh| {
        if wh.is_ascii() {
            first == *wh
        } else {
            lower.contains(wh)
        }
    })
}
