//! Lexical pre-filter choosing which sentences get embedded.

use std::collections::HashSet;

use crate::knowledge::ProblemKnowledge;
use crate::text::Locale;

const PARTIAL_CREDIT: f64 = 0.5;
const SHORT_SENTENCE_BONUS: f64 = 0.2;
const SHORT_SENTENCE_TOKENS: usize = 8;

/// Shortest token allowed to match inside another. Korean stems are often
/// two syllables, so the floor is lower there.
fn min_substring_chars(locale: Locale) -> usize {
    match locale {
        Locale::Korean => 2,
        Locale::English => 3,
    }
}

/// A sentence with its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// Score each sentence against the question tokens: one point per exact
/// token hit, half a point for a synonym or substring hit, and a small
/// bonus for short sentences.
pub fn score_sentences(
    knowledge: &ProblemKnowledge,
    question_tokens: &[String],
    sentences: &[String],
) -> Vec<ScoredSentence> {
    let tokenizer = knowledge.tokenizer();
    let question: Vec<&String> = {
        let mut seen = HashSet::new();
        question_tokens.iter().filter(|t| seen.insert(*t)).collect()
    };

    sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let tokens = tokenizer.tokenize(sentence);
            let token_set: HashSet<&String> = tokens.iter().collect();
            let mut score = 0.0;
            for q in &question {
                if token_set.contains(*q) {
                    score += 1.0;
                } else if tokens.iter().any(|t| partial_match(knowledge, q, t)) {
                    score += PARTIAL_CREDIT;
                }
            }
            if tokens.len() <= SHORT_SENTENCE_TOKENS {
                score += SHORT_SENTENCE_BONUS;
            }
            ScoredSentence {
                index,
                text: sentence.clone(),
                score,
            }
        })
        .collect()
}

fn partial_match(knowledge: &ProblemKnowledge, question_token: &str, sentence_token: &str) -> bool {
    let shorter = question_token.chars().count().min(sentence_token.chars().count());
    if shorter >= min_substring_chars(knowledge.locale)
        && (sentence_token.contains(question_token) || question_token.contains(sentence_token))
    {
        return true;
    }
    knowledge.synonyms_of(question_token).contains(sentence_token)
}

/// The `k` best sentences, highest score first; ties keep text order.
pub fn select_top_k(
    knowledge: &ProblemKnowledge,
    question_tokens: &[String],
    sentences: &[String],
    k: usize,
) -> Vec<ScoredSentence> {
    let mut scored = score_sentences(knowledge, question_tokens, sentences);
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(k);
    scored
}
