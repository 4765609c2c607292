//! Final-guess scoring: how close a player's free-text solution is to the
//! truth, as a 0-100 percentage.

use std::collections::BTreeSet;

use riddle_core::config::KnowledgeConfig;
use riddle_core::errors::RiddleResult;
use riddle_embeddings::{cosine_similarity, EmbeddingEngine};
use riddle_knowledge::text::{normalize_text, Tokenizer};
use riddle_knowledge::{ProblemKnowledge, TaxonomyGraph};
use riddle_lexicon::Lexicon;
use tracing::warn;

const SEMANTIC_WEIGHT: f64 = 0.6;
const KEYWORD_WEIGHT: f64 = 0.4;
const ANTONYM_PENALTY: f64 = 0.25;
/// Share of the excess kept when a guess is closer to the narrative than
/// to the truth.
const CONTEXT_DAMPING: f64 = 0.5;
/// Credit for a token related only through the taxonomy.
const TAXONOMY_CREDIT: f64 = 0.5;
const FLOOR: f64 = 0.15;
const CEIL: f64 = 0.9;
const CURVE: f64 = 0.8;

/// Scores final guesses with the judge's embedding and lexical machinery.
pub struct AnswerScorer<'a> {
    pub engine: &'a EmbeddingEngine,
    pub lexicon: &'a Lexicon,
    pub taxonomy: &'a TaxonomyGraph,
    pub config: &'a KnowledgeConfig,
}

impl AnswerScorer<'_> {
    /// `0` for empty input, `100` for a normalized exact match. Falls back to
    /// token Jaccard overlap if embedding fails.
    pub fn score(
        &self,
        user: &str,
        correct: &str,
        content: Option<&str>,
        knowledge: Option<&ProblemKnowledge>,
    ) -> u8 {
        let user = normalize_text(user);
        let correct = normalize_text(correct);
        if user.is_empty() || correct.is_empty() {
            return 0;
        }
        if user.to_lowercase() == correct.to_lowercase() {
            return 100;
        }

        let tokenizer = match knowledge {
            Some(k) => k.tokenizer(),
            None => Tokenizer::new(self.lexicon, self.config),
        };
        let user_tokens: BTreeSet<String> = tokenizer.unique(&user).into_iter().collect();
        let correct_tokens: BTreeSet<String> = tokenizer.unique(&correct).into_iter().collect();

        let semantic = match self.semantic(&user, &correct, content) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "answer similarity falling back to lexical overlap");
                return jaccard_percent(&user_tokens, &correct_tokens);
            }
        };

        let keyword = self.keyword_overlap(&user_tokens, &correct_tokens, knowledge);
        let mut combined = SEMANTIC_WEIGHT * semantic + KEYWORD_WEIGHT * keyword;
        if self.has_antonym(&user_tokens, &correct_tokens, knowledge) {
            combined -= ANTONYM_PENALTY;
        }
        rescale(combined)
    }

    fn semantic(&self, user: &str, correct: &str, content: Option<&str>) -> RiddleResult<f64> {
        let user_vec = self.engine.embed(user)?;
        let correct_vec = self.engine.embed(correct)?;
        let mut sim = cosine_similarity(&user_vec, &correct_vec);

        if let Some(content) = content.map(normalize_text).filter(|c| !c.is_empty()) {
            let content_vec = self.engine.embed(&content)?;
            let context = cosine_similarity(&user_vec, &content_vec);
            if context > sim {
                sim -= (context - sim) * CONTEXT_DAMPING;
            }
        }
        Ok(sim)
    }

    /// Share of truth tokens the guess covers. Synonyms count fully,
    /// hypernym/hyponym relatives count half.
    fn keyword_overlap(
        &self,
        user: &BTreeSet<String>,
        correct: &BTreeSet<String>,
        knowledge: Option<&ProblemKnowledge>,
    ) -> f64 {
        if correct.is_empty() {
            return 0.0;
        }
        let taxonomy = knowledge.map_or(self.taxonomy, |k| &k.taxonomy);
        let depth = self.config.taxonomy_depth;

        let credit: f64 = correct
            .iter()
            .map(|c| {
                if user.contains(c) || user.iter().any(|u| self.are_synonyms(u, c, knowledge)) {
                    1.0
                } else if user
                    .iter()
                    .any(|u| taxonomy.is_hypernym_of(u, c, depth) || taxonomy.is_hypernym_of(c, u, depth))
                {
                    TAXONOMY_CREDIT
                } else {
                    0.0
                }
            })
            .sum();
        credit / correct.len() as f64
    }

    fn are_synonyms(&self, a: &str, b: &str, knowledge: Option<&ProblemKnowledge>) -> bool {
        match knowledge {
            Some(k) => k.synonyms_of(a).contains(b),
            None => self.lexicon.are_synonyms(a, b),
        }
    }

    fn has_antonym(
        &self,
        user: &BTreeSet<String>,
        correct: &BTreeSet<String>,
        knowledge: Option<&ProblemKnowledge>,
    ) -> bool {
        user.iter().any(|u| {
            let opposites: BTreeSet<String> = match knowledge {
                Some(k) => k.antonyms_of(u),
                None => self.lexicon.antonyms_of(u).cloned().unwrap_or_default(),
            };
            opposites
                .iter()
                .any(|o| correct.contains(o) && !user.contains(o))
        })
    }
}

/// Map a combined score onto 0-100 with a gentle curve.
fn rescale(combined: f64) -> u8 {
    let x = ((combined - FLOOR) / (CEIL - FLOOR)).clamp(0.0, 1.0);
    (x.powf(CURVE) * 100.0).round() as u8
}

fn jaccard_percent(a: &BTreeSet<String>, b: &BTreeSet<String>) -> u8 {
    let union = a.union(b).count();
    if union == 0 {
        return 0;
    }
    let shared = a.intersection(b).count();
    ((shared as f64 / union as f64) * 100.0).round() as u8
}
