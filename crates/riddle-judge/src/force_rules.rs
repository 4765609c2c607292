//! Deterministic overrides decided before any similarity is computed.

use riddle_knowledge::text::contains_any;
use riddle_knowledge::ProblemKnowledge;
use serde::Serialize;

use crate::question::PreparedQuestion;

/// How the question relates to the truth through the is-a taxonomy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyOutcome {
    #[default]
    Unrelated,
    /// Specific/general relation without a generalizing question: small bonus.
    Related,
    /// Hedged question about a category the truth only names by instance,
    /// and an exact concept also matches.
    CoveredGeneralization,
    /// As above with no exact match: forces `no`.
    Generalization,
}

impl TaxonomyOutcome {
    pub fn is_match(self) -> bool {
        !matches!(self, TaxonomyOutcome::Unrelated)
    }

    pub fn forces_no(self) -> bool {
        matches!(self, TaxonomyOutcome::Generalization)
    }
}

/// Totality in the question against singularity in the truth.
pub fn quantity_mismatch(question: &PreparedQuestion, knowledge: &ProblemKnowledge) -> bool {
    let patterns = &knowledge.quantity_patterns;
    patterns.answer_is_singular()
        && contains_any(&question.lower, patterns.totality.as_slice())
        && !contains_any(&question.lower, patterns.singularity.as_slice())
}

/// Classify the taxonomy relation between question and truth tokens.
pub fn taxonomy_outcome(question: &PreparedQuestion, knowledge: &ProblemKnowledge) -> TaxonomyOutcome {
    let depth = knowledge.config().taxonomy_depth;
    let answer = &knowledge.answer_tokens;

    // (abstract term, whether the truth names it itself)
    let mut relations: Vec<(&str, bool)> = Vec::new();
    for q in &question.tokens {
        for a in answer {
            if q == a {
                continue;
            }
            if knowledge.taxonomy.is_hypernym_of(q, a, depth) {
                relations.push((q.as_str(), answer.contains(q)));
            } else if knowledge.taxonomy.is_hypernym_of(a, q, depth) {
                relations.push((a.as_str(), true));
            }
        }
    }
    if relations.is_empty() {
        return TaxonomyOutcome::Unrelated;
    }

    let uncovered = relations.iter().any(|(_, covered)| !covered);
    if !(question.hedged && uncovered) {
        return TaxonomyOutcome::Related;
    }

    let abstract_terms: Vec<&str> = relations.iter().map(|(term, _)| *term).collect();
    let exact_match = question
        .tokens
        .iter()
        .any(|q| !abstract_terms.contains(&q.as_str()) && answer.contains(q));
    if exact_match {
        TaxonomyOutcome::CoveredGeneralization
    } else {
        TaxonomyOutcome::Generalization
    }
}
