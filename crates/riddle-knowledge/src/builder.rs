//! Builds a [`ProblemKnowledge`] from raw puzzle text.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use dashmap::DashMap;
use riddle_core::config::KnowledgeConfig;
use riddle_core::constants::ANSWER_SEGMENT_SEPARATOR;
use riddle_core::models::{KnowledgeAugmentation, PuzzleInput};
use riddle_core::traits::{IKnowledgeAugmenter, NoOpAugmenter};
use riddle_lexicon::data::patterns;
use riddle_lexicon::Lexicon;
use tracing::{debug, warn};

use crate::knowledge::{ProblemKnowledge, QuantityPatterns};
use crate::taxonomy::TaxonomyGraph;
use crate::text::{contains_any, detect_locale, matched_terms, normalize_text, split_sentences, Tokenizer};

pub struct KnowledgeBuilder {
    config: KnowledgeConfig,
    lexicon: Arc<Lexicon>,
    augmenter: Arc<dyn IKnowledgeAugmenter>,
}

impl KnowledgeBuilder {
    pub fn new(config: KnowledgeConfig, lexicon: Arc<Lexicon>) -> Self {
        Self {
            config,
            lexicon,
            augmenter: Arc::new(NoOpAugmenter),
        }
    }

    pub fn with_augmenter(mut self, augmenter: Arc<dyn IKnowledgeAugmenter>) -> Self {
        self.augmenter = augmenter;
        self
    }

    pub fn config(&self) -> &KnowledgeConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn tokenizer(&self) -> Tokenizer<'_> {
        Tokenizer::new(&self.lexicon, &self.config)
    }

    /// Build the bundle. Augmenter failures are logged and skipped.
    pub fn build(&self, input: &PuzzleInput) -> ProblemKnowledge {
        let content = normalize_text(&input.content);
        let answer = augmented_answer(input);
        let content_lower = content.to_lowercase();
        let answer_lower = answer.to_lowercase();
        let combined_lower = format!("{content_lower} {answer_lower}");

        let augmentation = match self.augmenter.augment(&content, &answer) {
            Ok(a) => a,
            Err(e) => {
                warn!(error = %e, "knowledge augmenter failed, continuing without it");
                KnowledgeAugmentation::default()
            }
        };

        let tokenizer = self.tokenizer();
        let content_tokens = tokenizer.tokenize(&content);
        let answer_tokens = tokenizer.tokenize(&answer);
        let entity_set = rank_entities(
            content_tokens.iter().chain(answer_tokens.iter()),
            self.config.entity_set_size,
        );
        let vocabulary: BTreeSet<&String> = content_tokens.iter().chain(answer_tokens.iter()).collect();

        let mut synonym_map: HashMap<String, BTreeSet<String>> = HashMap::new();
        let mut antonym_map: HashMap<String, BTreeSet<String>> = HashMap::new();
        for token in &vocabulary {
            if let Some(syns) = self.lexicon.synonyms_of(token) {
                synonym_map.insert((*token).clone(), syns.clone());
            }
            if let Some(ants) = self.lexicon.antonyms_of(token) {
                antonym_map.insert((*token).clone(), ants.clone());
            }
        }
        for (word, syns) in &augmentation.synonyms {
            let word = word.to_lowercase();
            let syns: Vec<String> = syns.iter().map(|s| s.to_lowercase()).collect();
            for s in &syns {
                synonym_map.entry(s.clone()).or_default().insert(word.clone());
            }
            synonym_map.entry(word).or_default().extend(syns);
        }

        let antonym_axes = self
            .lexicon
            .axes()
            .iter()
            .filter(|axis| {
                contains_any(&combined_lower, axis.positive.as_slice())
                    && contains_any(&combined_lower, axis.negative.as_slice())
            })
            .cloned()
            .collect::<Vec<_>>();

        let mut taxonomy = TaxonomyGraph::from_edges(self.lexicon.taxonomy_edges());
        for (hypernym, hyponym) in &augmentation.taxonomy_edges {
            taxonomy.add_edge(&hypernym.to_lowercase(), &hyponym.to_lowercase());
        }
        let mut hypernym_map = HashMap::new();
        let mut hyponym_map = HashMap::new();
        for token in &vocabulary {
            let up = taxonomy.hypernyms(token, self.config.taxonomy_depth, self.config.max_hierarchy_per_token);
            if !up.is_empty() {
                hypernym_map.insert((*token).clone(), up);
            }
            let down = taxonomy.hyponyms(token, self.config.taxonomy_depth, self.config.max_hierarchy_per_token);
            if !down.is_empty() {
                hyponym_map.insert((*token).clone(), down);
            }
        }

        let ontology = self
            .lexicon
            .ontology_edges()
            .iter()
            .filter(|(whole, part)| vocabulary.contains(whole) || vocabulary.contains(part))
            .cloned()
            .collect();

        let mut inferred_concepts: BTreeSet<String> = patterns::INFERENCE_RULES
            .iter()
            .filter(|rule| rule.all_of.iter().all(|group| contains_any(&combined_lower, *group)))
            .map(|rule| rule.concept.to_string())
            .collect();
        inferred_concepts.extend(augmentation.concepts.iter().map(|c| c.to_lowercase()));

        let quantity_patterns = QuantityPatterns {
            totality: patterns::TOTALITY_MARKERS.iter().map(|s| s.to_string()).collect(),
            singularity: matched_terms(&answer_lower, patterns::SINGULARITY_MARKERS)
                .into_iter()
                .map(str::to_string)
                .collect(),
        };

        debug!(
            content_tokens = content_tokens.len(),
            answer_tokens = answer_tokens.len(),
            axes = antonym_axes.len(),
            inferred = inferred_concepts.len(),
            "built problem knowledge"
        );

        ProblemKnowledge {
            content_sentences: split_sentences(&content),
            answer_sentences: split_sentences(&answer),
            locale: detect_locale(&combined_lower),
            content,
            answer,
            content_lower,
            answer_lower,
            content_tokens,
            answer_tokens,
            entity_set,
            synonym_map,
            antonym_map,
            antonym_axes,
            lexicon: self.lexicon.clone(),
            ontology,
            taxonomy,
            hypernym_map,
            hyponym_map,
            inferred_concepts,
            quantity_patterns,
            config: self.config.clone(),
            concept_vec_cache: DashMap::new(),
        }
    }
}

/// Truth text followed by hints and explanation, as one passage.
fn augmented_answer(input: &PuzzleInput) -> String {
    let segments: Vec<String> = std::iter::once(input.answer.as_str())
        .chain(input.hints.iter().map(String::as_str))
        .chain(input.explanation.iter().map(String::as_str))
        .map(normalize_text)
        .map(|s| s.trim_end_matches(['.', '!', '?', '\u{3002}']).to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if segments.is_empty() {
        return String::new();
    }
    let mut joined = segments.join(ANSWER_SEGMENT_SEPARATOR);
    if segments.len() > 1 || input.answer.trim_end().ends_with('.') {
        joined.push('.');
    }
    joined
}

/// Frequency-ranked distinct tokens; ties keep first-seen order.
fn rank_entities<'a>(tokens: impl Iterator<Item = &'a String>, limit: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<&'a String, usize> = HashMap::new();
    for token in tokens {
        match positions.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                positions.insert(token, counts.len());
                counts.push((token.clone(), 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(limit).map(|(t, _)| t).collect()
}
