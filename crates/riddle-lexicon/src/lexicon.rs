//! Indexed lexicon: the static tables plus an optional learned overlay.

use std::collections::{BTreeSet, HashMap, HashSet};

use riddle_core::models::LearnedLexicon;

use crate::data::{antonyms, ontology, synonyms, taxonomy};

/// Two opposite vocabularies under one label, e.g. alive/dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntonymAxis {
    pub label: String,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub requires_target: bool,
}

/// Read-only lexical lookup tables shared across all puzzles.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    synonyms: HashMap<String, BTreeSet<String>>,
    antonyms: HashMap<String, BTreeSet<String>>,
    axes: Vec<AntonymAxis>,
    /// `(hypernym, hyponym)`.
    taxonomy_edges: Vec<(String, String)>,
    /// `(whole, part)`.
    ontology_edges: Vec<(String, String)>,
    /// Every word appearing anywhere in the tables.
    vocabulary: HashSet<String>,
}

impl Lexicon {
    /// The compiled-in English and Korean tables.
    pub fn builtin() -> Self {
        let mut lexicon = Self::default();

        for group in synonyms::SYNONYM_GROUPS {
            lexicon.add_synonym_group(group.iter().copied());
        }
        for (word, opposites) in antonyms::ANTONYM_PAIRS {
            for opposite in *opposites {
                lexicon.add_antonym(word, opposite);
            }
        }
        lexicon.axes = antonyms::ANTONYM_AXES
            .iter()
            .map(|def| AntonymAxis {
                label: def.label.to_string(),
                positive: def.positive.iter().map(|s| s.to_string()).collect(),
                negative: def.negative.iter().map(|s| s.to_string()).collect(),
                requires_target: def.requires_target,
            })
            .collect();
        for (hypernym, hyponyms) in taxonomy::TAXONOMY {
            for hyponym in *hyponyms {
                lexicon.add_taxonomy_edge(hypernym, hyponym);
            }
        }
        for (whole, parts) in ontology::PART_OF {
            for part in *parts {
                lexicon
                    .ontology_edges
                    .push((whole.to_string(), part.to_string()));
            }
        }
        lexicon.rebuild_vocabulary();

        lexicon
    }

    /// A copy of `self` with `learned` layered on top.
    ///
    /// Learned entries only ever add relations; nothing built in is removed.
    pub fn merged(&self, learned: &LearnedLexicon) -> Self {
        let mut lexicon = self.clone();

        for (word, synonyms) in &learned.synonyms {
            lexicon.add_synonym_group(
                std::iter::once(word.as_str()).chain(synonyms.iter().map(String::as_str)),
            );
        }
        for (word, opposites) in &learned.antonyms {
            for opposite in opposites {
                lexicon.add_antonym(word, opposite);
            }
        }
        for (hypernym, hyponym) in &learned.taxonomy {
            lexicon.add_taxonomy_edge(hypernym, hyponym);
        }
        lexicon.rebuild_vocabulary();

        lexicon
    }

    /// Synonyms of `word`, excluding the word itself.
    pub fn synonyms_of(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.synonyms.get(word)
    }

    pub fn antonyms_of(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.antonyms.get(word)
    }

    pub fn are_synonyms(&self, a: &str, b: &str) -> bool {
        a == b || self.synonyms.get(a).is_some_and(|set| set.contains(b))
    }

    pub fn are_antonyms(&self, a: &str, b: &str) -> bool {
        self.antonyms.get(a).is_some_and(|set| set.contains(b))
    }

    pub fn axes(&self) -> &[AntonymAxis] {
        &self.axes
    }

    pub fn taxonomy_edges(&self) -> &[(String, String)] {
        &self.taxonomy_edges
    }

    pub fn ontology_edges(&self) -> &[(String, String)] {
        &self.ontology_edges
    }

    /// Whether `word` appears in any table. Used to keep known Korean
    /// words from being over-stemmed.
    pub fn knows(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Number of words with at least one synonym.
    pub fn synonym_entries(&self) -> usize {
        self.synonyms.len()
    }

    fn rebuild_vocabulary(&mut self) {
        let mut vocabulary = HashSet::new();
        vocabulary.extend(self.synonyms.keys().cloned());
        vocabulary.extend(self.antonyms.keys().cloned());
        for axis in &self.axes {
            vocabulary.extend(axis.positive.iter().cloned());
            vocabulary.extend(axis.negative.iter().cloned());
        }
        for (a, b) in self.taxonomy_edges.iter().chain(self.ontology_edges.iter()) {
            vocabulary.insert(a.clone());
            vocabulary.insert(b.clone());
        }
        self.vocabulary = vocabulary;
    }

    fn add_synonym_group<'a>(&mut self, group: impl Iterator<Item = &'a str>) {
        let members: Vec<String> = group
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        for member in &members {
            let entry = self.synonyms.entry(member.clone()).or_default();
            entry.extend(members.iter().filter(|m| *m != member).cloned());
        }
        self.synonyms.retain(|_, set| !set.is_empty());
    }

    fn add_antonym(&mut self, a: &str, b: &str) {
        let (a, b) = (a.trim().to_lowercase(), b.trim().to_lowercase());
        if a.is_empty() || b.is_empty() || a == b {
            return;
        }
        self.antonyms.entry(a.clone()).or_default().insert(b.clone());
        self.antonyms.entry(b).or_default().insert(a);
    }

    fn add_taxonomy_edge(&mut self, hypernym: &str, hyponym: &str) {
        let edge = (hypernym.trim().to_lowercase(), hyponym.trim().to_lowercase());
        if edge.0.is_empty() || edge.1.is_empty() || edge.0 == edge.1 {
            return;
        }
        if !self.taxonomy_edges.contains(&edge) {
            self.taxonomy_edges.push(edge);
        }
    }
}
