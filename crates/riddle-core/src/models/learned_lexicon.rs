use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Lexicon data learned from played games, merged over the static lexicon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnedLexicon {
    pub synonyms: HashMap<String, Vec<String>>,
    pub antonyms: HashMap<String, Vec<String>>,
    /// `[hypernym, hyponym]` pairs.
    pub taxonomy: Vec<(String, String)>,
}

impl LearnedLexicon {
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty() && self.antonyms.is_empty() && self.taxonomy.is_empty()
    }
}
