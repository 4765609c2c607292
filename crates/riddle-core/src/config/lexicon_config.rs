use serde::{Deserialize, Serialize};

/// Learned lexicon configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// JSON file with learned synonyms, antonyms, and taxonomy edges.
    /// `None` uses the static lexicon only.
    pub learned_path: Option<String>,
}
