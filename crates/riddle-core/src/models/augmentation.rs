use serde::{Deserialize, Serialize};

/// Extra per-puzzle knowledge supplied by an external augmenter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeAugmentation {
    pub synonyms: Vec<(String, Vec<String>)>,
    /// `(hypernym, hyponym)` pairs.
    pub taxonomy_edges: Vec<(String, String)>,
    pub concepts: Vec<String>,
}
