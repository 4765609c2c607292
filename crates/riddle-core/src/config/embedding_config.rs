use serde::{Deserialize, Serialize};

use super::defaults;

/// Which embedding backend to load at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Local ONNX sentence-embedding model.
    Onnx,
    /// Remote HTTP inference service.
    Remote,
    /// Deterministic feature-hashing vectors. No model required.
    Hashing,
}

impl Default for ProviderKind {
    fn default() -> Self {
        match defaults::DEFAULT_EMBEDDING_PROVIDER {
            "remote" => Self::Remote,
            "hashing" => Self::Hashing,
            _ => Self::Onnx,
        }
    }
}

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: ProviderKind,
    /// Path to the ONNX model file.
    pub model_path: String,
    /// The model's `tokenizer.json`. Defaults to the one beside the model file.
    pub tokenizer_path: Option<String>,
    /// Longer inputs are truncated to this many tokens.
    pub max_sequence_length: usize,
    /// Whether the model takes a `token_type_ids` input after the attention mask.
    pub token_type_ids: bool,
    /// Endpoint of the remote inference service.
    pub endpoint: String,
    /// Request timeout for the remote provider (seconds).
    pub timeout_secs: u64,
    /// Texts per batched request or inference run.
    pub batch_size: usize,
    pub dimensions: usize,
    /// Maximum number of cached vectors shared across puzzles.
    pub cache_size: u64,
    /// Lifetime of a cached vector (seconds).
    pub cache_ttl_secs: u64,
    /// Worker count for batched sentence embedding.
    pub concurrency: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model_path: defaults::DEFAULT_MODEL_PATH.to_string(),
            tokenizer_path: None,
            max_sequence_length: defaults::DEFAULT_MAX_SEQUENCE_LENGTH,
            token_type_ids: defaults::DEFAULT_TOKEN_TYPE_IDS,
            endpoint: defaults::DEFAULT_REMOTE_ENDPOINT.to_string(),
            timeout_secs: defaults::DEFAULT_REMOTE_TIMEOUT_SECS,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
            cache_ttl_secs: defaults::DEFAULT_EMBEDDING_CACHE_TTL_SECS,
            concurrency: defaults::DEFAULT_EMBEDDING_CONCURRENCY,
        }
    }
}

impl EmbeddingConfig {
    /// The configured tokenizer, or `tokenizer.json` next to the model.
    pub fn resolved_tokenizer_path(&self) -> String {
        match &self.tokenizer_path {
            Some(path) => path.clone(),
            None => std::path::Path::new(&self.model_path)
                .with_file_name("tokenizer.json")
                .display()
                .to_string(),
        }
    }
}
