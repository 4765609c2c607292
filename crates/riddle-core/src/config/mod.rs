//! Configuration for every riddle subsystem.
//!
//! Loaded from TOML; every section falls back to the values in [`defaults`].

pub mod defaults;
mod classifier_config;
mod embedding_config;
mod knowledge_config;
mod lexicon_config;
mod scoring_config;
mod session_config;
mod threshold_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{RiddleError, RiddleResult};

pub use classifier_config::ClassifierConfig;
pub use embedding_config::{EmbeddingConfig, ProviderKind};
pub use knowledge_config::KnowledgeConfig;
pub use lexicon_config::LexiconConfig;
pub use scoring_config::ScoringConfig;
pub use session_config::SessionConfig;
pub use threshold_config::ThresholdConfig;

/// Which judgment path answers questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JudgeStrategy {
    /// v9 threshold ladder.
    #[default]
    Heuristic,
    /// v10 feature vector + softmax classifier.
    Learned,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiddleConfig {
    pub strategy: JudgeStrategy,
    pub embedding: EmbeddingConfig,
    pub knowledge: KnowledgeConfig,
    pub thresholds: ThresholdConfig,
    pub scoring: ScoringConfig,
    pub classifier: ClassifierConfig,
    pub lexicon: LexiconConfig,
    pub session: SessionConfig,
}

impl RiddleConfig {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml(text: &str) -> RiddleResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| RiddleError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> RiddleResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            RiddleError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> RiddleResult<String> {
        toml::to_string_pretty(self).map_err(|e| RiddleError::ConfigError(e.to_string()))
    }

    /// Reject combinations that would break the decision ladder.
    pub fn validate(&self) -> RiddleResult<()> {
        let t = &self.thresholds;
        // A strong antonym mismatch must be caught before the yes rung.
        if t.strong_mismatch_answer > t.yes_answer {
            return Err(RiddleError::ConfigError(format!(
                "thresholds.strong_mismatch_answer ({}) must not exceed thresholds.yes_answer ({})",
                t.strong_mismatch_answer, t.yes_answer
            )));
        }
        if t.ambiguous_low > t.ambiguous_high {
            return Err(RiddleError::ConfigError(
                "thresholds.ambiguous_low must not exceed thresholds.ambiguous_high".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.scoring.adjusted_weight) {
            return Err(RiddleError::ConfigError(
                "scoring.adjusted_weight must be within [0, 1]".to_string(),
            ));
        }
        if self.embedding.concurrency == 0 {
            return Err(RiddleError::ConfigError(
                "embedding.concurrency must be at least 1".to_string(),
            ));
        }
        if self.embedding.batch_size == 0 || self.embedding.max_sequence_length < 2 {
            return Err(RiddleError::ConfigError(
                "embedding.batch_size must be at least 1 and max_sequence_length at least 2"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
