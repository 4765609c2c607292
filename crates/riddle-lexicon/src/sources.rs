//! Learned-lexicon sources.

use std::path::PathBuf;

use riddle_core::errors::{LexiconError, RiddleResult};
use riddle_core::models::LearnedLexicon;
use riddle_core::traits::ILexiconSource;

/// Reads a learned lexicon from a JSON document:
/// `{"synonyms": {..}, "antonyms": {..}, "taxonomy": [[hyper, hypo], ..]}`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ILexiconSource for JsonFileSource {
    fn load(&self) -> RiddleResult<LearnedLexicon> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            LexiconError::SourceUnavailable {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        let learned = serde_json::from_str(&raw).map_err(|e| LexiconError::Malformed {
            reason: format!("{}: {e}", self.path.display()),
        })?;
        Ok(learned)
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

/// Source used when no learned data is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLearnedSource;

impl ILexiconSource for NoLearnedSource {
    fn load(&self) -> RiddleResult<LearnedLexicon> {
        Ok(LearnedLexicon::default())
    }

    fn name(&self) -> &str {
        "none"
    }
}
