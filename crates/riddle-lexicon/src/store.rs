//! Process-wide lexicon, loaded at most once.

use std::sync::{Arc, OnceLock};

use riddle_core::traits::ILexiconSource;
use tracing::{debug, warn};

use crate::lexicon::Lexicon;

/// Holds the merged lexicon. The learned source is consulted on first
/// access only; later calls return the same `Arc`.
pub struct LexiconStore {
    source: Box<dyn ILexiconSource>,
    lexicon: OnceLock<Arc<Lexicon>>,
}

impl LexiconStore {
    pub fn new(source: Box<dyn ILexiconSource>) -> Self {
        Self {
            source,
            lexicon: OnceLock::new(),
        }
    }

    /// Builtin tables only.
    pub fn builtin() -> Self {
        Self::new(Box::new(crate::sources::NoLearnedSource))
    }

    /// The lexicon, loading learned data on first call.
    ///
    /// A failing source is logged and the builtin tables are used alone.
    pub fn get(&self) -> Arc<Lexicon> {
        self.lexicon
            .get_or_init(|| {
                let builtin = Lexicon::builtin();
                match self.source.load() {
                    Ok(learned) if learned.is_empty() => Arc::new(builtin),
                    Ok(learned) => {
                        debug!(
                            source = self.source.name(),
                            synonyms = learned.synonyms.len(),
                            antonyms = learned.antonyms.len(),
                            taxonomy = learned.taxonomy.len(),
                            "merged learned lexicon"
                        );
                        Arc::new(builtin.merged(&learned))
                    }
                    Err(e) => {
                        warn!(
                            source = self.source.name(),
                            error = %e,
                            "learned lexicon unavailable, using builtin tables"
                        );
                        Arc::new(builtin)
                    }
                }
            })
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.lexicon.get().is_some()
    }
}

impl Default for LexiconStore {
    fn default() -> Self {
        Self::builtin()
    }
}
