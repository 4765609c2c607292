mod classifier_error;
mod embedding_error;
mod lexicon_error;
mod riddle_error;

pub use classifier_error::ClassifierError;
pub use embedding_error::EmbeddingError;
pub use lexicon_error::LexiconError;
pub use riddle_error::{RiddleError, RiddleResult};
