mod augmenter;
mod embedding;
mod lexicon_source;
mod resolver;

pub use augmenter::{IKnowledgeAugmenter, NoOpAugmenter};
pub use embedding::IEmbeddingProvider;
pub use lexicon_source::ILexiconSource;
pub use resolver::{AmbiguityContext, IAmbiguityResolver, NoOpResolver};
