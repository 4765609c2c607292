//! # riddle-knowledge
//!
//! Turns a puzzle's narrative and hidden truth into a [`ProblemKnowledge`]
//! bundle that every judging stage reads from.
//!
//! - [`text`]: normalization, locale-aware tokenization, negation stripping,
//!   sentence splitting, term matching.
//! - [`TaxonomyGraph`]: is-a edges with bounded hypernym/hyponym walks.
//! - [`KnowledgeBuilder`]: builds the bundle, merging augmenter output.
//! - [`selection`]: cheap lexical top-K sentence pre-filter.
//! - [`KnowledgeCache`]: puzzle-session lifetime with eviction.

pub mod builder;
pub mod knowledge;
pub mod selection;
pub mod session;
pub mod taxonomy;
pub mod text;

pub use builder::KnowledgeBuilder;
pub use knowledge::{ProblemKnowledge, QuantityPatterns};
pub use session::KnowledgeCache;
pub use taxonomy::TaxonomyGraph;
pub use text::normalize::Locale;
