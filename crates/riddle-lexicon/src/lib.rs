//! # riddle-lexicon
//!
//! Process-wide lexical knowledge for the question judge.
//!
//! - [`data`]: static English and Korean tables (synonym groups, antonym
//!   pairs and axes, is-a taxonomy, part-of ontology, inference patterns,
//!   and the closed vocabularies the force rules key on).
//! - [`Lexicon`]: the static tables indexed for lookup, optionally merged
//!   with learned data. Merging only ever adds.
//! - [`LexiconStore`]: loads learned data at most once per process.

pub mod data;
pub mod lexicon;
pub mod sources;
pub mod store;
pub mod vocabulary;

pub use lexicon::{AntonymAxis, Lexicon};
pub use sources::{JsonFileSource, NoLearnedSource};
pub use store::LexiconStore;
