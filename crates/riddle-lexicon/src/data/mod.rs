//! Static lexicon tables.
//!
//! Korean entries are stems: the tokenizer strips particles and endings
//! before lookup, so `죽었다` arrives here as `죽`.

pub mod antonyms;
pub mod ontology;
pub mod patterns;
pub mod stopwords;
pub mod synonyms;
pub mod taxonomy;
