pub mod korean;
pub mod matching;
pub mod negation;
pub mod normalize;
pub mod sentences;
pub mod tokenize;

pub use matching::{contains_any, contains_term, matched_terms};
pub use negation::{strip_negation, NegationResult};
pub use normalize::{detect_locale, normalize_text, Locale};
pub use sentences::split_sentences;
pub use tokenize::Tokenizer;
