//! Closed-vocabulary membership checks.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::data::stopwords;

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    stopwords::ENGLISH
        .iter()
        .chain(stopwords::KOREAN.iter())
        .copied()
        .collect()
});

/// Whether a (lowercased, stemmed) token is a function word.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}
