//! Term matching over lowercased text.

use super::normalize::has_hangul;

/// Whether `term` occurs in `text`. Latin terms must sit on word
/// boundaries; Hangul terms match as substrings since particles attach
/// directly to the stem.
pub fn contains_term(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    if has_hangul(term) {
        return text.contains(term);
    }
    let mut start = 0;
    while let Some(pos) = text[start..].find(term) {
        let begin = start + pos;
        let end = begin + term.len();
        let before_ok = text[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        start = begin + term.chars().next().map_or(1, char::len_utf8);
    }
    false
}

pub fn contains_any<S: AsRef<str>>(text: &str, terms: &[S]) -> bool {
    terms.iter().any(|t| contains_term(text, t.as_ref()))
}

/// The subset of `terms` present in `text`, in input order.
pub fn matched_terms<'a, S: AsRef<str>>(text: &str, terms: &'a [S]) -> Vec<&'a str> {
    terms
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| contains_term(text, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_terms_respect_word_boundaries() {
        assert!(contains_term("he was dead.", "dead"));
        assert!(!contains_term("deadline passed", "dead"));
        assert!(contains_term("only one survived", "only one"));
        assert!(!contains_term("alone", "one"));
    }

    #[test]
    fn repeated_prefix_is_rescanned() {
        assert!(contains_term("deadline and dead", "dead"));
    }

    #[test]
    fn hangul_terms_match_substrings() {
        assert!(contains_term("그는 죽었다", "죽"));
        assert!(contains_term("얼음이 녹았다", "얼음"));
    }

    #[test]
    fn matched_terms_keeps_order() {
        let terms = ["both", "all", "every"];
        assert_eq!(matched_terms("did both and all leave", &terms), vec!["both", "all"]);
        assert!(!contains_any("nobody", &terms));
    }
}
