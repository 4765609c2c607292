/// Split on sentence punctuation, semicolons, and newlines.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?', '\u{3002}', ';', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(
            split_sentences("He stood on ice. It melted!\nNobody saw; the end?"),
            vec!["He stood on ice", "It melted", "Nobody saw", "the end"]
        );
    }

    #[test]
    fn empty_text_has_no_sentences() {
        assert!(split_sentences("  . ! ").is_empty());
    }
}
