use proptest::prelude::*;
use riddle_core::config::KnowledgeConfig;
use riddle_knowledge::text::{normalize_text, split_sentences, strip_negation, Tokenizer};
use riddle_lexicon::Lexicon;

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "\\PC{0,80}") {
        let once = normalize_text(&s);
        prop_assert_eq!(normalize_text(&once), once.clone());
        prop_assert!(!once.starts_with(' ') && !once.ends_with(' '));
    }

    #[test]
    fn stripped_text_has_no_negation_left(s in "[a-z ]{0,40}") {
        let stripped = strip_negation(&s);
        let again = strip_negation(&stripped.text);
        prop_assert!(!again.invert);
        prop_assert_eq!(again.text, stripped.text);
    }

    #[test]
    fn token_count_never_exceeds_cap(s in "[a-zA-Z ]{0,400}", cap in 1usize..32) {
        let lexicon = Lexicon::builtin();
        let config = KnowledgeConfig { max_tokens: cap, ..KnowledgeConfig::default() };
        prop_assert!(Tokenizer::new(&lexicon, &config).tokenize(&s).len() <= cap);
    }

    #[test]
    fn sentences_are_trimmed_and_non_empty(s in "[a-z .!?;]{0,80}") {
        for sentence in split_sentences(&s) {
            prop_assert!(!sentence.is_empty());
            prop_assert_eq!(sentence.trim(), sentence.as_str());
        }
    }
}
