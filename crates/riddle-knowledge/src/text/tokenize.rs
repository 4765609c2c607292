//! Locale-aware token extraction.

use riddle_core::config::KnowledgeConfig;
use riddle_lexicon::vocabulary::is_stopword;
use riddle_lexicon::Lexicon;

use super::korean;
use super::normalize::has_hangul;

/// Splits text into content tokens. Hangul words are stemmed and may be a
/// single syllable; Latin words are lowercased and must reach
/// `min_token_chars`.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    lexicon: &'a Lexicon,
    min_chars: usize,
    max_tokens: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(lexicon: &'a Lexicon, config: &KnowledgeConfig) -> Self {
        Self {
            lexicon,
            min_chars: config.min_token_chars,
            max_tokens: config.max_tokens,
        }
    }

    /// Tokens in text order, duplicates kept, capped at `max_tokens`.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for raw in text.split(|c: char| !c.is_alphanumeric()) {
            if tokens.len() >= self.max_tokens {
                break;
            }
            if raw.is_empty() {
                continue;
            }
            let token = if has_hangul(raw) {
                korean::stem(raw, |w| self.lexicon.knows(w))
            } else {
                let lower = raw.to_lowercase();
                if lower.chars().count() < self.min_chars {
                    continue;
                }
                lower
            };
            if token.is_empty() || is_stopword(&token) {
                continue;
            }
            tokens.push(token);
        }
        tokens
    }

    /// Tokens with duplicates removed, first occurrence wins.
    pub fn unique(&self, text: &str) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.tokenize(text)
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> KnowledgeConfig {
        KnowledgeConfig::default()
    }

    #[test]
    fn english_tokens_lowercased_without_stopwords() {
        let lex = Lexicon::builtin();
        let tokens = Tokenizer::new(&lex, &config()).tokenize("Did He stand on a BLOCK of ice?");
        assert_eq!(tokens, vec!["stand", "block", "ice"]);
    }

    #[test]
    fn short_latin_tokens_dropped() {
        let lex = Lexicon::builtin();
        let tokens = Tokenizer::new(&lex, &config()).tokenize("x y ok");
        assert_eq!(tokens, vec!["ok"]);
    }

    #[test]
    fn korean_tokens_stemmed() {
        let lex = Lexicon::builtin();
        let tokens = Tokenizer::new(&lex, &config()).tokenize("얼음이 녹았다");
        assert_eq!(tokens, vec!["얼음", "녹"]);
    }

    #[test]
    fn token_cap_applies() {
        let lex = Lexicon::builtin();
        let cfg = KnowledgeConfig {
            max_tokens: 2,
            ..KnowledgeConfig::default()
        };
        let tokens = Tokenizer::new(&lex, &cfg).tokenize("ice water chair rope");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn unique_deduplicates() {
        let lex = Lexicon::builtin();
        let tokens = Tokenizer::new(&lex, &config()).unique("ice ice water ice");
        assert_eq!(tokens, vec!["ice", "water"]);
    }
}
