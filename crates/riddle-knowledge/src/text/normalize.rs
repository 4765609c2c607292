//! Text cleanup applied before anything else touches a string.

/// Script family used to pick the tokenizer path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    English,
    Korean,
}

const ZERO_WIDTH: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

/// Strip zero-width characters, straighten smart quotes, collapse whitespace.
pub fn normalize_text(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !ZERO_WIDTH.contains(c))
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{201F}' | '\u{2033}' => '"',
            other => other,
        })
        .collect();
    collapse_whitespace(&cleaned)
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Hangul syllables and compatibility jamo.
pub fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}' | '\u{3131}'..='\u{318E}' | '\u{1100}'..='\u{11FF}')
}

pub fn has_hangul(text: &str) -> bool {
    text.chars().any(is_hangul)
}

/// Korean when Hangul characters are at least as common as Latin letters.
pub fn detect_locale(text: &str) -> Locale {
    let (mut hangul, mut latin) = (0usize, 0usize);
    for c in text.chars() {
        if is_hangul(c) {
            hangul += 1;
        } else if c.is_ascii_alphabetic() {
            latin += 1;
        }
    }
    if hangul > 0 && hangul >= latin {
        Locale::Korean
    } else {
        Locale::English
    }
}
