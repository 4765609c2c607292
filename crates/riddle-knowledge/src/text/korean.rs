//! Light suffix stripping for Korean eojeol.
//!
//! Not a morphological analyzer: one particle and one ending are removed,
//! longest match first, and only while a stem of at least one syllable
//! remains.

/// Case and topic particles.
const PARTICLES: &[&str] = &[
    "에서는", "에게서", "으로는", "이라고", "에서", "에게", "한테", "으로", "까지", "부터",
    "보다", "처럼", "이나", "이랑", "하고", "라고", "은", "는", "이", "가", "을", "를", "에",
    "의", "도", "로", "와", "과", "만", "랑",
];

/// Sentence-final and connective endings.
const ENDINGS: &[&str] = &[
    "었습니까", "았습니까", "했습니까", "였습니까", "었습니다", "았습니다", "했습니다",
    "였습니다", "었나요", "았나요", "했나요", "였나요", "인가요", "었어요", "았어요",
    "했어요", "였어요", "습니까", "습니다", "었다", "았다", "였다", "했다", "한다", "하다",
    "는다", "나요", "어요", "아요", "까요", "가요", "이다", "었", "았", "였", "했", "다", "요",
    "고", "서",
];

fn strip_longest<'a>(word: &'a str, suffixes: &[&str]) -> &'a str {
    let best = suffixes
        .iter()
        .filter(|s| word.ends_with(*s) && word.chars().count() > s.chars().count())
        .max_by_key(|s| s.len());
    match best {
        Some(suffix) => &word[..word.len() - suffix.len()],
        None => word,
    }
}

/// Stem a Korean word. `is_known` short-circuits stripping for words the
/// lexicon already carries so that e.g. `아이` is not cut to `아`.
pub fn stem(word: &str, is_known: impl Fn(&str) -> bool) -> String {
    if is_known(word) {
        return word.to_string();
    }
    let without_particle = strip_longest(word, PARTICLES);
    if is_known(without_particle) {
        return without_particle.to_string();
    }
    strip_longest(without_particle, ENDINGS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unknown(_: &str) -> bool {
        false
    }

    #[test]
    fn strips_particles() {
        assert_eq!(stem("얼음을", unknown), "얼음");
        assert_eq!(stem("방에서", unknown), "방");
    }

    #[test]
    fn strips_endings() {
        assert_eq!(stem("죽었다", unknown), "죽");
        assert_eq!(stem("녹았나요", unknown), "녹");
    }

    #[test]
    fn keeps_known_words() {
        assert_eq!(stem("아이", |w| w == "아이"), "아이");
        assert_eq!(stem("아이가", |w| w == "아이"), "아이");
    }

    #[test]
    fn never_strips_to_empty() {
        assert_eq!(stem("다", unknown), "다");
        assert_eq!(stem("이", unknown), "이");
    }
}
