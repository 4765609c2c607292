//! Negation stripping.
//!
//! Questions are judged in their positive form. Each removed marker is
//! counted; an odd count sets `invert`, and the caller flips a final
//! yes/no answer.

use std::sync::LazyLock;

use regex::Regex;

use super::normalize::collapse_whitespace;

/// A pattern and its replacement.
struct NegationRule {
    regex: &'static LazyLock<Option<Regex>>,
    replacement: &'static str,
}

macro_rules! negation_rule {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

negation_rule!(WONT, r"(?i)\bwon't\b");
negation_rule!(CANT, r"(?i)\bcan't\b");
negation_rule!(CANNOT, r"(?i)\bcannot\b");
negation_rule!(NT, r"(?i)n't\b");
negation_rule!(NOT, r"(?i)\bnot\b");
negation_rule!(NEVER, r"(?i)\bnever\b");
negation_rule!(KO_AN, r"(?:^|\s)안\s+");
negation_rule!(KO_JI_ANH, r"지\s*않");
negation_rule!(KO_JI_MOT, r"지\s*못");
negation_rule!(KO_MOT, r"(?:^|\s)못\s+");

/// Order matters: contractions with irregular stems go before the generic `n't`.
static RULES: &[NegationRule] = &[
    NegationRule { regex: &WONT, replacement: "will" },
    NegationRule { regex: &CANT, replacement: "can" },
    NegationRule { regex: &CANNOT, replacement: "can" },
    NegationRule { regex: &NT, replacement: "" },
    NegationRule { regex: &NOT, replacement: "" },
    NegationRule { regex: &NEVER, replacement: "" },
    NegationRule { regex: &KO_AN, replacement: " " },
    NegationRule { regex: &KO_JI_ANH, replacement: "" },
    NegationRule { regex: &KO_JI_MOT, replacement: "" },
    NegationRule { regex: &KO_MOT, replacement: " " },
];

/// A question with its negation markers removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegationResult {
    pub text: String,
    pub invert: bool,
}

pub fn strip_negation(text: &str) -> NegationResult {
    let mut current = text.to_string();
    let mut markers = 0usize;

    for rule in RULES {
        let Some(regex) = rule.regex.as_ref() else {
            continue;
        };
        let hits = regex.find_iter(&current).count();
        if hits > 0 {
            markers += hits;
            current = regex.replace_all(&current, rule.replacement).into_owned();
        }
    }

    NegationResult {
        text: collapse_whitespace(&current),
        invert: markers % 2 == 1,
    }
}
