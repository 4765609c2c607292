use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RiddleError;

/// The four-way answer to a player's question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JudgeResult {
    Yes,
    No,
    Irrelevant,
    /// Answering would reveal the solution.
    Decisive,
}

impl JudgeResult {
    /// Label order shared by the classifier weight file and probability vectors.
    pub const ALL: [JudgeResult; 4] = [
        JudgeResult::Yes,
        JudgeResult::No,
        JudgeResult::Irrelevant,
        JudgeResult::Decisive,
    ];

    /// Position in [`JudgeResult::ALL`].
    pub fn index(self) -> usize {
        match self {
            JudgeResult::Yes => 0,
            JudgeResult::No => 1,
            JudgeResult::Irrelevant => 2,
            JudgeResult::Decisive => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JudgeResult::Yes => "yes",
            JudgeResult::No => "no",
            JudgeResult::Irrelevant => "irrelevant",
            JudgeResult::Decisive => "decisive",
        }
    }

    /// Flip yes/no for a negated question. Irrelevant and decisive never flip.
    pub fn invert_if(self, negated: bool) -> Self {
        if !negated {
            return self;
        }
        match self {
            JudgeResult::Yes => JudgeResult::No,
            JudgeResult::No => JudgeResult::Yes,
            other => other,
        }
    }
}

impl fmt::Display for JudgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JudgeResult {
    type Err = RiddleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(JudgeResult::Yes),
            "no" => Ok(JudgeResult::No),
            "irrelevant" => Ok(JudgeResult::Irrelevant),
            "decisive" => Ok(JudgeResult::Decisive),
            other => Err(RiddleError::InvalidInput {
                reason: format!("unknown judge label '{other}'"),
            }),
        }
    }
}
