use serde::{Deserialize, Serialize};

/// Raw puzzle text handed to the knowledge builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleInput {
    /// Narrative shown to players.
    pub content: String,
    /// Hidden truth.
    pub answer: String,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl PuzzleInput {
    pub fn new(content: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            answer: answer.into(),
            hints: Vec::new(),
            explanation: None,
        }
    }

    pub fn with_hints(mut self, hints: Vec<String>) -> Self {
        self.hints = hints;
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }
}
