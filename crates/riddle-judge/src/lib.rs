//! # riddle-judge
//!
//! Judges a player's question against a puzzle as yes, no, irrelevant, or
//! decisive.
//!
//! Two strategies share one analysis pipeline:
//! - heuristic (v9): bonuses and penalties on embedding similarity, then
//!   an ordered threshold ladder ([`decision`]).
//! - learned (v10): the same signals as an 18-feature vector fed to a
//!   softmax classifier, with hard guards re-applied afterwards ([`v10`]).
//!
//! [`JudgeEngine`] wires both behind [`IQuestionJudge`].

pub mod analysis;
pub mod answer_similarity;
pub mod concepts;
pub mod contradiction;
pub mod decision;
pub mod engine;
pub mod evaluation;
pub mod force_rules;
pub mod question;
pub mod scoring;
pub mod v10;

pub use decision::DecisionPath;
pub use engine::{IQuestionJudge, JudgeEngine, JudgeEngineBuilder};
pub use evaluation::{evaluate, Dataset, EvaluationReport};
pub use v10::{V10Features, V10Result};
