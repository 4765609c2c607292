//! # riddle-core
//!
//! Foundation crate for the riddle question judge.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RiddleConfig;
pub use errors::{RiddleError, RiddleResult};
pub use models::{JudgeResult, PuzzleInput};
