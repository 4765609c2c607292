use serde::{Deserialize, Serialize};

use super::defaults;

/// Puzzle-session knowledge cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Maximum number of puzzles whose knowledge is kept alive.
    pub max_puzzles: u64,
    /// Knowledge for a puzzle nobody asked about for this long is evicted.
    pub idle_ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_puzzles: defaults::DEFAULT_MAX_PUZZLES,
            idle_ttl_secs: defaults::DEFAULT_SESSION_IDLE_TTL_SECS,
        }
    }
}
