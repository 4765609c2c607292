//! Puzzle-session knowledge lifetime.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use riddle_core::config::SessionConfig;
use riddle_core::models::PuzzleInput;
use tracing::debug;

use crate::builder::KnowledgeBuilder;
use crate::knowledge::ProblemKnowledge;

/// Keeps each live puzzle's knowledge for its session, bounded by count
/// and idle time.
pub struct KnowledgeCache {
    builder: Arc<KnowledgeBuilder>,
    cache: Cache<String, Arc<ProblemKnowledge>>,
}

impl KnowledgeCache {
    pub fn new(builder: Arc<KnowledgeBuilder>, config: &SessionConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_puzzles)
            .time_to_idle(Duration::from_secs(config.idle_ttl_secs))
            .build();
        Self { builder, cache }
    }

    /// Knowledge for `puzzle_id`, building it from `input` on first use.
    /// Concurrent first requests for one id build once.
    pub fn get_or_build(&self, puzzle_id: &str, input: &PuzzleInput) -> Arc<ProblemKnowledge> {
        self.cache.get_with(puzzle_id.to_string(), || {
            debug!(puzzle_id, "building knowledge for new puzzle session");
            Arc::new(self.builder.build(input))
        })
    }

    pub fn get(&self, puzzle_id: &str) -> Option<Arc<ProblemKnowledge>> {
        self.cache.get(puzzle_id)
    }

    /// End a puzzle session.
    pub fn evict(&self, puzzle_id: &str) {
        self.cache.invalidate(puzzle_id);
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
    }

    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn builder(&self) -> &Arc<KnowledgeBuilder> {
        &self.builder
    }
}
