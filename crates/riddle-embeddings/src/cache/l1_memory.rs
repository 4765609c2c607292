//! L1 in-memory cache using moka.
//!
//! TinyLFU admission policy, bounded entry count, per-entry TTL.
//! Shared by every puzzle in the process.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

/// In-memory embedding cache.
///
/// Keys are blake3 hashes of normalized text. Values are shared vectors.
pub struct L1MemoryCache {
    cache: Cache<String, Arc<Vec<f32>>>,
}

impl L1MemoryCache {
    /// Create a cache with the given max entry count and time-to-live.
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();

        Self { cache }
    }

    /// Get an embedding by key.
    pub fn get(&self, key: &str) -> Option<Arc<Vec<f32>>> {
        self.cache.get(key)
    }

    /// Insert an embedding.
    pub fn insert(&self, key: String, embedding: Arc<Vec<f32>>) {
        self.cache.insert(key, embedding);
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
