//! EmbeddingEngine: the entry point for riddle-embeddings.
//!
//! One engine is shared by every puzzle in the process. It owns the
//! provider slot, the vector cache, and the worker pool.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rayon::prelude::*;
use riddle_core::config::EmbeddingConfig;
use riddle_core::errors::{EmbeddingError, RiddleError, RiddleResult};
use riddle_core::traits::IEmbeddingProvider;
use tracing::{debug, info, warn};

use crate::cache::L1MemoryCache;
use crate::providers::{self, ProviderLoader};
use crate::similarity::l2_normalize;

/// Shared embedding service.
///
/// The provider is loaded lazily on first use. The slot mutex is held for
/// the whole load, so concurrent first callers wait for one load instead
/// of racing duplicates. A failed load is retried once; a second failure
/// is returned to the caller and the next call tries again.
pub struct EmbeddingEngine {
    loader: ProviderLoader,
    provider: Mutex<Option<Arc<dyn IEmbeddingProvider>>>,
    loads: AtomicUsize,
    cache: L1MemoryCache,
    pool: rayon::ThreadPool,
    config: EmbeddingConfig,
}

impl EmbeddingEngine {
    /// Create an engine for the provider named in configuration.
    pub fn new(config: EmbeddingConfig) -> RiddleResult<Self> {
        let loader = providers::create_loader(&config);
        Self::with_loader(config, loader)
    }

    /// Create an engine around an already-built provider.
    pub fn with_provider(
        config: EmbeddingConfig,
        provider: Arc<dyn IEmbeddingProvider>,
    ) -> RiddleResult<Self> {
        Self::with_loader(config, Box::new(move || Ok(Arc::clone(&provider))))
    }

    /// Create an engine with a custom deferred loader.
    pub fn with_loader(config: EmbeddingConfig, loader: ProviderLoader) -> RiddleResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.concurrency.max(1))
            .thread_name(|i| format!("riddle-embed-{i}"))
            .build()
            .map_err(|e| EmbeddingError::WorkerPool {
                reason: e.to_string(),
            })?;
        let cache = L1MemoryCache::new(
            config.cache_size,
            Duration::from_secs(config.cache_ttl_secs),
        );

        info!(
            provider = ?config.provider,
            dims = config.dimensions,
            concurrency = config.concurrency,
            "EmbeddingEngine initialized"
        );

        Ok(Self {
            loader,
            provider: Mutex::new(None),
            loads: AtomicUsize::new(0),
            cache,
            pool,
            config,
        })
    }

    /// Get the loaded provider, loading it on first use.
    fn provider(&self) -> RiddleResult<Arc<dyn IEmbeddingProvider>> {
        let mut slot = self
            .provider
            .lock()
            .map_err(|e| EmbeddingError::ProviderUnavailable {
                provider: format!("provider slot poisoned: {e}"),
            })?;

        if let Some(provider) = slot.as_ref() {
            return Ok(Arc::clone(provider));
        }

        let provider = match (self.loader)() {
            Ok(p) => p,
            Err(first) => {
                warn!(error = %first, "embedding model load failed, retrying once");
                (self.loader)()?
            }
        };

        let count = self.loads.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            provider = provider.name(),
            dims = provider.dimensions(),
            loads = count,
            "embedding provider loaded"
        );
        *slot = Some(Arc::clone(&provider));
        Ok(provider)
    }

    /// Embed one text. Cached by its whitespace-normalized form.
    pub fn embed(&self, text: &str) -> RiddleResult<Arc<Vec<f32>>> {
        let normalized = normalize_key(text);
        let key = cache_key(&normalized);

        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }

        let provider = self.provider()?;
        let vector = finish(provider.as_ref(), provider.embed(&normalized)?)?;
        self.cache.insert(key, Arc::clone(&vector));
        Ok(vector)
    }

    /// Embed many texts. Output order matches input.
    ///
    /// Cache misses are deduplicated and sent to the provider through
    /// `embed_batch`, `batch_size` texts per call, with the calls spread
    /// over the bounded worker pool.
    pub fn embed_many(&self, texts: &[String]) -> RiddleResult<Vec<Arc<Vec<f32>>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let keyed: Vec<(String, String)> = texts
            .iter()
            .map(|t| {
                let normalized = normalize_key(t);
                let key = cache_key(&normalized);
                (key, normalized)
            })
            .collect();

        let mut found: HashMap<&str, Arc<Vec<f32>>> = HashMap::with_capacity(keyed.len());
        let mut misses: Vec<(&str, String)> = Vec::new();
        for (key, normalized) in &keyed {
            if found.contains_key(key.as_str()) || misses.iter().any(|(k, _)| *k == key.as_str()) {
                continue;
            }
            match self.cache.get(key) {
                Some(hit) => {
                    found.insert(key.as_str(), hit);
                }
                None => misses.push((key.as_str(), normalized.clone())),
            }
        }

        if !misses.is_empty() {
            let provider = self.provider()?;
            let pending: Vec<String> = misses.iter().map(|(_, text)| text.clone()).collect();
            let chunk_size = self.config.batch_size.max(1);
            debug!(
                requested = texts.len(),
                misses = pending.len(),
                chunks = pending.len().div_ceil(chunk_size),
                "embedding batch"
            );

            let chunks: Vec<Vec<Vec<f32>>> = self.pool.install(|| {
                pending
                    .par_chunks(chunk_size)
                    .map(|chunk| -> RiddleResult<Vec<Vec<f32>>> {
                        let vectors = provider.embed_batch(chunk)?;
                        if vectors.len() != chunk.len() {
                            return Err(EmbeddingError::InferenceFailed {
                                reason: format!(
                                    "provider {} returned {} vectors for {} texts",
                                    provider.name(),
                                    vectors.len(),
                                    chunk.len()
                                ),
                            }
                            .into());
                        }
                        Ok(vectors)
                    })
                    .collect::<RiddleResult<Vec<Vec<Vec<f32>>>>>()
            })?;

            for ((key, _), raw) in misses.iter().zip(chunks.into_iter().flatten()) {
                let vector = finish(provider.as_ref(), raw)?;
                self.cache.insert((*key).to_string(), Arc::clone(&vector));
                found.insert(*key, vector);
            }
        }

        keyed
            .iter()
            .map(|(key, _)| {
                found.get(key.as_str()).cloned().ok_or_else(|| {
                    RiddleError::from(EmbeddingError::InferenceFailed {
                        reason: "batch lost a vector".to_string(),
                    })
                })
            })
            .collect()
    }

    /// Drop every cached vector.
    pub fn clear_cache(&self) {
        self.cache.clear();
        debug!("embedding cache cleared");
    }

    /// Drop the loaded provider. The next call loads it again.
    pub fn release_model(&self) {
        if let Ok(mut slot) = self.provider.lock() {
            if slot.take().is_some() {
                info!("embedding provider released");
            }
        }
    }

    /// Whether a provider is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.provider.lock().map(|s| s.is_some()).unwrap_or(false)
    }

    /// Number of successful provider loads since construction.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Number of cached vectors.
    pub fn cached_vectors(&self) -> u64 {
        self.cache.len()
    }

    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }
}

/// Collapse whitespace so trivially different spellings share a cache slot.
fn normalize_key(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn cache_key(normalized: &str) -> String {
    blake3::hash(normalized.as_bytes()).to_hex().to_string()
}

/// Reject empty output and scale to unit length.
fn finish(provider: &dyn IEmbeddingProvider, mut vector: Vec<f32>) -> RiddleResult<Arc<Vec<f32>>> {
    if vector.is_empty() {
        return Err(EmbeddingError::InferenceFailed {
            reason: format!("provider {} returned an empty vector", provider.name()),
        }
        .into());
    }
    l2_normalize(&mut vector);
    Ok(Arc::new(vector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use riddle_core::config::ProviderKind;

    fn hashing_engine() -> EmbeddingEngine {
        EmbeddingEngine::new(EmbeddingConfig {
            provider: ProviderKind::Hashing,
            dimensions: 128,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn embed_returns_configured_dims() {
        let engine = hashing_engine();
        assert_eq!(engine.embed("a locked room").unwrap().len(), 128);
    }

    #[test]
    fn embed_caches_by_normalized_text() {
        let engine = hashing_engine();
        let a = engine.embed("puddle  of water").unwrap();
        let b = engine.embed(" puddle of water ").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn provider_loads_lazily() {
        let engine = hashing_engine();
        assert!(!engine.is_loaded());
        engine.embed("x y").unwrap();
        assert!(engine.is_loaded());
        assert_eq!(engine.load_count(), 1);
    }

    #[test]
    fn batch_preserves_order() {
        let engine = hashing_engine();
        let texts = vec!["broken chair".to_string(), "block of ice".to_string()];
        let batch = engine.embed_many(&texts).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(*batch[1], *engine.embed("block of ice").unwrap());
    }

    #[test]
    fn batch_repeats_share_one_vector() {
        let engine = hashing_engine();
        let texts = vec!["ice".to_string(), "chair".to_string(), " ice ".to_string()];
        let batch = engine.embed_many(&texts).unwrap();
        assert!(Arc::ptr_eq(&batch[0], &batch[2]));
        assert_eq!(engine.cached_vectors(), 2);
    }

    #[test]
    fn release_model_forces_reload() {
        let engine = hashing_engine();
        engine.embed("first").unwrap();
        engine.release_model();
        assert!(!engine.is_loaded());
        engine.embed("second").unwrap();
        assert_eq!(engine.load_count(), 2);
    }
}
