//! # riddle-embeddings
//!
//! Sentence embeddings for the question judge.
//!
//! - Providers: local ONNX model, remote inference service, deterministic
//!   feature hashing. One is chosen at startup from configuration.
//! - [`EmbeddingEngine`]: loads the provider at most once (concurrent first
//!   callers share the load, a failed load is retried once), L2-normalizes
//!   every vector, memoizes by normalized text in a process-wide LRU+TTL
//!   cache, and embeds batches on a bounded worker pool.
//! - [`similarity`]: cosine similarity over pre-normalized vectors.

pub mod cache;
pub mod engine;
pub mod providers;
pub mod similarity;

pub use engine::EmbeddingEngine;
pub use similarity::{cosine_similarity, l2_normalize, SimilarityStats};
