//! Feature-hashing TF-IDF provider.
//!
//! Generates fixed-dimension vectors from term frequency scores hashed
//! into buckets. No model, no network: deterministic and always available,
//! which makes it the provider of choice for tests and air-gapped runs.

use std::collections::BTreeMap;

use riddle_core::errors::RiddleResult;
use riddle_core::traits::IEmbeddingProvider;

/// Deterministic hashed TF-IDF embedding provider.
///
/// Not as semantically rich as a neural model: texts are similar only when
/// they share surface terms.
pub struct HashingProvider {
    dimensions: usize,
}

impl HashingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    /// Tokenize text into lowercase alphanumeric terms.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn tfidf_vector(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        // Ordered map so bucket sums accumulate in a fixed order.
        let mut tf: BTreeMap<&str, f32> = BTreeMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];

        for (term, count) in &tf {
            let freq = count / total;
            // IDF approximation: penalize very short terms (likely stopwords).
            let idf = 1.0 + (term.chars().count() as f32).ln();
            let bucket = Self::hash_term(term, self.dimensions);
            vec[bucket] += freq * idf;
        }

        crate::similarity::l2_normalize(&mut vec);
        vec
    }
}

impl IEmbeddingProvider for HashingProvider {
    fn embed(&self, text: &str) -> RiddleResult<Vec<f32>> {
        Ok(self.tfidf_vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing-tfidf"
    }
}
