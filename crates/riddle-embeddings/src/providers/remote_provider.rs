//! Remote inference-service embedding provider.
//!
//! POSTs `{"inputs": [...]}` to an HTTP endpoint and expects a JSON array
//! of vectors back, one per input, in order.

use std::time::Duration;

use reqwest::blocking::Client;
use riddle_core::errors::{EmbeddingError, RiddleResult};
use riddle_core::traits::IEmbeddingProvider;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a [String],
}

/// Embedding provider backed by a remote inference service.
pub struct RemoteProvider {
    client: Client,
    endpoint: String,
    dimensions: usize,
}

impl RemoteProvider {
    pub fn new(endpoint: &str, dimensions: usize, timeout: Duration) -> RiddleResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                path: endpoint.to_string(),
                reason: format!("http client build failed: {e}"),
            })?;
        debug!(endpoint, dims = dimensions, "remote embedding provider ready");
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            dimensions,
        })
    }

    fn request(&self, texts: &[String]) -> RiddleResult<Vec<Vec<f32>>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&EmbedRequest { inputs: texts })
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("embedding request failed: {e}"),
            })?;

        let vectors: Vec<Vec<f32>> =
            response
                .json()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("unexpected embedding response: {e}"),
                })?;

        if vectors.len() != texts.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!(
                    "service returned {} vectors for {} inputs",
                    vectors.len(),
                    texts.len()
                ),
            }
            .into());
        }
        if let Some(bad) = vectors.iter().find(|v| v.len() != self.dimensions) {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: bad.len(),
            }
            .into());
        }
        Ok(vectors)
    }
}

impl IEmbeddingProvider for RemoteProvider {
    fn embed(&self, text: &str) -> RiddleResult<Vec<f32>> {
        let mut vectors = self.request(&[text.to_string()])?;
        vectors.pop().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "empty embedding response".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> RiddleResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "remote"
    }
}
