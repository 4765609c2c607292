//! Embedding provider adapters, one per backend.

pub mod hashing_provider;
pub mod onnx_provider;
pub mod remote_provider;

use std::sync::Arc;
use std::time::Duration;

use riddle_core::config::{EmbeddingConfig, ProviderKind};
use riddle_core::errors::RiddleResult;
use riddle_core::traits::IEmbeddingProvider;

pub use hashing_provider::HashingProvider;
pub use onnx_provider::OnnxProvider;
pub use remote_provider::RemoteProvider;

/// Deferred provider construction. Called by the engine on first use.
pub type ProviderLoader =
    Box<dyn Fn() -> RiddleResult<Arc<dyn IEmbeddingProvider>> + Send + Sync>;

/// Build the loader for the provider named in configuration.
///
/// Nothing is loaded here; the model is only touched when the engine
/// first needs a vector.
pub fn create_loader(config: &EmbeddingConfig) -> ProviderLoader {
    let dims = config.dimensions;
    match config.provider {
        ProviderKind::Onnx => {
            let config = config.clone();
            Box::new(move || {
                let provider: Arc<dyn IEmbeddingProvider> = Arc::new(OnnxProvider::load(&config)?);
                Ok(provider)
            })
        }
        ProviderKind::Remote => {
            let endpoint = config.endpoint.clone();
            let timeout = Duration::from_secs(config.timeout_secs);
            Box::new(move || {
                let provider: Arc<dyn IEmbeddingProvider> =
                    Arc::new(RemoteProvider::new(&endpoint, dims, timeout)?);
                Ok(provider)
            })
        }
        ProviderKind::Hashing => Box::new(move || {
            let provider: Arc<dyn IEmbeddingProvider> = Arc::new(HashingProvider::new(dims));
            Ok(provider)
        }),
    }
}
