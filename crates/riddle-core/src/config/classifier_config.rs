use serde::{Deserialize, Serialize};

use super::defaults;

/// v10 classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Weight file path. `None` runs with the zero matrix.
    pub weights_path: Option<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            weights_path: Some(defaults::DEFAULT_WEIGHTS_PATH.to_string()),
        }
    }
}
