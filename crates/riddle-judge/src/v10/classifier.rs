//! Multinomial logistic classifier over the v10 features.

use std::path::Path;

use chrono::{DateTime, Utc};
use riddle_core::config::ClassifierConfig;
use riddle_core::constants::{LABEL_COUNT, V10_FEATURE_COUNT};
use riddle_core::errors::{ClassifierError, RiddleResult};
use riddle_core::JudgeResult;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::features::{V10Features, FEATURE_NAMES};

/// Probabilities this close count as tied.
const TIE_EPSILON: f64 = 1e-12;

/// On-disk weight file produced by the offline trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightFile {
    pub version: String,
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
    pub labels: Vec<String>,
    pub feature_names: Vec<String>,
    pub bias: Vec<f64>,
    pub weights: Vec<Vec<f64>>,
}

/// Classifier output before hard guards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub label: JudgeResult,
    pub confidence: f64,
    /// Indexed like [`JudgeResult::ALL`].
    pub probabilities: [f64; LABEL_COUNT],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SoftmaxClassifier {
    version: String,
    bias: [f64; LABEL_COUNT],
    weights: [[f64; V10_FEATURE_COUNT]; LABEL_COUNT],
}

impl SoftmaxClassifier {
    /// All-zero weights: uniform probabilities, label `irrelevant`.
    pub fn zero() -> Self {
        Self {
            version: "zero".to_string(),
            bias: [0.0; LABEL_COUNT],
            weights: [[0.0; V10_FEATURE_COUNT]; LABEL_COUNT],
        }
    }

    /// Validate and adopt a parsed weight file.
    pub fn from_weight_file(file: WeightFile) -> RiddleResult<Self> {
        let expected_labels: Vec<&str> = JudgeResult::ALL.iter().map(|l| l.as_str()).collect();
        if file.labels.iter().map(String::as_str).ne(expected_labels.iter().copied()) {
            return Err(ClassifierError::Malformed {
                reason: format!("labels must be {expected_labels:?}, got {:?}", file.labels),
            }
            .into());
        }
        if file.feature_names.len() != V10_FEATURE_COUNT {
            return Err(ClassifierError::FeatureMismatch {
                expected: V10_FEATURE_COUNT,
                actual: file.feature_names.len(),
            }
            .into());
        }
        if let Some((i, name)) = file
            .feature_names
            .iter()
            .enumerate()
            .find(|(i, name)| name.as_str() != FEATURE_NAMES[*i])
        {
            return Err(ClassifierError::Malformed {
                reason: format!("feature {i} is '{name}', expected '{}'", FEATURE_NAMES[i]),
            }
            .into());
        }

        let bias: [f64; LABEL_COUNT] = file.bias.as_slice().try_into().map_err(|_| {
            ClassifierError::Malformed {
                reason: format!("bias has {} entries, expected {LABEL_COUNT}", file.bias.len()),
            }
        })?;
        if file.weights.len() != LABEL_COUNT {
            return Err(ClassifierError::Malformed {
                reason: format!("weights has {} rows, expected {LABEL_COUNT}", file.weights.len()),
            }
            .into());
        }
        let mut weights = [[0.0; V10_FEATURE_COUNT]; LABEL_COUNT];
        for (row, values) in weights.iter_mut().zip(&file.weights) {
            *row = values.as_slice().try_into().map_err(|_| ClassifierError::FeatureMismatch {
                expected: V10_FEATURE_COUNT,
                actual: values.len(),
            })?;
        }
        if bias.iter().chain(weights.iter().flatten()).any(|w| !w.is_finite()) {
            return Err(ClassifierError::Malformed {
                reason: "non-finite weight".to_string(),
            }
            .into());
        }

        Ok(Self {
            version: file.version,
            bias,
            weights,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> RiddleResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|_| ClassifierError::WeightsNotFound {
            path: path.display().to_string(),
        })?;
        let file: WeightFile = serde_json::from_str(&raw).map_err(|e| ClassifierError::Malformed {
            reason: e.to_string(),
        })?;
        Self::from_weight_file(file)
    }

    /// Load the configured weights, degrading to [`Self::zero`] on any failure.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let Some(path) = config.weights_path.as_deref() else {
            info!("no classifier weights configured, using zero matrix");
            return Self::zero();
        };
        match Self::load(path) {
            Ok(classifier) => {
                info!(path, version = %classifier.version, "classifier weights loaded");
                classifier
            }
            Err(e) => {
                warn!(path, error = %e, "classifier weights unavailable, using zero matrix");
                Self::zero()
            }
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_zero(&self) -> bool {
        self.bias.iter().chain(self.weights.iter().flatten()).all(|w| *w == 0.0)
    }

    pub fn predict(&self, features: &V10Features) -> Prediction {
        let mut logits = self.bias;
        for (logit, row) in logits.iter_mut().zip(&self.weights) {
            *logit += row.iter().zip(&features.values).map(|(w, x)| w * x).sum::<f64>();
        }
        let probabilities = softmax(logits);
        let label = argmax_prefer_irrelevant(&probabilities);
        Prediction {
            label,
            confidence: probabilities[label.index()],
            probabilities,
        }
    }
}

fn softmax(logits: [f64; LABEL_COUNT]) -> [f64; LABEL_COUNT] {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut out = logits.map(|l| (l - max).exp());
    let sum: f64 = out.iter().sum();
    for p in &mut out {
        *p /= sum;
    }
    out
}

/// Highest probability; ties resolve to `irrelevant`, else label order.
fn argmax_prefer_irrelevant(probabilities: &[f64; LABEL_COUNT]) -> JudgeResult {
    let max = probabilities.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let tied: Vec<JudgeResult> = JudgeResult::ALL
        .into_iter()
        .filter(|l| (probabilities[l.index()] - max).abs() <= TIE_EPSILON)
        .collect();
    if tied.contains(&JudgeResult::Irrelevant) {
        JudgeResult::Irrelevant
    } else {
        tied.first().copied().unwrap_or(JudgeResult::Irrelevant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_matrix_is_uniform_and_irrelevant() {
        let p = SoftmaxClassifier::zero().predict(&V10Features::default());
        assert_eq!(p.label, JudgeResult::Irrelevant);
        for prob in p.probabilities {
            assert!((prob - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn softmax_sums_to_one() {
        let p = softmax([1.0, 2.0, -3.0, 1000.0]);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(p[3] > 0.99);
    }

    #[test]
    fn ties_without_irrelevant_use_label_order() {
        assert_eq!(argmax_prefer_irrelevant(&[0.4, 0.4, 0.1, 0.1]), JudgeResult::Yes);
        assert_eq!(argmax_prefer_irrelevant(&[0.1, 0.4, 0.4, 0.1]), JudgeResult::Irrelevant);
    }
}
