//! Local sentence-embedding model on ONNX Runtime.
//!
//! Text is tokenized with the model's own `tokenizer.json`, so ids come
//! from the vocabulary the model was trained with. Batches are padded to
//! their longest row and token outputs are mean-pooled under the
//! attention mask.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use riddle_core::config::EmbeddingConfig;
use riddle_core::errors::{EmbeddingError, RiddleResult};
use riddle_core::traits::IEmbeddingProvider;
use tokenizers::{Encoding, Tokenizer, TruncationParams};
use tracing::debug;

/// Embedding provider over a local ONNX model and its tokenizer.
pub struct OnnxProvider {
    /// `run` takes `&mut self`.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    pad_id: u32,
    token_type_ids: bool,
    dimensions: usize,
    model_name: String,
}

impl OnnxProvider {
    /// Load the model and tokenizer named in `config`.
    ///
    /// # Errors
    /// `EmbeddingError::ModelLoadFailed` if either file is missing or invalid.
    pub fn load(config: &EmbeddingConfig) -> RiddleResult<Self> {
        let model_path = config.model_path.as_str();
        let path = Path::new(model_path);
        if !path.exists() {
            return Err(EmbeddingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: "model file not found".to_string(),
            }
            .into());
        }

        let tokenizer_path = config.resolved_tokenizer_path();
        let tokenizer = load_tokenizer(&tokenizer_path, config.max_sequence_length)?;
        let pad_id = pad_id(&tokenizer);

        let session = Session::builder()
            .map_err(load_failed(model_path))?
            .with_intra_threads(2)
            .map_err(load_failed(model_path))?
            .commit_from_file(model_path)
            .map_err(load_failed(model_path))?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(
            model = %model_name,
            tokenizer = %tokenizer_path,
            vocab = tokenizer.get_vocab_size(true),
            dims = config.dimensions,
            "ONNX model loaded"
        );

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            pad_id,
            token_type_ids: config.token_type_ids,
            dimensions: config.dimensions,
            model_name,
        })
    }

    fn infer(&self, texts: &[String]) -> RiddleResult<Vec<Vec<f32>>> {
        let encodings = self
            .tokenizer
            .encode_batch(texts.iter().map(String::as_str).collect::<Vec<&str>>(), true)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("tokenization failed: {e}"),
            })?;
        let inputs = BatchInputs::from_encodings(&encodings, self.pad_id);
        if inputs.seq == 0 {
            return Err(EmbeddingError::InferenceFailed {
                reason: "tokenizer produced no tokens".to_string(),
            }
            .into());
        }

        let shape = vec![inputs.batch as i64, inputs.seq as i64];
        let ids = Tensor::from_array((shape.clone(), inputs.ids)).map_err(tensor_failed)?;
        let mask =
            Tensor::from_array((shape.clone(), inputs.mask.clone())).map_err(tensor_failed)?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("session lock poisoned: {e}"),
            })?;

        let outputs = if self.token_type_ids {
            let types = Tensor::from_array((shape, inputs.type_ids)).map_err(tensor_failed)?;
            session.run(ort::inputs![ids, mask, types])
        } else {
            session.run(ort::inputs![ids, mask])
        }
        .map_err(|e| EmbeddingError::InferenceFailed {
            reason: e.to_string(),
        })?;

        let (_name, output) =
            outputs
                .iter()
                .next()
                .ok_or_else(|| EmbeddingError::InferenceFailed {
                    reason: "no output tensor".to_string(),
                })?;

        let (out_shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;
        let out_shape: Vec<i64> = out_shape.iter().copied().collect();

        let pooled = mean_pool(&out_shape, data, &inputs.mask)?;
        if let Some(bad) = pooled.iter().find(|v| v.len() != self.dimensions) {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: bad.len(),
            }
            .into());
        }
        Ok(pooled)
    }
}

/// Read `tokenizer.json` and cap sequences at `max_length` tokens.
pub fn load_tokenizer(path: &str, max_length: usize) -> RiddleResult<Tokenizer> {
    let tokenizer = Tokenizer::from_file(path).map_err(load_failed(path))?;
    with_truncation(tokenizer, max_length, path)
}

fn with_truncation(mut tokenizer: Tokenizer, max_length: usize, path: &str) -> RiddleResult<Tokenizer> {
    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length,
            ..Default::default()
        }))
        .map_err(load_failed(path))?;
    Ok(tokenizer)
}

/// The tokenizer's own padding id, else its pad token, else 0.
fn pad_id(tokenizer: &Tokenizer) -> u32 {
    tokenizer
        .get_padding()
        .map(|p| p.pad_id)
        .or_else(|| tokenizer.token_to_id("<pad>"))
        .or_else(|| tokenizer.token_to_id("[PAD]"))
        .unwrap_or(0)
}

/// Row-major `[batch, seq]` model inputs, padded to the longest row.
#[derive(Debug)]
struct BatchInputs {
    batch: usize,
    seq: usize,
    ids: Vec<i64>,
    mask: Vec<i64>,
    type_ids: Vec<i64>,
}

impl BatchInputs {
    fn from_encodings(encodings: &[Encoding], pad_id: u32) -> Self {
        let batch = encodings.len();
        let seq = encodings
            .iter()
            .map(|e| e.get_ids().len())
            .max()
            .unwrap_or(0);

        let mut ids = Vec::with_capacity(batch * seq);
        let mut mask = Vec::with_capacity(batch * seq);
        let mut type_ids = Vec::with_capacity(batch * seq);
        for e in encodings {
            let len = e.get_ids().len();
            ids.extend(e.get_ids().iter().map(|&v| i64::from(v)));
            mask.extend(e.get_attention_mask().iter().map(|&v| i64::from(v)));
            type_ids.extend(e.get_type_ids().iter().map(|&v| i64::from(v)));

            let pad = seq - len;
            ids.extend(std::iter::repeat(i64::from(pad_id)).take(pad));
            mask.extend(std::iter::repeat(0).take(pad));
            type_ids.extend(std::iter::repeat(0).take(pad));
        }

        Self {
            batch,
            seq,
            ids,
            mask,
            type_ids,
        }
    }
}

/// Pool model output into one vector per row.
///
/// `[batch, seq, dims]` is averaged over positions whose mask is set;
/// `[batch, dims]` is already pooled.
fn mean_pool(shape: &[i64], data: &[f32], mask: &[i64]) -> RiddleResult<Vec<Vec<f32>>> {
    match *shape {
        [batch, seq, dims] => {
            let (batch, seq, dims) = (batch as usize, seq as usize, dims as usize);
            if data.len() < batch * seq * dims || mask.len() < batch * seq {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!("output of {} values does not fit shape {shape:?}", data.len()),
                }
                .into());
            }
            Ok((0..batch)
                .map(|b| {
                    let mut pooled = vec![0.0f32; dims];
                    let mut count = 0usize;
                    for s in 0..seq {
                        if mask[b * seq + s] == 0 {
                            continue;
                        }
                        count += 1;
                        let start = (b * seq + s) * dims;
                        for (p, v) in pooled.iter_mut().zip(&data[start..start + dims]) {
                            *p += v;
                        }
                    }
                    if count > 0 {
                        for p in &mut pooled {
                            *p /= count as f32;
                        }
                    }
                    pooled
                })
                .collect())
        }
        [batch, dims] => {
            let (batch, dims) = (batch as usize, dims as usize);
            if dims == 0 || data.len() < batch * dims {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!("output of {} values does not fit shape {shape:?}", data.len()),
                }
                .into());
            }
            Ok(data[..batch * dims].chunks(dims).map(<[f32]>::to_vec).collect())
        }
        _ => Err(EmbeddingError::InferenceFailed {
            reason: format!("unexpected output shape: {shape:?}"),
        }
        .into()),
    }
}

fn load_failed<E: std::fmt::Display>(path: &str) -> impl Fn(E) -> EmbeddingError + '_ {
    move |e| EmbeddingError::ModelLoadFailed {
        path: path.to_string(),
        reason: e.to_string(),
    }
}

fn tensor_failed<E: std::fmt::Display>(e: E) -> EmbeddingError {
    EmbeddingError::InferenceFailed {
        reason: format!("tensor creation error: {e}"),
    }
}

impl IEmbeddingProvider for OnnxProvider {
    fn embed(&self, text: &str) -> RiddleResult<Vec<f32>> {
        let mut vectors = self.infer(&[text.to_string()])?;
        vectors.pop().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "model returned no rows".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> RiddleResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.infer(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const VOCAB_JSON: &str = r#"{
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [],
        "normalizer": {"type": "Lowercase"},
        "pre_tokenizer": {"type": "Whitespace"},
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": {"[UNK]": 0, "[PAD]": 1, "did": 2, "he": 3, "drown": 4, "?": 5},
            "unk_token": "[UNK]"
        }
    }"#;

    fn tokenizer(max_length: usize) -> Tokenizer {
        let t = Tokenizer::from_str(VOCAB_JSON).unwrap();
        with_truncation(t, max_length, "inline").unwrap()
    }

    fn encode(t: &Tokenizer, texts: &[&str]) -> Vec<Encoding> {
        t.encode_batch(texts.to_vec(), true).unwrap()
    }

    #[test]
    fn missing_model_file_is_load_error() {
        let config = EmbeddingConfig {
            model_path: "/nonexistent/model.onnx".into(),
            ..Default::default()
        };
        let err = OnnxProvider::load(&config).err().expect("load should fail");
        assert!(err.to_string().contains("model file not found"));
    }

    #[test]
    fn missing_tokenizer_fails_before_the_model_loads() {
        let dir = std::env::temp_dir().join(format!("riddle-onnx-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let model = dir.join("model.onnx");
        std::fs::write(&model, b"not a model").unwrap();

        let config = EmbeddingConfig {
            model_path: model.display().to_string(),
            ..Default::default()
        };
        let err = OnnxProvider::load(&config).err().expect("load should fail");
        assert!(err.to_string().contains("tokenizer.json"), "{err}");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn ids_come_from_the_vocabulary() {
        let t = tokenizer(16);
        let e = &encode(&t, &["Did he drown?"])[0];
        assert_eq!(e.get_ids(), &[2, 3, 4, 5]);

        let unknown = &encode(&t, &["Did she swim?"])[0];
        assert_eq!(unknown.get_ids(), &[2, 0, 0, 5]);
    }

    #[test]
    fn long_input_is_truncated() {
        let t = tokenizer(3);
        let e = &encode(&t, &["did he drown ?"])[0];
        assert_eq!(e.get_ids().len(), 3);
    }

    #[test]
    fn batch_rows_are_padded_and_masked() {
        let t = tokenizer(16);
        let encodings = encode(&t, &["did he drown ?", "he"]);
        let inputs = BatchInputs::from_encodings(&encodings, pad_id(&t));

        assert_eq!((inputs.batch, inputs.seq), (2, 4));
        assert_eq!(&inputs.ids[4..], &[3, 1, 1, 1]);
        assert_eq!(&inputs.mask[..4], &[1, 1, 1, 1]);
        assert_eq!(&inputs.mask[4..], &[1, 0, 0, 0]);
        assert_eq!(inputs.type_ids, vec![0; 8]);
    }

    #[test]
    fn pooling_ignores_padding() {
        // Row 0: two real tokens. Row 1: one real token, one pad.
        let data = [1.0, 3.0, 3.0, 5.0, 2.0, 2.0, 100.0, 100.0];
        let pooled = mean_pool(&[2, 2, 2], &data, &[1, 1, 1, 0]).unwrap();
        assert_eq!(pooled, vec![vec![2.0, 4.0], vec![2.0, 2.0]]);
    }

    #[test]
    fn pooled_output_passes_through() {
        let pooled = mean_pool(&[2, 2], &[1.0, 0.0, 0.0, 1.0], &[]).unwrap();
        assert_eq!(pooled, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn unexpected_shapes_are_inference_errors() {
        assert!(mean_pool(&[1, 1, 1, 1], &[0.0], &[1]).is_err());
        assert!(mean_pool(&[1, 4, 8], &[0.0; 4], &[1; 4]).is_err());
    }
}
