//! Default values for every configuration section.
//!
//! Thresholds and bonus magnitudes are empirically tuned against played
//! puzzles and have no closed-form derivation. Re-tune them with the
//! evaluation harness rather than editing them by intuition.

// Embedding
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "onnx";
pub const DEFAULT_MODEL_PATH: &str = "models/paraphrase-multilingual-minilm-l12-v2.onnx";
pub const DEFAULT_MAX_SEQUENCE_LENGTH: usize = 128;
pub const DEFAULT_TOKEN_TYPE_IDS: bool = true;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 32;
pub const DEFAULT_REMOTE_ENDPOINT: &str = "http://127.0.0.1:8080/embed";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 5_000;
pub const DEFAULT_EMBEDDING_CACHE_TTL_SECS: u64 = 3_600;
pub const DEFAULT_EMBEDDING_CONCURRENCY: usize = 4;
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;

// Knowledge
pub const DEFAULT_MIN_TOKEN_CHARS: usize = 2;
pub const DEFAULT_MAX_TOKENS: usize = 64;
pub const DEFAULT_TOP_K_SENTENCES: usize = 16;
pub const DEFAULT_ENTITY_SET_SIZE: usize = 32;
pub const DEFAULT_MAX_CONCEPTS: usize = 64;
pub const DEFAULT_MAX_HIERARCHY_PER_TOKEN: usize = 4;
pub const DEFAULT_TAXONOMY_DEPTH: usize = 2;
pub const DEFAULT_EMBEDDING_SYNONYM_THRESHOLD: f64 = 0.82;
pub const DEFAULT_EMBEDDING_SYNONYM_TOKENS: usize = 8;
pub const DEFAULT_MIN_QUESTION_CHARS: usize = 2;
pub const DEFAULT_MAX_QUESTION_CHARS: usize = 500;

// Decision thresholds (v9 ladder)
pub const DEFAULT_STRONG_MISMATCH_ANSWER: f64 = 0.50;
pub const DEFAULT_DECISIVE_ANSWER: f64 = 0.82;
pub const DEFAULT_DECISIVE_CONTENT: f64 = 0.55;
pub const DEFAULT_YES_ANSWER: f64 = 0.62;
pub const DEFAULT_NO_CONTENT: f64 = 0.45;
pub const DEFAULT_NO_ANSWER_MAX: f64 = 0.50;
pub const DEFAULT_CONTEXT_SIMILARITY: f64 = 0.35;
pub const DEFAULT_CONTEXT_TOKEN_OVERLAP: f64 = 0.15;
pub const DEFAULT_CONTEXT_DOMAIN_OVERLAP: f64 = 0.10;
pub const DEFAULT_WH_TOKEN_OVERLAP: f64 = 0.20;
pub const DEFAULT_AMBIGUOUS_LOW: f64 = 0.40;
pub const DEFAULT_AMBIGUOUS_HIGH: f64 = 0.55;
pub const DEFAULT_HARD_GUARD_ANSWER: f64 = 0.80;

// Similarity adjustments
pub const DEFAULT_ANTONYM_PENALTY: f64 = 0.25;
pub const DEFAULT_CONCEPT_BONUS: f64 = 0.04;
pub const DEFAULT_CONCEPT_BONUS_CAP: f64 = 0.12;
pub const DEFAULT_MULTI_CONCEPT_SCALE: f64 = 1.5;
pub const DEFAULT_INFERRED_BONUS: f64 = 0.05;
pub const DEFAULT_CONTEXTUAL_BONUS: f64 = 0.04;
pub const DEFAULT_TAXONOMY_BONUS: f64 = 0.05;
pub const DEFAULT_GENERALIZATION_PENALTY: f64 = 0.05;
pub const DEFAULT_GENERALIZATION_BONUS: f64 = 0.03;
pub const DEFAULT_MODALITY_PENALTY: f64 = 0.03;
pub const DEFAULT_ADJUSTED_WEIGHT: f64 = 0.70;

// Classifier
pub const DEFAULT_WEIGHTS_PATH: &str = "models/v10_weights.json";

// Session
pub const DEFAULT_MAX_PUZZLES: u64 = 256;
pub const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 7_200;
