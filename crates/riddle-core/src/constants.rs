/// Riddle system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of scalars in the v10 feature vector.
pub const V10_FEATURE_COUNT: usize = 18;

/// Number of judgment labels.
pub const LABEL_COUNT: usize = 4;

/// Separator used when hints and explanation are folded into the truth text.
pub const ANSWER_SEGMENT_SEPARATOR: &str = ". ";
