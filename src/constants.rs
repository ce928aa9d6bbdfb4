//! Cross-cutting, shared constants for the detection pipeline.
//!
//! The similarity floor and severity boundaries are tuned values: raising
//! them trades recall for precision. If you change one, re-run the property
//! tests in `tests/detection_properties.rs`.

/// Default caller-requested similarity threshold.
pub const DEFAULT_THRESHOLD: f32 = 0.85;

/// Lower bound on the effective comparison threshold. Callers can tighten
/// matching above this, never loosen below it.
pub const DEFAULT_SIMILARITY_FLOOR: f32 = 0.88;

/// Minimum normalized length (chars, exclusive) for a comment to be compared.
pub const MIN_NORMALIZED_CHARS: usize = 10;

/// Minimum word count for both eligible comments and reference sentences.
pub const MIN_WORD_COUNT: usize = 3;

/// Similarity above which a match without lexical corroboration is vetoed.
pub const VETO_SIMILARITY: f32 = 0.9;

/// Severity tier boundaries (inclusive lower bounds).
pub const SEVERITY_VERY_HIGH: f32 = 0.95;
pub const SEVERITY_HIGH: f32 = 0.90;
pub const SEVERITY_MEDIUM: f32 = 0.85;

/// Confidence bonus applied when a high-precision explicit term is present.
pub const EXPLICIT_TERM_BONUS: f32 = 0.05;

/// Comments shorter than this many words are discounted for length-based
/// uncertainty.
pub const SHORT_COMMENT_WORDS: usize = 5;

/// Multiplicative confidence discount for short comments.
pub const SHORT_COMMENT_DISCOUNT: f32 = 0.9;

/// Default timeout applied to a single oracle batch-encode call.
pub const DEFAULT_ORACLE_TIMEOUT_SECS: u64 = 30;

/// Rounds to 3 decimal places. Scores and confidences are reported at this
/// precision.
#[inline]
pub fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
