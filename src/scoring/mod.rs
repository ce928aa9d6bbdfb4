//! Confidence scoring and severity classification for validated matches.
//!
//! Both are deterministic functions of the raw similarity and the normalized
//! comment; neither touches the oracle.

pub mod types;


pub use types::{DetectionResult, Severity};

use std::sync::Arc;

use crate::constants::{
    round3, EXPLICIT_TERM_BONUS, SHORT_COMMENT_DISCOUNT, SHORT_COMMENT_WORDS,
};
use crate::lexicon::Lexicon;
use crate::normalize::word_count;

/// Derives a bounded confidence score from the raw similarity.
#[derive(Clone)]
pub struct ConfidenceScorer {
    lexicon: Arc<Lexicon>,
}

impl ConfidenceScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Confidence in `[0, 1]`, rounded to 3 decimals.
    ///
    /// Starts at the similarity score; a high-precision explicit term adds
    /// [`EXPLICIT_TERM_BONUS`] (capped at 1.0); fewer than
    /// [`SHORT_COMMENT_WORDS`] words discounts by [`SHORT_COMMENT_DISCOUNT`]
    /// even when the comment is lexically explicit.
    pub fn confidence(&self, score: f32, normalized_comment: &str) -> f32 {
        let mut confidence = score;

        if self
            .lexicon
            .has_high_precision_term(&normalized_comment.to_lowercase())
        {
            confidence = (confidence + EXPLICIT_TERM_BONUS).min(1.0);
        }

        if word_count(normalized_comment) < SHORT_COMMENT_WORDS {
            confidence *= SHORT_COMMENT_DISCOUNT;
        }

        round3(confidence.clamp(0.0, 1.0))
    }
}
