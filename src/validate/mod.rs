//! Post-match validation: vetoes high-similarity matches that are
//! similarity artifacts rather than genuine abuse.
//!
//! Pure embedding similarity cannot distinguish "structurally similar
//! sentence" from "semantically abusive sentence" at the margin. The veto is
//! a cheap, interpretable guard against exactly that failure mode: a very
//! high score where the matched reference carries an explicit term but the
//! comment itself does not.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::debug;

use crate::constants::VETO_SIMILARITY;
use crate::lexicon::Lexicon;

/// Explicit-term cross-check for threshold-passing matches.
#[derive(Clone)]
pub struct MatchValidator {
    lexicon: Arc<Lexicon>,
}

impl MatchValidator {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Accepts or vetoes a candidate match.
    ///
    /// Veto rule: similarity above [`VETO_SIMILARITY`], no explicit term in
    /// the comment, and an explicit term in the matched reference. Every
    /// other combination is accepted.
    pub fn is_valid(&self, normalized_comment: &str, matched_reference: &str, score: f32) -> bool {
        let comment_lower = normalized_comment.to_lowercase();
        let reference_lower = matched_reference.to_lowercase();

        let comment_has_term = self.lexicon.has_explicit_term(&comment_lower);
        let reference_has_term = self.lexicon.has_explicit_term(&reference_lower);

        if score > VETO_SIMILARITY && !comment_has_term && reference_has_term {
            debug!(
                score,
                "Vetoed match: high similarity without lexical corroboration"
            );
            return false;
        }

        true
    }
}
