//! Eligibility filtering: decides which normalized comments carry enough
//! signal to be worth comparing at all.
//!
//! Embedding similarity over-triggers on generic short agreement/praise text
//! because it shares lexical structure with casual abusive text. Removing
//! that class before similarity is computed is cheaper and more precise than
//! post-filtering.


use std::sync::Arc;

use crate::constants::{MIN_NORMALIZED_CHARS, MIN_WORD_COUNT};
use crate::lexicon::Lexicon;

/// Why a comment was excluded from comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Normalized text is at or below the minimum length.
    TooShort,
    /// Fewer than the minimum number of words.
    TooFewWords,
    /// Every token is short non-alphanumeric noise (punctuation/emoji runs).
    TokenNoise,
    /// Matches a boilerplate pattern (greeting, laughter, ordinal, number).
    Boilerplate,
    /// Contains a positive-indicator substring; unconditionally disqualified.
    PositiveIndicator,
}

/// Pure eligibility predicate over normalized text.
#[derive(Clone)]
pub struct EligibilityFilter {
    lexicon: Arc<Lexicon>,
}

impl EligibilityFilter {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Returns the first reason the comment is excluded, or `None` if it is
    /// eligible for comparison.
    pub fn check(&self, normalized: &str) -> Option<RejectReason> {
        if normalized.chars().count() <= MIN_NORMALIZED_CHARS {
            return Some(RejectReason::TooShort);
        }

        let words: Vec<&str> = normalized.split_whitespace().collect();
        if words.len() < MIN_WORD_COUNT {
            return Some(RejectReason::TooFewWords);
        }

        if words
            .iter()
            .all(|w| w.chars().count() <= 2 && !w.chars().all(char::is_alphanumeric))
        {
            return Some(RejectReason::TokenNoise);
        }

        let lower = normalized.to_lowercase();
        if self.lexicon.matches_boilerplate(lower.trim()) {
            return Some(RejectReason::Boilerplate);
        }

        // Positive indicators override everything else: praise is never
        // worth a similarity comparison regardless of what else it contains.
        if self.lexicon.has_positive_indicator(&lower) {
            return Some(RejectReason::PositiveIndicator);
        }

        None
    }

    /// True if the comment passes all eligibility checks.
    pub fn is_eligible(&self, normalized: &str) -> bool {
        self.check(normalized).is_none()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Count of eligible comments in a batch (response metadata).
    pub fn eligible_count<'a>(&self, normalized: impl Iterator<Item = &'a str>) -> usize {
        normalized.filter(|text| self.is_eligible(text)).count()
    }
}
