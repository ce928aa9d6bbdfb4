use serde::{Deserialize, Serialize};

use crate::constants::{SEVERITY_HIGH, SEVERITY_MEDIUM, SEVERITY_VERY_HIGH};

/// Discrete severity tier derived from the similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Severity {
    /// Deterministic step function over the similarity score.
    pub fn from_score(score: f32) -> Self {
        if score >= SEVERITY_VERY_HIGH {
            Severity::VeryHigh
        } else if score >= SEVERITY_HIGH {
            Severity::High
        } else if score >= SEVERITY_MEDIUM {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::VeryHigh => "VeryHigh",
        };
        write!(f, "{label}")
    }
}

/// One flagged comment, never mutated after creation.
///
/// Serialization names are the stable wire contract consumed by moderation
/// dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Normalized comment text used for comparison.
    pub comment: String,

    /// The comment exactly as submitted.
    pub original_comment: String,

    /// Maximum cosine similarity against the corpus, in `[0, 1]`, rounded
    /// to 3 decimals.
    pub similarity_score: f32,

    /// The reference sentence with maximum similarity (argmax, first
    /// occurrence on ties).
    pub matched_pattern: String,

    /// Severity tier for `similarity_score`.
    pub severity: Severity,

    /// Bounded confidence in `[0, 1]`, rounded to 3 decimals.
    pub confidence: f32,
}
