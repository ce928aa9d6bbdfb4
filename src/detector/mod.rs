//! Batch detection driver.
//!
//! Orchestrates normalize → eligibility → batch encode → threshold cut →
//! validation → scoring → ranking over one batch of comments. A batch either
//! completes fully or fails entirely; there is no partial-success contract.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::DetectError;

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::constants::{
    round3, DEFAULT_ORACLE_TIMEOUT_SECS, DEFAULT_SIMILARITY_FLOOR,
};
use crate::corpus::ReferenceCorpus;
use crate::embedding::EmbeddingOracle;
use crate::filter::EligibilityFilter;
use crate::lexicon::Lexicon;
use crate::normalize::normalize;
use crate::scoring::{ConfidenceScorer, DetectionResult, Severity};
use crate::validate::MatchValidator;

/// Operator-level tuning for the detector.
///
/// The similarity floor bounds the effective threshold from below: callers
/// of [`AbuseDetector::detect`] can tighten matching per request but never
/// loosen it past the floor.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub similarity_floor: f32,
    pub oracle_timeout: Duration,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            similarity_floor: DEFAULT_SIMILARITY_FLOOR,
            oracle_timeout: Duration::from_secs(DEFAULT_ORACLE_TIMEOUT_SECS),
        }
    }
}

/// Stateless detection service over an immutable corpus and an oracle
/// handle. Construct once at startup, share by reference.
pub struct AbuseDetector {
    corpus: Arc<ReferenceCorpus>,
    oracle: Arc<dyn EmbeddingOracle>,
    filter: EligibilityFilter,
    validator: MatchValidator,
    scorer: ConfidenceScorer,
    config: DetectorConfig,
}

struct EligibleComment {
    index: usize,
    original: String,
    normalized: String,
}

impl AbuseDetector {
    pub fn new(
        corpus: Arc<ReferenceCorpus>,
        oracle: Arc<dyn EmbeddingOracle>,
        lexicon: Arc<Lexicon>,
        config: DetectorConfig,
    ) -> Self {
        Self {
            corpus,
            oracle,
            filter: EligibilityFilter::new(lexicon.clone()),
            validator: MatchValidator::new(lexicon.clone()),
            scorer: ConfidenceScorer::new(lexicon),
            config,
        }
    }

    pub fn corpus(&self) -> &ReferenceCorpus {
        &self.corpus
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Runs the full pipeline over one batch.
    ///
    /// Results are sorted by `similarity_score` descending. An empty or
    /// all-ineligible batch yields `Ok(vec![])` without consulting the
    /// oracle.
    pub async fn detect(
        &self,
        comments: &[String],
        threshold: f32,
    ) -> Result<Vec<DetectionResult>, DetectError> {
        self.detect_with_cancel(comments, threshold, &CancellationToken::new())
            .await
    }

    /// [`detect`](Self::detect) with coarse-grained cooperative cancellation:
    /// the token is checked before and after the oracle call, never
    /// mid-comparison.
    pub async fn detect_with_cancel(
        &self,
        comments: &[String],
        threshold: f32,
        cancel: &CancellationToken,
    ) -> Result<Vec<DetectionResult>, DetectError> {
        let eligible: Vec<EligibleComment> = comments
            .iter()
            .enumerate()
            .filter_map(|(index, original)| {
                let normalized = normalize(original);
                match self.filter.check(&normalized) {
                    None => Some(EligibleComment {
                        index,
                        original: original.clone(),
                        normalized,
                    }),
                    Some(reason) => {
                        debug!(index, ?reason, "Comment excluded from comparison");
                        None
                    }
                }
            })
            .collect();

        if eligible.is_empty() {
            debug!(batch = comments.len(), "No eligible comments in batch");
            return Ok(Vec::new());
        }

        if cancel.is_cancelled() {
            return Err(DetectError::Cancelled);
        }

        let texts: Vec<String> = eligible.iter().map(|c| c.normalized.clone()).collect();
        let embeddings = tokio::time::timeout(self.config.oracle_timeout, self.oracle.encode(&texts))
            .await
            .map_err(|_| DetectError::OracleTimeout {
                secs: self.config.oracle_timeout.as_secs(),
            })??;

        if cancel.is_cancelled() {
            return Err(DetectError::Cancelled);
        }

        if embeddings.len() != eligible.len() {
            return Err(DetectError::EmbeddingCountMismatch {
                expected: eligible.len(),
                actual: embeddings.len(),
            });
        }

        let effective_threshold = threshold.max(self.config.similarity_floor);

        let mut results: Vec<DetectionResult> = Vec::new();
        for (comment, embedding) in eligible.iter().zip(&embeddings) {
            let Some(matched) = self.corpus.best_match(embedding) else {
                continue;
            };

            if matched.score < effective_threshold {
                continue;
            }

            if !self
                .validator
                .is_valid(&comment.normalized, matched.text, matched.score)
            {
                debug!(
                    index = comment.index,
                    score = matched.score,
                    "Candidate vetoed by validator"
                );
                continue;
            }

            results.push(DetectionResult {
                comment: comment.normalized.clone(),
                original_comment: comment.original.clone(),
                similarity_score: round3(matched.score),
                matched_pattern: matched.text.to_string(),
                severity: Severity::from_score(matched.score),
                confidence: self.scorer.confidence(matched.score, &comment.normalized),
            });
        }

        results.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(Ordering::Equal)
        });

        info!(
            batch = comments.len(),
            eligible = eligible.len(),
            flagged = results.len(),
            effective_threshold,
            "Detection batch complete"
        );

        Ok(results)
    }

    /// Number of comments in the batch that would be compared (for response
    /// metadata; does not touch the oracle).
    pub fn eligible_count(&self, comments: &[String]) -> usize {
        comments
            .iter()
            .filter(|c| self.filter.is_eligible(&normalize(c)))
            .count()
    }
}
