//! Reference corpus: the fixed, pre-filtered set of sentences known to
//! contain abusive language, plus their embeddings.
//!
//! The corpus is built exactly once at startup and shared read-only by every
//! detection call. An empty corpus after filtering is a fatal
//! misconfiguration, not a per-request error: a service that can never match
//! must refuse to start.

pub mod error;
pub mod source;


pub use error::CorpusError;
pub use source::{CorpusSource, JsonCorpusSource, LabeledSentence};

use std::sync::Arc;

use tracing::{debug, info};

use crate::embedding::{cosine_similarity, EmbeddingOracle};
use crate::lexicon::Lexicon;
use crate::normalize::word_count;

/// A reference sentence and its precomputed embedding.
#[derive(Debug, Clone)]
pub struct ReferenceSentence {
    pub text: String,
    pub embedding: Vec<f32>,
}

/// Best corpus match for a query embedding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorpusMatch<'a> {
    /// Index of the matched sentence in corpus order.
    pub index: usize,
    /// Matched reference text.
    pub text: &'a str,
    /// Cosine similarity clamped to `[0, 1]`.
    pub score: f32,
}

/// Immutable, pre-embedded reference corpus.
#[derive(Debug)]
pub struct ReferenceCorpus {
    sentences: Vec<ReferenceSentence>,
}

impl ReferenceCorpus {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn sentences(&self) -> &[ReferenceSentence] {
        &self.sentences
    }

    /// Argmax cosine similarity over the corpus.
    ///
    /// Ties keep the first occurrence in corpus order (strict `>` scan).
    /// Negative cosines clamp to zero; they carry no match information here.
    pub fn best_match(&self, query: &[f32]) -> Option<CorpusMatch<'_>> {
        let mut best: Option<CorpusMatch<'_>> = None;

        for (index, sentence) in self.sentences.iter().enumerate() {
            let score = cosine_similarity(query, &sentence.embedding).clamp(0.0, 1.0);
            if best.is_none_or(|b| score > b.score) {
                best = Some(CorpusMatch {
                    index,
                    text: &sentence.text,
                    score,
                });
            }
        }

        best
    }
}

/// Builds the [`ReferenceCorpus`] from labeled sentences.
///
/// Only abusive-labeled entries are candidates; the noise filter then drops
/// entries that are too short or whose context is commercial, veterinary or
/// educational rather than abusive (domain words that cooccur with a labeled
/// term by coincidence, e.g. a pet-food brand near a literal animal-insult
/// word).
pub struct CorpusBuilder {
    lexicon: Arc<Lexicon>,
}

impl CorpusBuilder {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub async fn build(
        &self,
        labeled: Vec<LabeledSentence>,
        oracle: &dyn EmbeddingOracle,
    ) -> Result<ReferenceCorpus, CorpusError> {
        let total = labeled.len();

        let kept: Vec<String> = labeled
            .into_iter()
            .filter(|entry| entry.is_abusive)
            .map(|entry| entry.text)
            .filter(|text| self.keep_sentence(text))
            .collect();

        debug!(
            total,
            kept = kept.len(),
            "Filtered labeled dataset into reference candidates"
        );

        if kept.is_empty() {
            return Err(CorpusError::EmptyAfterFiltering);
        }

        let embeddings = oracle.encode(&kept).await?;
        if embeddings.len() != kept.len() {
            return Err(CorpusError::EmbeddingCountMismatch {
                expected: kept.len(),
                actual: embeddings.len(),
            });
        }

        let sentences: Vec<ReferenceSentence> = kept
            .into_iter()
            .zip(embeddings)
            .map(|(text, embedding)| ReferenceSentence { text, embedding })
            .collect();

        info!(
            sentences = sentences.len(),
            lexicon_version = self.lexicon.version(),
            "Reference corpus built"
        );

        Ok(ReferenceCorpus { sentences })
    }

    fn keep_sentence(&self, text: &str) -> bool {
        if word_count(text) < crate::constants::MIN_WORD_COUNT {
            return false;
        }
        !self.lexicon.has_noise_marker(&text.to_lowercase())
    }
}
