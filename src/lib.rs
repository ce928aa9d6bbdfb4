//! Saring library crate (used by the server binary and integration tests).
//!
//! Saring flags abusive Indonesian social-media comments by semantic
//! similarity against a labeled reference corpus. The pipeline is:
//! normalize → eligibility filter → batch embed → nearest-reference match →
//! threshold cut → explicit-term validation → confidence/severity scoring.
//!
//! # Public API Surface
//!
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`AbuseDetector`], [`DetectorConfig`] - Batch detection driver
//! - [`ReferenceCorpus`], [`CorpusBuilder`], [`JsonCorpusSource`] - Reference
//!   corpus construction
//! - [`Lexicon`], [`LexiconFile`] - Heuristic data tables
//! - [`EmbeddingOracle`], [`HttpEmbeddingOracle`] - Embedding seam
//! - [`CommentSource`], [`YouTubeCommentSource`] - Comment acquisition
//! - [`DetectionResult`], [`Severity`] - Per-comment verdicts
//! - [`gateway::create_router`] - Axum router for the HTTP surface
//!
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod corpus;
pub mod detector;
pub mod embedding;
pub mod filter;
pub mod gateway;
pub mod lexicon;
pub mod normalize;
pub mod scoring;
pub mod source;
pub mod validate;

pub use config::{Config, ConfigError, DEFAULT_EMBEDDING_URL};
pub use constants::{round3, DEFAULT_SIMILARITY_FLOOR, DEFAULT_THRESHOLD};
pub use corpus::{
    CorpusBuilder, CorpusError, CorpusMatch, CorpusSource, JsonCorpusSource, LabeledSentence,
    ReferenceCorpus, ReferenceSentence,
};
pub use detector::{AbuseDetector, DetectError, DetectorConfig};
pub use embedding::{cosine_similarity, EmbeddingError, EmbeddingOracle, HttpEmbeddingOracle};
pub use filter::{EligibilityFilter, RejectReason};
pub use gateway::{create_router, AppState, GatewayError};
pub use lexicon::{Lexicon, LexiconError, LexiconFile};
pub use normalize::{normalize, word_count};
pub use scoring::{ConfidenceScorer, DetectionResult, Severity};
pub use source::{CommentSource, Platform, SourceError, YouTubeCommentSource};
pub use validate::MatchValidator;

#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbeddingOracle;
#[cfg(any(test, feature = "mock"))]
pub use source::MockCommentSource;
