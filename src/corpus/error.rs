use std::path::PathBuf;
use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse corpus file {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No reference sentences survived filtering. Startup-fatal: the service
    /// would otherwise silently return zero matches forever.
    #[error("reference corpus is empty after filtering")]
    EmptyAfterFiltering,

    #[error("embedding count mismatch: expected {expected}, got {actual}")]
    EmbeddingCountMismatch { expected: usize, actual: usize },

    #[error("corpus embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),
}
