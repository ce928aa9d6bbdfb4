use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum DetectError {
    /// Oracle failure is fatal for the batch; retry belongs to the caller's
    /// network layer, not here.
    #[error("embedding oracle failed: {0}")]
    Oracle(#[from] EmbeddingError),

    #[error("embedding oracle timed out after {secs}s")]
    OracleTimeout { secs: u64 },

    #[error("oracle returned {actual} embeddings for {expected} comments")]
    EmbeddingCountMismatch { expected: usize, actual: usize },

    #[error("detection batch was cancelled")]
    Cancelled,
}
