//! Embedding oracle seam.
//!
//! The pretrained sentence-embedding model is consumed as an opaque oracle:
//! it maps a batch of strings to fixed-dimensional vectors, and similarity is
//! plain cosine. [`HttpEmbeddingOracle`] talks to a remote embedding server;
//! [`MockEmbeddingOracle`] backs tests and the `mock` feature.

mod error;
pub mod http;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use error::EmbeddingError;
pub use http::HttpEmbeddingOracle;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbeddingOracle;

use async_trait::async_trait;

/// Batch text-to-vector encoder.
///
/// Implementations must return exactly one vector per input text, in input
/// order. Failures are batch-fatal for the caller; no retry happens here.
#[async_trait]
pub trait EmbeddingOracle: Send + Sync {
    async fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}

/// Cosine similarity between two vectors.
///
/// Mismatched lengths, empty or zero-norm vectors yield `0.0` rather than an
/// error; the corpus scan treats those as non-matches.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}
