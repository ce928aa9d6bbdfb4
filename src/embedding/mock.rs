//! Deterministic in-memory oracle for tests and examples.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;

use super::error::EmbeddingError;
use super::EmbeddingOracle;

/// Embedding dimension used for fallback vectors.
pub const MOCK_EMBEDDING_DIM: usize = 16;

/// Mock oracle with per-text vector overrides.
///
/// Texts without an assigned vector get a deterministic hash-derived unit
/// vector, so unrelated texts are (almost surely) dissimilar. Supports
/// failure and latency injection, and counts `encode` calls so tests can
/// assert the no-eligible-comments fast path never reaches the oracle.
#[derive(Default)]
pub struct MockEmbeddingOracle {
    vectors: RwLock<HashMap<String, Vec<f32>>>,
    encode_calls: AtomicUsize,
    fail: bool,
    delay: Option<Duration>,
}

impl MockEmbeddingOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oracle that fails every encode call.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Oracle that sleeps before answering (for timeout tests).
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Assigns a fixed vector to an exact text.
    pub fn assign(&self, text: impl Into<String>, vector: Vec<f32>) {
        self.vectors
            .write()
            .expect("mock vector table lock")
            .insert(text.into(), vector);
    }

    /// Number of `encode` calls observed.
    pub fn encode_calls(&self) -> usize {
        self.encode_calls.load(Ordering::SeqCst)
    }

    fn fallback_vector(text: &str) -> Vec<f32> {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let mut seed = hasher.finish();

        let mut v: Vec<f32> = (0..MOCK_EMBEDDING_DIM)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                ((seed >> 33) % 2000) as f32 / 1000.0 - 1.0
            })
            .collect();

        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut v {
                *x /= norm;
            }
        }
        v
    }
}

#[async_trait]
impl EmbeddingOracle for MockEmbeddingOracle {
    async fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.encode_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail {
            return Err(EmbeddingError::RequestFailed {
                reason: "mock oracle configured to fail".to_string(),
            });
        }

        let vectors = self.vectors.read().expect("mock vector table lock");
        Ok(texts
            .iter()
            .map(|t| {
                vectors
                    .get(t)
                    .cloned()
                    .unwrap_or_else(|| Self::fallback_vector(t))
            })
            .collect())
    }
}
