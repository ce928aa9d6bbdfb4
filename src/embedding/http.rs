//! Remote embedding oracle over HTTP.
//!
//! Speaks the text-embeddings-inference wire shape: POST `{"inputs": [..]}`,
//! response is a JSON array of float vectors, one per input, in order.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::error::EmbeddingError;
use super::EmbeddingOracle;

#[derive(Serialize)]
struct EmbedRequest<'a> {
    inputs: &'a [String],
}

/// Oracle backed by a remote embedding server.
#[derive(Debug, Clone)]
pub struct HttpEmbeddingOracle {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpEmbeddingOracle {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmbeddingOracle for HttpEmbeddingOracle {
    async fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        debug!(
            endpoint = %self.endpoint,
            batch_size = texts.len(),
            "Requesting embeddings"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&EmbedRequest { inputs: texts })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let vectors: Vec<Vec<f32>> =
            response
                .json()
                .await
                .map_err(|e| EmbeddingError::BadResponse {
                    reason: e.to_string(),
                })?;

        if vectors.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                sent: texts.len(),
                received: vectors.len(),
            });
        }

        if let Some(first) = vectors.first() {
            let dim = first.len();
            if dim == 0 || vectors.iter().any(|v| v.len() != dim) {
                return Err(EmbeddingError::BadResponse {
                    reason: "inconsistent or zero embedding dimensions".to_string(),
                });
            }
        }

        Ok(vectors)
    }
}
