use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// No API key configured; fetching is impossible, not retryable.
    #[error("no API key configured for comment fetching")]
    MissingApiKey,

    #[error("could not extract a video id from url: {url}")]
    InvalidUrl { url: String },

    /// Comments can only be fetched from platforms with a client here.
    #[error("unsupported platform for url: {url}")]
    UnsupportedPlatform { url: String },

    #[error("comment request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("comment API returned status {status}: {body}")]
    ApiError { status: u16, body: String },
}
