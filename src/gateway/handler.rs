use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::constants::DEFAULT_THRESHOLD;
use crate::scoring::DetectionResult;
use crate::source::{Platform, SourceError};

use super::error::GatewayError;
use super::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
    pub threshold: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub total_comments: usize,
    pub flagged_comments: usize,
    pub results: Vec<DetectionResult>,
    pub platform: &'static str,
    pub eligible_comments: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Fetches comments for a content URL and runs detection over them.
#[instrument(skip(state, request), fields(url = %request.url))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, GatewayError> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(GatewayError::InvalidRequest("url must not be empty".to_string()));
    }

    let source = state.comment_source.as_ref().ok_or_else(|| {
        GatewayError::SourceUnavailable("no comment source configured".to_string())
    })?;

    let platform = Platform::from_url(url);
    let comments = match source.fetch(url).await {
        Ok(comments) => comments,
        // An unsupported platform is an empty analysis, not an error; the
        // dashboard shows the message instead of failing the page.
        Err(SourceError::UnsupportedPlatform { .. }) => {
            return Ok(Json(AnalyzeResponse {
                total_comments: 0,
                flagged_comments: 0,
                results: Vec::new(),
                platform: platform.name(),
                eligible_comments: 0,
                message: Some("no comments found or platform not supported".to_string()),
            }));
        }
        Err(err) => return Err(err.into()),
    };

    let threshold = request.threshold.unwrap_or(DEFAULT_THRESHOLD);
    debug!(comments = comments.len(), threshold, "Analyzing fetched comments");

    let results = state.detector.detect(&comments, threshold).await?;
    let eligible_comments = state.detector.eligible_count(&comments);

    info!(
        total = comments.len(),
        flagged = results.len(),
        platform = platform.name(),
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        total_comments: comments.len(),
        flagged_comments: results.len(),
        results,
        platform: platform.name(),
        eligible_comments,
        message: None,
    }))
}

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    /// Arbitrary JSON values: non-string entries coerce to the empty string
    /// and are dropped by eligibility filtering.
    pub comments: Vec<serde_json::Value>,
    pub threshold: Option<f32>,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub total_comments: usize,
    pub flagged_comments: usize,
    pub results: Vec<DetectionResult>,
}

/// Runs detection over a caller-supplied comment batch.
#[instrument(skip(state, request))]
pub async fn detect_handler(
    State(state): State<AppState>,
    Json(request): Json<DetectRequest>,
) -> Result<Json<DetectResponse>, GatewayError> {
    let comments: Vec<String> = request
        .comments
        .iter()
        .map(|value| value.as_str().unwrap_or("").to_string())
        .collect();

    let threshold = request.threshold.unwrap_or(DEFAULT_THRESHOLD);
    let results = state.detector.detect(&comments, threshold).await?;

    Ok(Json(DetectResponse {
        total_comments: comments.len(),
        flagged_comments: results.len(),
        results,
    }))
}
