use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::detector::DetectError;
use crate::source::SourceError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("comment fetching failed: {0}")]
    SourceFailed(#[from] SourceError),

    #[error("detection failed: {0}")]
    DetectionFailed(#[from] DetectError),

    #[error("comment fetching is not configured: {0}")]
    SourceUnavailable(String),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::SourceFailed(SourceError::MissingApiKey)
            | GatewayError::SourceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::SourceFailed(SourceError::InvalidUrl { .. }) => StatusCode::BAD_REQUEST,
            GatewayError::SourceFailed(_) => StatusCode::BAD_GATEWAY,
            GatewayError::DetectionFailed(DetectError::OracleTimeout { .. }) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            GatewayError::DetectionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, body).into_response()
    }
}
