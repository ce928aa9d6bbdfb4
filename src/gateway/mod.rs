//! HTTP gateway (Axum) for the moderation dashboard.
//!
//! This module is primarily used by the `saring` server binary.

pub mod error;
pub mod handler;
pub mod state;

#[cfg(test)]
mod handler_tests;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::{ErrorResponse, GatewayError};
pub use handler::{analyze_handler, detect_handler};
pub use state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/readyz", get(ready_handler))
        .route("/analyze", post(analyze_handler))
        .route("/detect", post(detect_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub corpus_sentences: usize,
    pub lexicon_version: u32,
}

async fn ready_handler(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<ReadyResponse> {
    // Startup refuses to build a detector over an empty corpus, so a running
    // server is ready by construction; the corpus size is reported for
    // operators anyway.
    Json(ReadyResponse {
        ready: !state.detector.corpus().is_empty(),
        corpus_sentences: state.detector.corpus().len(),
        lexicon_version: state.lexicon_version,
    })
}
