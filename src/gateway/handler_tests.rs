use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::corpus::{CorpusBuilder, LabeledSentence};
use crate::detector::{AbuseDetector, DetectorConfig};
use crate::embedding::MockEmbeddingOracle;
use crate::lexicon::Lexicon;
use crate::source::MockCommentSource;

use super::*;

const REFERENCE: &str = "dasar kau memang keterlaluan sekali sikapnya";
const ABUSIVE: &str = "kamu memang keterlaluan sekali sikapmu itu";

async fn test_state(comments: Vec<String>) -> AppState {
    let lexicon = Arc::new(Lexicon::builtin().expect("builtin tables compile"));
    let oracle = Arc::new(MockEmbeddingOracle::new());
    oracle.assign(REFERENCE, vec![1.0, 0.0]);
    oracle.assign(ABUSIVE, vec![0.96, (1.0f32 - 0.96 * 0.96).sqrt()]);

    let corpus = CorpusBuilder::new(lexicon.clone())
        .build(vec![LabeledSentence::new(REFERENCE, true)], oracle.as_ref())
        .await
        .expect("corpus builds");

    let detector = Arc::new(AbuseDetector::new(
        Arc::new(corpus),
        oracle,
        lexicon.clone(),
        DetectorConfig::default(),
    ));

    AppState::new(
        detector,
        Some(Arc::new(MockCommentSource::new(comments))),
        lexicon.version(),
    )
}

async fn json_request(
    router: axum::Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

#[tokio::test]
async fn healthz_returns_ok() {
    let state = test_state(Vec::new()).await;
    let response = create_router(state)
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn readyz_reports_corpus_size() {
    let state = test_state(Vec::new()).await;
    let (status, body) = json_request(
        create_router(state),
        "GET",
        "/readyz",
        serde_json::Value::Null,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["corpus_sentences"], 1);
}

#[tokio::test]
async fn detect_flags_abusive_comment() {
    let state = test_state(Vec::new()).await;
    let (status, body) = json_request(
        create_router(state),
        "POST",
        "/detect",
        serde_json::json!({
            "comments": [ABUSIVE, "mantap", "Terima kasih sudah berbagi informasi"],
            "threshold": 0.85,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_comments"], 3);
    assert_eq!(body["flagged_comments"], 1);
    assert_eq!(body["results"][0]["comment"], ABUSIVE);
    assert_eq!(body["results"][0]["matched_pattern"], REFERENCE);
    assert_eq!(body["results"][0]["severity"], "VeryHigh");
}

#[tokio::test]
async fn detect_coerces_non_string_entries() {
    let state = test_state(Vec::new()).await;
    let (status, body) = json_request(
        create_router(state),
        "POST",
        "/detect",
        serde_json::json!({ "comments": [42, null, {"a": 1}, ABUSIVE] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_comments"], 4);
    assert_eq!(body["flagged_comments"], 1);
}

#[tokio::test]
async fn analyze_runs_detection_over_fetched_comments() {
    let state = test_state(vec![
        ABUSIVE.to_string(),
        "mantap".to_string(),
        "ya".to_string(),
    ])
    .await;
    let (status, body) = json_request(
        create_router(state),
        "POST",
        "/analyze",
        serde_json::json!({ "url": "https://youtu.be/abc123", "threshold": 0.85 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_comments"], 3);
    assert_eq!(body["flagged_comments"], 1);
    assert_eq!(body["eligible_comments"], 1);
    assert_eq!(body["platform"], "YouTube");
}

#[tokio::test]
async fn analyze_rejects_empty_url() {
    let state = test_state(Vec::new()).await;
    let (status, body) = json_request(
        create_router(state),
        "POST",
        "/analyze",
        serde_json::json!({ "url": "  " }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn analyze_maps_unsupported_platform_to_empty_result() {
    let lexicon = Arc::new(Lexicon::builtin().expect("builtin tables compile"));
    let oracle = Arc::new(MockEmbeddingOracle::new());
    oracle.assign(REFERENCE, vec![1.0, 0.0]);
    let corpus = CorpusBuilder::new(lexicon.clone())
        .build(vec![LabeledSentence::new(REFERENCE, true)], oracle.as_ref())
        .await
        .expect("corpus builds");
    let detector = Arc::new(AbuseDetector::new(
        Arc::new(corpus),
        oracle,
        lexicon.clone(),
        DetectorConfig::default(),
    ));
    let state = AppState::new(
        detector,
        Some(Arc::new(MockCommentSource::failing())),
        lexicon.version(),
    );

    let (status, body) = json_request(
        create_router(state),
        "POST",
        "/analyze",
        serde_json::json!({ "url": "https://example.com/post/1" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_comments"], 0);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn analyze_without_source_is_unavailable() {
    let state = test_state(Vec::new()).await;
    let state = AppState::new(state.detector, None, state.lexicon_version);

    let (status, _) = json_request(
        create_router(state),
        "POST",
        "/analyze",
        serde_json::json!({ "url": "https://youtu.be/abc" }),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
