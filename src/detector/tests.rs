use super::*;

use crate::corpus::{CorpusBuilder, LabeledSentence};
use crate::embedding::MockEmbeddingOracle;

const REFERENCE: &str = "kalimat referensi netral untuk pengujian unit";

async fn detector_with(oracle: Arc<MockEmbeddingOracle>, floor: f32) -> AbuseDetector {
    let lexicon = Arc::new(crate::lexicon::Lexicon::builtin().expect("builtin tables compile"));
    oracle.assign(REFERENCE, vec![1.0, 0.0]);

    let corpus = CorpusBuilder::new(lexicon.clone())
        .build(vec![LabeledSentence::new(REFERENCE, true)], oracle.as_ref())
        .await
        .expect("corpus builds");

    AbuseDetector::new(
        Arc::new(corpus),
        oracle,
        lexicon,
        DetectorConfig {
            similarity_floor: floor,
            ..DetectorConfig::default()
        },
    )
}

fn comment_vector(similarity: f32) -> Vec<f32> {
    vec![similarity, (1.0 - similarity * similarity).sqrt()]
}

#[tokio::test]
async fn empty_batch_returns_empty_without_oracle_call() {
    let oracle = Arc::new(MockEmbeddingOracle::new());
    let detector = detector_with(oracle.clone(), 0.88).await;
    let calls_after_startup = oracle.encode_calls();

    let results = detector.detect(&[], 0.85).await.expect("detect");
    assert!(results.is_empty());
    assert_eq!(oracle.encode_calls(), calls_after_startup);
}

#[tokio::test]
async fn all_ineligible_batch_skips_oracle() {
    let oracle = Arc::new(MockEmbeddingOracle::new());
    let detector = detector_with(oracle.clone(), 0.88).await;
    let calls_after_startup = oracle.encode_calls();

    let batch = vec!["ya".to_string(), "mantap".to_string(), "123".to_string()];
    let results = detector.detect(&batch, 0.85).await.expect("detect");
    assert!(results.is_empty());
    assert_eq!(oracle.encode_calls(), calls_after_startup);
}

#[tokio::test]
async fn threshold_clamps_up_to_floor() {
    let oracle = Arc::new(MockEmbeddingOracle::new());
    oracle.assign(
        "kamu memang sangat menyebalkan sekali kawan",
        comment_vector(0.86),
    );
    let detector = detector_with(oracle, 0.88).await;

    // 0.86 similarity with a requested threshold of 0.5: floor still wins.
    let batch = vec!["kamu memang sangat menyebalkan sekali kawan".to_string()];
    let results = detector.detect(&batch, 0.5).await.expect("detect");
    assert!(results.is_empty());
}

#[tokio::test]
async fn oracle_failure_is_batch_fatal() {
    let lexicon = Arc::new(crate::lexicon::Lexicon::builtin().expect("builtin tables compile"));
    let corpus = CorpusBuilder::new(lexicon.clone())
        .build(
            vec![LabeledSentence::new(REFERENCE, true)],
            &MockEmbeddingOracle::new(),
        )
        .await
        .expect("corpus builds");

    let detector = AbuseDetector::new(
        Arc::new(corpus),
        Arc::new(MockEmbeddingOracle::failing()),
        lexicon,
        DetectorConfig::default(),
    );

    let batch = vec!["kamu memang sangat menyebalkan sekali kawan".to_string()];
    let err = detector.detect(&batch, 0.85).await.expect_err("must fail");
    assert!(matches!(err, DetectError::Oracle(_)));
}

#[tokio::test]
async fn oracle_timeout_is_batch_fatal() {
    let slow: Arc<MockEmbeddingOracle> = Arc::new(MockEmbeddingOracle::with_delay(
        Duration::from_millis(200),
    ));
    let lexicon = Arc::new(crate::lexicon::Lexicon::builtin().expect("builtin tables compile"));
    slow.assign(REFERENCE, vec![1.0, 0.0]);

    let corpus = CorpusBuilder::new(lexicon.clone())
        .build(
            vec![LabeledSentence::new(REFERENCE, true)],
            &MockEmbeddingOracle::new(),
        )
        .await
        .expect("corpus builds");

    let detector = AbuseDetector::new(
        Arc::new(corpus),
        slow,
        lexicon,
        DetectorConfig {
            oracle_timeout: Duration::from_millis(10),
            ..DetectorConfig::default()
        },
    );

    let batch = vec!["kamu memang sangat menyebalkan sekali kawan".to_string()];
    let err = detector.detect(&batch, 0.85).await.expect_err("must fail");
    assert!(matches!(err, DetectError::OracleTimeout { .. }));
}

#[tokio::test]
async fn pre_cancelled_batch_is_rejected() {
    let oracle = Arc::new(MockEmbeddingOracle::new());
    oracle.assign(
        "kamu memang sangat menyebalkan sekali kawan",
        comment_vector(0.95),
    );
    let detector = detector_with(oracle, 0.88).await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let batch = vec!["kamu memang sangat menyebalkan sekali kawan".to_string()];
    let err = detector
        .detect_with_cancel(&batch, 0.85, &cancel)
        .await
        .expect_err("must fail");
    assert!(matches!(err, DetectError::Cancelled));
}

#[tokio::test]
async fn eligible_count_reports_comparable_comments() {
    let oracle = Arc::new(MockEmbeddingOracle::new());
    let detector = detector_with(oracle, 0.88).await;

    let batch = vec![
        "Dasar bangsat tolol goblok anjing".to_string(),
        "mantap".to_string(),
        "Terima kasih sudah berbagi informasi".to_string(),
    ];
    assert_eq!(detector.eligible_count(&batch), 1);
}
