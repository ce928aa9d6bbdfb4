use super::*;

#[test]
fn cosine_identical_vectors() {
    let v = vec![1.0, 2.0, 3.0];
    let similarity = cosine_similarity(&v, &v);
    assert!(
        (similarity - 1.0).abs() < 0.001,
        "Identical vectors should have similarity ~1.0"
    );
}

#[test]
fn cosine_orthogonal_vectors() {
    let similarity = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
    assert!(
        similarity.abs() < 0.001,
        "Orthogonal vectors should have similarity ~0.0"
    );
}

#[test]
fn cosine_opposite_vectors() {
    let similarity = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]);
    assert!(
        (similarity + 1.0).abs() < 0.001,
        "Opposite vectors should have similarity ~-1.0"
    );
}

#[test]
fn cosine_scaled_vectors() {
    let similarity = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
    assert!(
        (similarity - 1.0).abs() < 0.001,
        "Scaled vectors should have similarity ~1.0"
    );
}

#[test]
fn cosine_mismatched_lengths_and_empty() {
    assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]), 0.0);
    assert_eq!(cosine_similarity(&[], &[]), 0.0);
}

#[test]
fn cosine_zero_vector() {
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
}

#[tokio::test]
async fn mock_returns_one_vector_per_text_in_order() {
    let oracle = mock::MockEmbeddingOracle::new();
    oracle.assign("a", vec![1.0, 0.0]);
    oracle.assign("b", vec![0.0, 1.0]);

    let texts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let vectors = oracle.encode(&texts).await.expect("mock encode");

    assert_eq!(vectors.len(), 3);
    assert_eq!(vectors[0], vec![1.0, 0.0]);
    assert_eq!(vectors[1], vec![0.0, 1.0]);
    assert_eq!(vectors[2].len(), mock::MOCK_EMBEDDING_DIM);
}

#[tokio::test]
async fn mock_fallback_is_deterministic_and_unit_norm() {
    let oracle = mock::MockEmbeddingOracle::new();
    let texts = vec!["sebuah kalimat".to_string()];

    let first = oracle.encode(&texts).await.expect("encode");
    let second = oracle.encode(&texts).await.expect("encode");
    assert_eq!(first, second);

    let norm: f32 = first[0].iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() < 0.001);
    assert_eq!(oracle.encode_calls(), 2);
}

#[tokio::test]
async fn mock_failure_injection() {
    let oracle = mock::MockEmbeddingOracle::failing();
    let err = oracle
        .encode(&["x".to_string()])
        .await
        .expect_err("must fail");
    assert!(matches!(err, EmbeddingError::RequestFailed { .. }));
}
