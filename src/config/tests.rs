use super::*;

use serial_test::serial;

fn clear_env() {
    for var in [
        "SARING_PORT",
        "SARING_BIND_ADDR",
        "SARING_CORPUS_PATH",
        "SARING_LEXICON_PATH",
        "SARING_EMBEDDING_URL",
        "SARING_YOUTUBE_API_KEY",
        "SARING_ORACLE_TIMEOUT_SECS",
        "SARING_SIMILARITY_FLOOR",
    ] {
        // SAFETY: tests in this module are serialized via #[serial].
        unsafe { env::remove_var(var) };
    }
}

#[test]
#[serial]
fn defaults_when_no_env_set() {
    clear_env();
    let config = Config::from_env().expect("defaults load");

    assert_eq!(config.port, 8080);
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1");
    assert_eq!(config.embedding_url, DEFAULT_EMBEDDING_URL);
    assert!(config.youtube_api_key.is_none());
    assert_eq!(config.oracle_timeout_secs, 30);
    assert_eq!(config.similarity_floor, 0.88);
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");
}

#[test]
#[serial]
fn env_overrides_apply() {
    clear_env();
    // SAFETY: serialized via #[serial].
    unsafe {
        env::set_var("SARING_PORT", "9999");
        env::set_var("SARING_EMBEDDING_URL", "http://embedder:80/embed");
        env::set_var("SARING_YOUTUBE_API_KEY", "key-123");
        env::set_var("SARING_SIMILARITY_FLOOR", "0.91");
    }

    let config = Config::from_env().expect("config loads");
    assert_eq!(config.port, 9999);
    assert_eq!(config.embedding_url, "http://embedder:80/embed");
    assert_eq!(config.youtube_api_key.as_deref(), Some("key-123"));
    assert_eq!(config.similarity_floor, 0.91);

    clear_env();
}

#[test]
#[serial]
fn invalid_port_is_rejected() {
    clear_env();
    // SAFETY: serialized via #[serial].
    unsafe { env::set_var("SARING_PORT", "0") };
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::InvalidPort { .. })
    ));

    unsafe { env::set_var("SARING_PORT", "not-a-port") };
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::PortParseError { .. })
    ));
    clear_env();
}

#[test]
#[serial]
fn blank_optional_vars_are_ignored() {
    clear_env();
    // SAFETY: serialized via #[serial].
    unsafe { env::set_var("SARING_YOUTUBE_API_KEY", "  ") };
    let config = Config::from_env().expect("config loads");
    assert!(config.youtube_api_key.is_none());
    clear_env();
}

#[test]
fn validate_rejects_missing_corpus_file() {
    let config = Config {
        corpus_path: PathBuf::from("/nonexistent/corpus.json"),
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn validate_rejects_out_of_range_floor() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    let config = Config {
        corpus_path: file.path().to_path_buf(),
        similarity_floor: 1.5,
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidSimilarityFloor { .. })
    ));
}
