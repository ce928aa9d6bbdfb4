//! Saring HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use saring::config::Config;
use saring::corpus::{CorpusBuilder, CorpusSource, JsonCorpusSource};
use saring::detector::{AbuseDetector, DetectorConfig};
use saring::embedding::HttpEmbeddingOracle;
use saring::gateway::{create_router, AppState};
use saring::lexicon::Lexicon;
use saring::source::{CommentSource, YouTubeCommentSource};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        corpus = %config.corpus_path.display(),
        "Saring starting"
    );

    let lexicon = Arc::new(match &config.lexicon_path {
        Some(path) => Lexicon::from_file(path)?,
        None => Lexicon::builtin()?,
    });

    let oracle = Arc::new(HttpEmbeddingOracle::new(config.embedding_url.clone()));

    let labeled = JsonCorpusSource::new(config.corpus_path.clone()).load()?;
    // Fatal on an empty corpus: a detector that can never match must not
    // serve traffic.
    let corpus = CorpusBuilder::new(lexicon.clone())
        .build(labeled, oracle.as_ref())
        .await?;
    tracing::info!(sentences = corpus.len(), "Reference corpus ready");

    let detector = Arc::new(AbuseDetector::new(
        Arc::new(corpus),
        oracle,
        lexicon.clone(),
        DetectorConfig {
            similarity_floor: config.similarity_floor,
            oracle_timeout: Duration::from_secs(config.oracle_timeout_secs),
        },
    ));

    let comment_source: Option<Arc<dyn CommentSource>> = match &config.youtube_api_key {
        Some(key) => Some(Arc::new(YouTubeCommentSource::new(key.clone()))),
        None => {
            tracing::warn!(
                "No SARING_YOUTUBE_API_KEY configured, /analyze will return 503"
            );
            None
        }
    };

    let state = AppState::new(detector, comment_source, lexicon.version());
    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Saring shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
