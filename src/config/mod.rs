//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SARING_*` environment
//! variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::{DEFAULT_ORACLE_TIMEOUT_SECS, DEFAULT_SIMILARITY_FLOOR};

/// Default embedding-server endpoint used when `SARING_EMBEDDING_URL` is not
/// set.
pub const DEFAULT_EMBEDDING_URL: &str = "http://localhost:8081/embed";

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SARING_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Path to the labeled reference dataset (JSON).
    pub corpus_path: PathBuf,

    /// Optional heuristic-table file; builtin tables are used otherwise.
    pub lexicon_path: Option<PathBuf>,

    /// Embedding-server endpoint.
    pub embedding_url: String,

    /// YouTube Data API key. `/analyze` requires it; `/detect` does not.
    pub youtube_api_key: Option<String>,

    /// Timeout for a single oracle batch-encode call, in seconds.
    pub oracle_timeout_secs: u64,

    /// Lower bound on the effective similarity threshold.
    pub similarity_floor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            corpus_path: PathBuf::from("./data/corpus.sample.json"),
            lexicon_path: None,
            embedding_url: DEFAULT_EMBEDDING_URL.to_string(),
            youtube_api_key: None,
            oracle_timeout_secs: DEFAULT_ORACLE_TIMEOUT_SECS,
            similarity_floor: DEFAULT_SIMILARITY_FLOOR,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "SARING_PORT";
    const ENV_BIND_ADDR: &'static str = "SARING_BIND_ADDR";
    const ENV_CORPUS_PATH: &'static str = "SARING_CORPUS_PATH";
    const ENV_LEXICON_PATH: &'static str = "SARING_LEXICON_PATH";
    const ENV_EMBEDDING_URL: &'static str = "SARING_EMBEDDING_URL";
    const ENV_YOUTUBE_API_KEY: &'static str = "SARING_YOUTUBE_API_KEY";
    const ENV_ORACLE_TIMEOUT_SECS: &'static str = "SARING_ORACLE_TIMEOUT_SECS";
    const ENV_SIMILARITY_FLOOR: &'static str = "SARING_SIMILARITY_FLOOR";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let corpus_path = Self::parse_path_from_env(Self::ENV_CORPUS_PATH, defaults.corpus_path);
        let lexicon_path = Self::parse_optional_string_from_env(Self::ENV_LEXICON_PATH)
            .map(PathBuf::from);
        let embedding_url =
            Self::parse_string_from_env(Self::ENV_EMBEDDING_URL, defaults.embedding_url);
        let youtube_api_key = Self::parse_optional_string_from_env(Self::ENV_YOUTUBE_API_KEY);
        let oracle_timeout_secs =
            Self::parse_u64_from_env(Self::ENV_ORACLE_TIMEOUT_SECS, defaults.oracle_timeout_secs);
        let similarity_floor = Self::parse_floor_from_env(defaults.similarity_floor)?;

        Ok(Self {
            port,
            bind_addr,
            corpus_path,
            lexicon_path,
            embedding_url,
            youtube_api_key,
            oracle_timeout_secs,
            similarity_floor,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.corpus_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.corpus_path.clone(),
            });
        }
        if !self.corpus_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.corpus_path.clone(),
            });
        }

        if let Some(ref path) = self.lexicon_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        if !(0.0..=1.0).contains(&self.similarity_floor) {
            return Err(ConfigError::InvalidSimilarityFloor {
                value: self.similarity_floor,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_floor_from_env(default: f32) -> Result<f32, ConfigError> {
        match env::var(Self::ENV_SIMILARITY_FLOOR) {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::FloorParseError { value }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
