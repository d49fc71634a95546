//! Error types for matchscope.
//!
//! The matchers never fail: an empty pattern or a pattern longer than the
//! text resolves to an empty outcome. Everything here belongs to the layer
//! around them, loading configuration and reading or writing requests.
use std::path::PathBuf;
use thiserror::Error;

/// Result type for matchscope operations
pub type MatchResult<T> = Result<T, MatchError>;

/// Errors raised outside the matching algorithms
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid hash parameters: {0}")]
    InvalidHashParams(String),
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Invalid request on line {line}: {source}")]
    InvalidRequest {
        line: usize,
        source: serde_json::Error,
    },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl MatchError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn invalid_hash_params(msg: impl Into<String>) -> Self {
        Self::InvalidHashParams(msg.into())
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn invalid_request(line: usize, source: serde_json::Error) -> Self {
        Self::InvalidRequest { line, source }
    }
}

impl From<config::ConfigError> for MatchError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}
