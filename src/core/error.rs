//! Error types for the bridge

use thiserror::Error;

/// Main error type for the bridge
#[derive(Debug, Error)]
pub enum Error {
    #[error("host error: {0}")]
    Host(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
