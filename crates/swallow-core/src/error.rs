//! Error types for Swallow.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Swallow error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Root directory missing or unreadable
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// Output destination unwritable
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Worker pool could not be started
    #[error("Worker pool error: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// Generic error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// A single file that could not be turned into a parsed unit.
///
/// Recoverable: the file contributes no records and the run carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {cause}", path_label(.path))]
pub struct ParseFailure {
    /// Path of the offending file, if it had one
    pub path: Option<PathBuf>,
    /// Human-readable cause
    pub cause: String,
}

impl ParseFailure {
    /// Create a failure for the given (optional) path.
    pub fn new(path: Option<&Path>, cause: impl Into<String>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            cause: cause.into(),
        }
    }
}

fn path_label(path: &Option<PathBuf>) -> String {
    path.as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| crate::model::UNKNOWN_PATH.to_string())
}
