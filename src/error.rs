//! Error types for packmerge
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packmerge operations
pub type MergeResult<T> = Result<T, MergeError>;

/// Main error type for packmerge operations
#[derive(Error, Debug)]
pub enum MergeError {
    /// The pack list file is missing - fatal, nothing can be merged
    #[error("pack list file not found: {path}")]
    PackListMissing { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (writing merged documents)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
