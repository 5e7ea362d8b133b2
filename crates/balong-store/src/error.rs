//! # Storage Error Types
//!
//! Failures of the durable layer. None of these propagate into the user
//! flow: a failed write is logged and the in-memory state stands; a failed
//! read degrades to the seeded defaults.

use std::path::PathBuf;

use thiserror::Error;

/// Durable storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The state blob could not be serialized.
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The state file could not be written (permissions, disk full, ...).
    #[error("failed to write state file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
