//! Error type for the persistence layer.

use thiserror::Error;

/// Failure of the underlying storage.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Storage task failed: {0}")]
    TaskError(String),
}
