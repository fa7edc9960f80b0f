//! Error type for indexed entity operations.

use crate::storage::StoreError;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntityError {
    #[error("{label} not found")]
    NotFound { label: &'static str, id: String },

    #[error("{0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StoreError),
}

impl EntityError {
    /// Create a not found error
    pub fn not_found(label: &'static str, id: impl Into<String>) -> Self {
        EntityError::NotFound {
            label,
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        EntityError::ValidationError(msg.into())
    }
}

impl From<ValidationError> for EntityError {
    fn from(err: ValidationError) -> Self {
        EntityError::ValidationError(err.to_string())
    }
}
