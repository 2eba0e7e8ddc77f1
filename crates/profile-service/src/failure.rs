//! Closed failure family for profile fetches.

use crate::DocumentStoreError;
use thiserror::Error;

/// Failures surfaced by a profile fetch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileFailure {
    /// No document exists for the id
    #[error("Profile not found")]
    NotFound,

    /// Transport failure reaching the store
    #[error("Network error: {0}")]
    Network(String),

    /// Failure reported by the store
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else (e.g. a document that does not decode)
    #[error("Profile fetch failed: {0}")]
    Unknown(String),
}

impl From<DocumentStoreError> for ProfileFailure {
    fn from(err: DocumentStoreError) -> Self {
        match err {
            DocumentStoreError::Network(detail) => ProfileFailure::Network(detail),
            DocumentStoreError::Backend(detail) => ProfileFailure::Database(detail),
        }
    }
}
