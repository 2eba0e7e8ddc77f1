//! Document-store collaborator contract.

use thiserror::Error;

/// Categorized error raised by the document store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentStoreError {
    /// Transport-level failure reaching the store
    #[error("Network error: {0}")]
    Network(String),

    /// Failure reported by the store itself
    #[error("Document store error: {0}")]
    Backend(String),
}

/// The remote document store, as seen by the core.
///
/// A lookup distinguishes "the document is absent" (`Ok(None)`) from a failed
/// round trip (`Err`); callers rely on that distinction to report a missing
/// profile rather than a broken backend.
#[allow(async_fn_in_trait)]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document by id.
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<serde_json::Value>, DocumentStoreError>;
}
