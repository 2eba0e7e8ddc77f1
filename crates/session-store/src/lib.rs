//! Remembered-session persistence for the Medibook apps.
//!
//! This crate owns the contract between the session controller and whatever
//! key-value mechanism a device uses to keep the "remember me" choice across
//! restarts:
//! - [`SessionStore`] is the backend trait (set/get/delete over string keys)
//! - [`SessionVault`] is the high-level API the rest of the core talks to
//! - [`MemoryStore`] and [`FileStore`] are the bundled backends

mod file;
mod keys;
mod memory;
mod traits;
mod vault;

pub use file::FileStore;
pub use keys::StoreKeys;
pub use memory::MemoryStore;
pub use traits::SessionStore;
pub use vault::{PersistedSession, SessionVault};

use thiserror::Error;

/// Error type for session-store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend-specific storage error
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Encoding/decoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for session-store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_delete() {
        let store = MemoryStore::new();

        store.set("test_key", "test_value").unwrap();
        assert_eq!(
            store.get("test_key").unwrap(),
            Some("test_value".to_string())
        );

        assert!(store.has("test_key").unwrap());
        assert!(!store.has("nonexistent").unwrap());

        assert!(store.delete("test_key").unwrap());
        assert!(!store.delete("test_key").unwrap());
        assert_eq!(store.get("test_key").unwrap(), None);
    }

    #[test]
    fn vault_round_trip() {
        let vault = SessionVault::new(Box::new(MemoryStore::new()));

        vault.remember("u1").unwrap();
        let session = vault.read().unwrap();
        assert!(session.remember_me);
        assert_eq!(session.subject_id.as_deref(), Some("u1"));
    }

    #[test]
    fn store_keys_are_unique() {
        let keys = [StoreKeys::REMEMBER_ME, StoreKeys::SUBJECT_ID];
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len(), "Storage keys must be unique");
    }
}
