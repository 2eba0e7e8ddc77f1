//! High-level API for the remembered-session record.

use crate::{SessionStore, StoreError, StoreKeys, StoreResult};
use serde::{Deserialize, Serialize};

/// The session record as persisted on a device.
///
/// `subject_id` is only meaningful while `remember_me` is true; a cleared
/// vault reads back as `remember_me = false` with no subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    /// Whether the session should survive an app restart
    pub remember_me: bool,
    /// Identifier of the remembered user or hospital
    #[serde(default)]
    pub subject_id: Option<String>,
}

impl PersistedSession {
    /// The record written on logout: nothing remembered.
    pub fn signed_out() -> Self {
        Self {
            remember_me: false,
            subject_id: None,
        }
    }
}

/// High-level API for reading and writing the remembered session.
///
/// The vault stores the flag and the subject under separate keys so the flag
/// can be rewritten without disturbing an existing subject id. Within one
/// vault instance writes are applied in the order the calls are made.
pub struct SessionVault {
    store: Box<dyn SessionStore>,
}

impl SessionVault {
    /// Create a new vault over the given storage backend
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Read the persisted session.
    ///
    /// Missing keys read back as "nothing remembered". A flag value that is
    /// neither `"true"` nor `"false"` is an [`StoreError::Encoding`] error.
    pub fn read(&self) -> StoreResult<PersistedSession> {
        let remember_me = match self.store.get(StoreKeys::REMEMBER_ME)? {
            Some(raw) => parse_flag(&raw)?,
            None => false,
        };
        let subject_id = self.store.get(StoreKeys::SUBJECT_ID)?;

        Ok(PersistedSession {
            remember_me,
            subject_id,
        })
    }

    /// Persist a remembered session for the given subject.
    pub fn remember(&self, subject_id: &str) -> StoreResult<()> {
        self.store.set(StoreKeys::REMEMBER_ME, "true")?;
        self.store.set(StoreKeys::SUBJECT_ID, subject_id)?;
        tracing::debug!(subject_id = %subject_id, "Remembered session persisted");
        Ok(())
    }

    /// Rewrite only the remember-me flag, leaving any stored subject intact.
    pub fn set_remember_me(&self, remember_me: bool) -> StoreResult<()> {
        let raw = if remember_me { "true" } else { "false" };
        self.store.set(StoreKeys::REMEMBER_ME, raw)
    }

    /// Clear the remembered session (flag off, subject removed).
    pub fn clear(&self) -> StoreResult<()> {
        self.store.set(StoreKeys::REMEMBER_ME, "false")?;
        self.store.delete(StoreKeys::SUBJECT_ID)?;
        tracing::debug!("Remembered session cleared");
        Ok(())
    }

    /// Check whether a remembered session exists.
    pub fn has_remembered_session(&self) -> StoreResult<bool> {
        Ok(self.read()?.remember_me)
    }
}

fn parse_flag(raw: &str) -> StoreResult<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(StoreError::Encoding(format!(
            "invalid remember-me flag: {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn create_test_vault() -> SessionVault {
        SessionVault::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn empty_vault_reads_as_not_remembered() {
        let vault = create_test_vault();
        let session = vault.read().unwrap();
        assert!(!session.remember_me);
        assert!(session.subject_id.is_none());
    }

    #[test]
    fn remember_then_read() {
        let vault = create_test_vault();
        vault.remember("user-123").unwrap();

        let session = vault.read().unwrap();
        assert!(session.remember_me);
        assert_eq!(session.subject_id.as_deref(), Some("user-123"));
        assert!(vault.has_remembered_session().unwrap());
    }

    #[test]
    fn flag_update_leaves_subject_intact() {
        let vault = create_test_vault();
        vault.remember("user-123").unwrap();

        vault.set_remember_me(false).unwrap();
        let session = vault.read().unwrap();
        assert!(!session.remember_me);
        // Partial update: only the flag was rewritten
        assert_eq!(session.subject_id.as_deref(), Some("user-123"));

        vault.set_remember_me(true).unwrap();
        let session = vault.read().unwrap();
        assert!(session.remember_me);
        assert_eq!(session.subject_id.as_deref(), Some("user-123"));
    }

    #[test]
    fn clear_removes_flag_and_subject() {
        let vault = create_test_vault();
        vault.remember("user-123").unwrap();

        vault.clear().unwrap();
        let session = vault.read().unwrap();
        assert_eq!(session, PersistedSession::signed_out());
        assert!(!vault.has_remembered_session().unwrap());
    }

    #[test]
    fn undecodable_flag_is_an_encoding_error() {
        let store = MemoryStore::new();
        store.set(StoreKeys::REMEMBER_ME, "maybe").unwrap();
        let vault = SessionVault::new(Box::new(store));

        match vault.read() {
            Err(StoreError::Encoding(_)) => {}
            other => panic!("expected encoding error, got {other:?}"),
        }
    }
}
