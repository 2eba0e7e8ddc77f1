//! Storage key constants.

/// Storage keys used by the session vault
pub struct StoreKeys;

impl StoreKeys {
    /// Remember-me flag ("true"/"false")
    pub const REMEMBER_ME: &'static str = "remember_me";

    /// Remembered subject (user or hospital) identifier
    pub const SUBJECT_ID: &'static str = "subject_id";
}
