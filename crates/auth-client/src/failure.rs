//! Closed failure families for the auth operations.
//!
//! Each operation has its own family; a provider error that fits no variant
//! of the operation's family always falls through to that family's `Unknown`,
//! carrying the rendered cause for logging. The variant kind is the contract
//! with the UI layer, the cause string is not.

use crate::ProviderError;
use thiserror::Error;

/// Failures surfaced by a sign-up attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignUpFailure {
    /// Email failed address validation
    #[error("Enter a valid email address")]
    InvalidEmail,

    /// Password rejected by the strength policy
    #[error("Password is too weak")]
    WeakPassword,

    /// An account is already registered for this email
    #[error("An account already exists for this email")]
    AccountAlreadyExists,

    /// Anything else
    #[error("Sign-up failed: {0}")]
    Unknown(String),
}

impl From<ProviderError> for SignUpFailure {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::InvalidEmail => SignUpFailure::InvalidEmail,
            ProviderError::WeakPassword => SignUpFailure::WeakPassword,
            ProviderError::AccountExists => SignUpFailure::AccountAlreadyExists,
            other => SignUpFailure::Unknown(other.to_string()),
        }
    }
}

/// Failures surfaced by a sign-in attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignInFailure {
    /// Email/password pair rejected
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Anything else
    #[error("Sign-in failed: {0}")]
    Unknown(String),
}

impl From<ProviderError> for SignInFailure {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::InvalidCredentials => SignInFailure::InvalidCredentials,
            other => SignInFailure::Unknown(other.to_string()),
        }
    }
}

/// Failures surfaced by a logout attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogoutFailure {
    /// The provider sign-out or the session clear did not apply
    #[error("Logout failed: {0}")]
    Unknown(String),
}

impl From<ProviderError> for LogoutFailure {
    fn from(err: ProviderError) -> Self {
        LogoutFailure::Unknown(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_family_passes_business_rules_through() {
        assert_eq!(
            SignUpFailure::from(ProviderError::InvalidEmail),
            SignUpFailure::InvalidEmail
        );
        assert_eq!(
            SignUpFailure::from(ProviderError::WeakPassword),
            SignUpFailure::WeakPassword
        );
        assert_eq!(
            SignUpFailure::from(ProviderError::AccountExists),
            SignUpFailure::AccountAlreadyExists
        );
    }

    #[test]
    fn sign_up_family_wraps_everything_else() {
        // Invalid credentials cannot happen on sign-up; it must not leak
        // through as anything but Unknown.
        assert!(matches!(
            SignUpFailure::from(ProviderError::InvalidCredentials),
            SignUpFailure::Unknown(_)
        ));
        assert!(matches!(
            SignUpFailure::from(ProviderError::Network("connection refused".into())),
            SignUpFailure::Unknown(_)
        ));
    }

    #[test]
    fn sign_in_family_only_knows_invalid_credentials() {
        assert_eq!(
            SignInFailure::from(ProviderError::InvalidCredentials),
            SignInFailure::InvalidCredentials
        );
        assert!(matches!(
            SignInFailure::from(ProviderError::WeakPassword),
            SignInFailure::Unknown(_)
        ));
        assert!(matches!(
            SignInFailure::from(ProviderError::Network("timeout".into())),
            SignInFailure::Unknown(_)
        ));
    }

    #[test]
    fn logout_family_is_always_unknown() {
        assert!(matches!(
            LogoutFailure::from(ProviderError::Unclassified("boom".into())),
            LogoutFailure::Unknown(_)
        ));
    }
}
