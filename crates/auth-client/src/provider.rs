//! Identity-provider collaborator contract.

use crate::SubjectId;
use thiserror::Error;

/// Categorized error raised by the identity provider.
///
/// Every error coming out of a provider implementation is classified into one
/// of these categories before it reaches the mapping layer; anything the
/// implementation cannot classify lands in [`ProviderError::Unclassified`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Email/password pair rejected
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password rejected by the provider's strength policy
    #[error("Password does not meet strength requirements")]
    WeakPassword,

    /// An account is already registered for the email
    #[error("Account already exists")]
    AccountExists,

    /// Email failed the provider's address validation
    #[error("Invalid email address")]
    InvalidEmail,

    /// Transport-level failure reaching the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Anything the provider reported that fits no category above
    #[error("Provider error: {0}")]
    Unclassified(String),
}

/// The remote identity provider, as seen by the core.
///
/// Implementations perform the remote round trip; callers must treat every
/// method as suspending. Errors are always classified ([`ProviderError`]),
/// never raw transport errors.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider: Send + Sync {
    /// Register a new account and return its subject id.
    async fn sign_up(&self, email: &str, password: &str) -> Result<SubjectId, ProviderError>;

    /// Authenticate an existing account and return its subject id.
    async fn sign_in(&self, email: &str, password: &str) -> Result<SubjectId, ProviderError>;

    /// End the provider-side session.
    async fn sign_out(&self) -> Result<(), ProviderError>;
}
