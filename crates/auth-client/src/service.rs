//! Mapping layer between the identity provider and the failure families.

use crate::{
    IdentityProvider, LogoutFailure, SignInFailure, SignUpFailure, SubjectId,
};
use tracing::{debug, info, warn};

/// Wraps an [`IdentityProvider`] and turns its categorized errors into the
/// per-operation failure families.
///
/// Every call returns a success value or exactly one typed failure; no
/// provider error escapes unmapped.
pub struct AuthService<P> {
    provider: P,
}

impl<P: IdentityProvider> AuthService<P> {
    /// Create a new service over the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Register a new account.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SubjectId, SignUpFailure> {
        debug!(email = %email, "Attempting sign-up");
        match self.provider.sign_up(email, password).await {
            Ok(subject_id) => {
                info!(subject_id = %subject_id, "Sign-up successful");
                Ok(subject_id)
            }
            Err(e) => {
                warn!(error = %e, "Sign-up failed");
                Err(SignUpFailure::from(e))
            }
        }
    }

    /// Authenticate an existing account.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SubjectId, SignInFailure> {
        debug!(email = %email, "Attempting sign-in");
        match self.provider.sign_in(email, password).await {
            Ok(subject_id) => {
                info!(subject_id = %subject_id, "Sign-in successful");
                Ok(subject_id)
            }
            Err(e) => {
                warn!(error = %e, "Sign-in failed");
                Err(SignInFailure::from(e))
            }
        }
    }

    /// End the provider-side session.
    pub async fn sign_out(&self) -> Result<(), LogoutFailure> {
        match self.provider.sign_out().await {
            Ok(()) => {
                info!("Signed out");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Sign-out failed");
                Err(LogoutFailure::from(e))
            }
        }
    }
}
