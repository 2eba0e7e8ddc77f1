//! Sign-in form state and reducer.

use crate::validators::{validate_email, validate_password};
use auth_client::SignInFailure;

/// State of the sign-in screen's form.
#[derive(Debug, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub loading: bool,
    pub remember_me: bool,
    pub succeeded: bool,
    /// One-shot failure for transient display; dismissed explicitly.
    pub failure: Option<SignInFailure>,
}

/// Events raised by the sign-in screen.
#[derive(Debug, Clone)]
pub enum SignInEvent {
    EmailChanged(String),
    PasswordChanged(String),
    RememberMeToggled(bool),
    /// Submit pressed; the controller call is in flight.
    Submitted,
    Succeeded,
    Failed(SignInFailure),
    /// The user dismissed the failure snackbar.
    FailureDismissed,
}

impl SignInForm {
    /// A freshly initialized, all-blank form. Never valid.
    pub fn reset() -> Self {
        Self::default()
    }

    /// Apply an event, producing the next form state.
    pub fn apply(mut self, event: SignInEvent) -> Self {
        match event {
            SignInEvent::EmailChanged(value) => {
                self.email_error = validate_email(&value);
                self.email = value;
            }
            SignInEvent::PasswordChanged(value) => {
                self.password_error = validate_password(&value);
                self.password = value;
            }
            SignInEvent::RememberMeToggled(value) => self.remember_me = value,
            SignInEvent::Submitted => {
                self.loading = true;
                self.failure = None;
            }
            SignInEvent::Succeeded => {
                self.loading = false;
                self.succeeded = true;
            }
            SignInEvent::Failed(failure) => {
                self.loading = false;
                self.failure = Some(failure);
            }
            SignInEvent::FailureDismissed => self.failure = None,
        }
        self
    }

    /// The form is valid iff both error fields are absent and both required
    /// fields are non-blank.
    pub fn is_valid(&self) -> bool {
        self.email_error.is_none()
            && self.password_error.is_none()
            && !self.email.trim().is_empty()
            && !self.password.trim().is_empty()
    }
}
