//! Sign-up form state and reducers for the patient and hospital apps.
//!
//! The two apps declare different field sets: the patient form carries
//! name/email/phone/password/confirm, the hospital form additionally carries
//! city and PIN code. Both share the same validity rule: every declared
//! error absent and every declared required field non-blank.

use crate::validators::{
    validate_confirm_password, validate_email, validate_password, validate_phone,
    validate_pin_code, validate_required,
};
use auth_client::SignUpFailure;

/// State of the patient app's sign-up form.
#[derive(Debug, Default)]
pub struct PatientSignUpForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub phone_error: Option<String>,
    pub password_error: Option<String>,
    pub confirm_password_error: Option<String>,
    pub loading: bool,
    pub remember_me: bool,
    pub succeeded: bool,
    /// One-shot failure for transient display; dismissed explicitly.
    pub failure: Option<SignUpFailure>,
}

/// Events raised by the patient sign-up screen.
#[derive(Debug, Clone)]
pub enum PatientSignUpEvent {
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    RememberMeToggled(bool),
    Submitted,
    Succeeded,
    Failed(SignUpFailure),
    FailureDismissed,
}

impl PatientSignUpForm {
    /// A freshly initialized, all-blank form. Never valid.
    pub fn reset() -> Self {
        Self::default()
    }

    /// Apply an event, producing the next form state.
    pub fn apply(mut self, event: PatientSignUpEvent) -> Self {
        match event {
            PatientSignUpEvent::NameChanged(value) => {
                self.name_error = validate_required("Name", &value);
                self.name = value;
            }
            PatientSignUpEvent::EmailChanged(value) => {
                self.email_error = validate_email(&value);
                self.email = value;
            }
            PatientSignUpEvent::PhoneChanged(value) => {
                self.phone_error = validate_phone(&value);
                self.phone = value;
            }
            PatientSignUpEvent::PasswordChanged(value) => {
                self.password_error = validate_password(&value);
                // Re-check the confirmation against the new password
                if !self.confirm_password.is_empty() {
                    self.confirm_password_error =
                        validate_confirm_password(&value, &self.confirm_password);
                }
                self.password = value;
            }
            PatientSignUpEvent::ConfirmPasswordChanged(value) => {
                self.confirm_password_error =
                    validate_confirm_password(&self.password, &value);
                self.confirm_password = value;
            }
            PatientSignUpEvent::RememberMeToggled(value) => self.remember_me = value,
            PatientSignUpEvent::Submitted => {
                self.loading = true;
                self.failure = None;
            }
            PatientSignUpEvent::Succeeded => {
                self.loading = false;
                self.succeeded = true;
            }
            PatientSignUpEvent::Failed(failure) => {
                self.loading = false;
                self.failure = Some(failure);
            }
            PatientSignUpEvent::FailureDismissed => self.failure = None,
        }
        self
    }

    /// Every declared error absent and every required field non-blank.
    pub fn is_valid(&self) -> bool {
        self.name_error.is_none()
            && self.email_error.is_none()
            && self.phone_error.is_none()
            && self.password_error.is_none()
            && self.confirm_password_error.is_none()
            && !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.password.trim().is_empty()
            && !self.confirm_password.trim().is_empty()
    }
}

/// State of the hospital app's sign-up form.
#[derive(Debug, Default)]
pub struct HospitalSignUpForm {
    pub name: String,
    pub city: String,
    pub pin_code: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub name_error: Option<String>,
    pub city_error: Option<String>,
    pub pin_code_error: Option<String>,
    pub email_error: Option<String>,
    pub phone_error: Option<String>,
    pub password_error: Option<String>,
    pub confirm_password_error: Option<String>,
    pub loading: bool,
    pub remember_me: bool,
    pub succeeded: bool,
    /// One-shot failure for transient display; dismissed explicitly.
    pub failure: Option<SignUpFailure>,
}

/// Events raised by the hospital sign-up screen.
#[derive(Debug, Clone)]
pub enum HospitalSignUpEvent {
    NameChanged(String),
    CityChanged(String),
    PinCodeChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    RememberMeToggled(bool),
    Submitted,
    Succeeded,
    Failed(SignUpFailure),
    FailureDismissed,
}

impl HospitalSignUpForm {
    /// A freshly initialized, all-blank form. Never valid.
    pub fn reset() -> Self {
        Self::default()
    }

    /// Apply an event, producing the next form state.
    pub fn apply(mut self, event: HospitalSignUpEvent) -> Self {
        match event {
            HospitalSignUpEvent::NameChanged(value) => {
                self.name_error = validate_required("Hospital name", &value);
                self.name = value;
            }
            HospitalSignUpEvent::CityChanged(value) => {
                self.city_error = validate_required("City", &value);
                self.city = value;
            }
            HospitalSignUpEvent::PinCodeChanged(value) => {
                self.pin_code_error = validate_pin_code(&value);
                self.pin_code = value;
            }
            HospitalSignUpEvent::EmailChanged(value) => {
                self.email_error = validate_email(&value);
                self.email = value;
            }
            HospitalSignUpEvent::PhoneChanged(value) => {
                self.phone_error = validate_phone(&value);
                self.phone = value;
            }
            HospitalSignUpEvent::PasswordChanged(value) => {
                self.password_error = validate_password(&value);
                if !self.confirm_password.is_empty() {
                    self.confirm_password_error =
                        validate_confirm_password(&value, &self.confirm_password);
                }
                self.password = value;
            }
            HospitalSignUpEvent::ConfirmPasswordChanged(value) => {
                self.confirm_password_error =
                    validate_confirm_password(&self.password, &value);
                self.confirm_password = value;
            }
            HospitalSignUpEvent::RememberMeToggled(value) => self.remember_me = value,
            HospitalSignUpEvent::Submitted => {
                self.loading = true;
                self.failure = None;
            }
            HospitalSignUpEvent::Succeeded => {
                self.loading = false;
                self.succeeded = true;
            }
            HospitalSignUpEvent::Failed(failure) => {
                self.loading = false;
                self.failure = Some(failure);
            }
            HospitalSignUpEvent::FailureDismissed => self.failure = None,
        }
        self
    }

    /// Every declared error absent and every required field non-blank.
    pub fn is_valid(&self) -> bool {
        self.name_error.is_none()
            && self.city_error.is_none()
            && self.pin_code_error.is_none()
            && self.email_error.is_none()
            && self.phone_error.is_none()
            && self.password_error.is_none()
            && self.confirm_password_error.is_none()
            && !self.name.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.pin_code.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.password.trim().is_empty()
            && !self.confirm_password.trim().is_empty()
    }
}
