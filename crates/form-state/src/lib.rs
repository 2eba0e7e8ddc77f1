//! Form state for the Medibook sign-in and sign-up screens.
//!
//! Each form is a plain record plus an explicit event reducer; the UI binds
//! to the record and feeds user actions through [`SignInForm::apply`] and
//! friends. Validators are pure and total; validity never depends on
//! anything outside the record.

mod sign_in;
mod sign_up;
pub mod validators;

pub use sign_in::{SignInEvent, SignInForm};
pub use sign_up::{
    HospitalSignUpEvent, HospitalSignUpForm, PatientSignUpEvent, PatientSignUpForm,
};
