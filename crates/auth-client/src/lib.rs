//! Identity-provider client for the Medibook apps.
//!
//! This crate provides:
//! - The [`IdentityProvider`] collaborator trait (sign-up, sign-in, sign-out)
//! - [`RestIdentityProvider`], the REST implementation of that trait
//! - The closed failure families for each auth operation
//! - [`AuthService`], which maps raw provider errors into those families

mod failure;
mod provider;
mod rest;
mod service;
mod types;

pub use failure::{LogoutFailure, SignInFailure, SignUpFailure};
pub use provider::{IdentityProvider, ProviderError};
pub use rest::RestIdentityProvider;
pub use service::AuthService;
pub use types::SubjectId;
