//! Profile retrieval for the Medibook apps.
//!
//! This crate provides:
//! - The [`DocumentStore`] collaborator trait over the remote document store
//! - [`RestDocumentStore`], the REST implementation of that trait
//! - The patient [`Profile`] and hospital [`ClientProfile`] records
//! - [`ProfileService`], which maps store errors into the profile-fetch
//!   failure family

mod failure;
mod rest;
mod service;
mod store;
mod types;

pub use failure::ProfileFailure;
pub use rest::RestDocumentStore;
pub use service::ProfileService;
pub use store::{DocumentStore, DocumentStoreError};
pub use types::{collections, ClientProfile, Profile};
