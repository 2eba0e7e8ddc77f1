//! Session lifecycle orchestration for the Medibook apps.
//!
//! This crate is the single source of truth for "is there a valid remembered
//! session, and for whom". It provides:
//! - An explicit finite state machine for the session lifecycle
//! - [`SessionController`], which orchestrates the auth service and the
//!   session vault and decides the app's start destination

mod controller;
mod fsm;

pub use controller::{
    RememberWritePolicy, SessionController, SessionStateCallback, StartDestination,
};
pub use fsm::{
    SessionMachine, SessionMachineInput, SessionMachineState, SessionState,
    SessionStateChangedPayload,
};

use thiserror::Error;

/// Failure family for reading the persisted session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionReadFailure {
    /// The persisted session could not be read or decoded
    #[error("Session read failed: {0}")]
    Unknown(String),
}
