//! Session state machine using rust-fsm.
//!
//! This module defines an explicit finite state machine for the session
//! lifecycle, replacing implicit state derivation from storage checks.
//!
//! ## State Diagram
//!
//! ```text
//! ┌─────────────────┐
//! │     Unknown     │ (initial, before the startup read)
//! └────────┬────────┘
//!          │ RememberedSession / NoRememberedSession
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │    Remembered   │     │  NotRemembered  │
//! └────────┬────────┘     └────────┬────────┘
//!          │ SignInAttempt /       │ SignInAttempt
//!          │ SignOutRequested      ▼
//!          │              ┌─────────────────┐
//!          │              │ Authenticating  │
//!          │              └────────┬────────┘
//!          │                       │ AuthSucceeded / AuthFailed
//!          │                       ▼
//!          │              ┌─────────────────┐
//!          └────────────► │  Authenticated  │
//!                         └────────┬────────┘
//!                                  │ SignOutRequested
//!                                  ▼
//!                         ┌─────────────────┐
//!                         │   LoggingOut    │
//!                         └────────┬────────┘
//!                                  │ SignOutSucceeded / SignOutFailed
//!                                  ▼
//!                         LoggedOut / Authenticated
//! ```

use rust_fsm::*;
use serde::{Deserialize, Serialize};

// Define the FSM using rust-fsm's declarative macro
// This generates a module `session_machine` with:
// - session_machine::State (enum)
// - session_machine::Input (enum)
// - session_machine::StateMachine (type alias)
// - session_machine::Impl (trait impl)
state_machine! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub session_machine(Unknown)

    Unknown => {
        RememberedSession => Remembered,
        NoRememberedSession => NotRemembered
    },
    Remembered => {
        // A remembered subject can re-authenticate or log out from home
        SignInAttempt => Authenticating,
        SignOutRequested => LoggingOut
    },
    NotRemembered => {
        SignInAttempt => Authenticating
    },
    Authenticating => {
        AuthSucceeded => Authenticated,
        AuthFailed => NotRemembered
    },
    Authenticated => {
        SignOutRequested => LoggingOut
    },
    LoggingOut => {
        SignOutSucceeded => LoggedOut,
        // A failed sign-out leaves the live session in place
        SignOutFailed => Authenticated
    },
    LoggedOut => {
        SignInAttempt => Authenticating
    }
}

// Re-export the generated types with clearer names
pub use session_machine::Input as SessionMachineInput;
pub use session_machine::State as SessionMachineState;
pub use session_machine::StateMachine as SessionMachine;

/// User-friendly session state for external consumption.
///
/// This is a simplified view of the FSM state for UI purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Startup read has not happened yet.
    Unknown,
    /// A remembered session exists from a previous run.
    Remembered,
    /// No remembered session; sign-in required.
    NotRemembered,
    /// Currently signing in or signing up.
    Authenticating,
    /// Signed in during this run.
    Authenticated,
    /// Currently logging out.
    LoggingOut,
    /// Logged out during this run.
    LoggedOut,
}

impl SessionState {
    /// Returns true if the user signed in during this run.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated)
    }

    /// Returns true if there is a usable session, remembered or fresh.
    pub fn has_session(&self) -> bool {
        matches!(self, SessionState::Remembered | SessionState::Authenticated)
    }

    /// Returns true if the state is a transient/in-progress state.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SessionState::Unknown | SessionState::Authenticating | SessionState::LoggingOut
        )
    }
}

impl From<&SessionMachineState> for SessionState {
    fn from(state: &SessionMachineState) -> Self {
        match state {
            SessionMachineState::Unknown => SessionState::Unknown,
            SessionMachineState::Remembered => SessionState::Remembered,
            SessionMachineState::NotRemembered => SessionState::NotRemembered,
            SessionMachineState::Authenticating => SessionState::Authenticating,
            SessionMachineState::Authenticated => SessionState::Authenticated,
            SessionMachineState::LoggingOut => SessionState::LoggingOut,
            SessionMachineState::LoggedOut => SessionState::LoggedOut,
        }
    }
}

/// Payload for session state change events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStateChangedPayload {
    /// Current session state.
    pub state: SessionState,
    /// Remembered or freshly authenticated subject, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
}
