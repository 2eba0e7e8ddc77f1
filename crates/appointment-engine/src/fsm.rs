//! Appointment status state machine using rust-fsm.
//!
//! ## State Diagram
//!
//! ```text
//! ┌─────────────────┐  Reschedule   ┌─────────────────┐ ◄──┐
//! │    Scheduled    │ ────────────► │   Rescheduled   │    │ Reschedule
//! └────────┬────────┘               └───────┬─────────┘ ───┘
//!          │ Complete                       │ Complete
//!          ▼                                ▼
//! ┌─────────────────────────────────────────────────┐
//! │                 Completed (terminal)            │
//! └─────────────────────────────────────────────────┘
//! ```

use crate::types::AppointmentStatus;
use rust_fsm::*;

// Define the FSM using rust-fsm's declarative macro
// This generates a module `status_machine` with:
// - status_machine::State (enum)
// - status_machine::Input (enum)
// - status_machine::StateMachine (type alias)
state_machine! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub status_machine(Scheduled)

    Scheduled => {
        Reschedule => Rescheduled,
        Complete => Completed
    },
    Rescheduled => {
        Reschedule => Rescheduled,
        Complete => Completed
    }
}

// Re-export the generated types with clearer names
pub use status_machine::Input as StatusMachineInput;
pub use status_machine::State as StatusMachineState;
pub use status_machine::StateMachine as StatusMachine;

impl From<AppointmentStatus> for StatusMachineState {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Scheduled => StatusMachineState::Scheduled,
            AppointmentStatus::Rescheduled => StatusMachineState::Rescheduled,
            AppointmentStatus::Completed => StatusMachineState::Completed,
        }
    }
}

impl From<&StatusMachineState> for AppointmentStatus {
    fn from(state: &StatusMachineState) -> Self {
        match state {
            StatusMachineState::Scheduled => AppointmentStatus::Scheduled,
            StatusMachineState::Rescheduled => AppointmentStatus::Rescheduled,
            StatusMachineState::Completed => AppointmentStatus::Completed,
        }
    }
}

/// Build a machine positioned at the given persisted status.
pub fn machine_at(status: AppointmentStatus) -> StatusMachine {
    StatusMachine::from_state(status.into())
}
