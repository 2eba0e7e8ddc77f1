//! Appointment status transitions for the Medibook apps.
//!
//! An appointment moves `scheduled -> rescheduled -> completed`, where a
//! rescheduled appointment may be rescheduled again and `completed` is
//! terminal. This crate provides:
//! - The appointment data model ([`AppointmentDetails`], [`DoctorRef`])
//! - An explicit status state machine
//! - [`EditWorkspace`], the staged-edit state accumulated before a transition
//!   commits, with its event reducer
//! - [`AppointmentEngine`], which validates and applies the transitions

mod engine;
mod fsm;
pub mod types;
mod workspace;

pub use engine::AppointmentEngine;
pub use fsm::{StatusMachine, StatusMachineInput, StatusMachineState};
pub use types::{
    AppointmentDetails, AppointmentId, AppointmentStatus, DoctorId, DoctorRef, PatientId,
};
pub use workspace::{EditEvent, EditWorkspace};

use chrono::NaiveDate;

/// Errors that can occur when transitioning an appointment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentFailure {
    /// The appointment is terminal; no further transition is legal.
    #[error("Appointment {0} is already completed")]
    AlreadyCompleted(AppointmentId),

    /// The chosen date falls outside the doctor's availability window.
    #[error("Date {date} is outside the doctor's availability window {available_from} to {available_to}")]
    OutsideAvailability {
        date: NaiveDate,
        available_from: NaiveDate,
        available_to: NaiveDate,
    },

    /// A reschedule was committed with no date staged.
    #[error("No new appointment date has been chosen")]
    MissingDate,

    /// A reschedule was committed with no time staged.
    #[error("No new appointment time has been chosen")]
    MissingTime,
}
