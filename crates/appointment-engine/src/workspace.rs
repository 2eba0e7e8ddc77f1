//! Staged-edit state for an appointment screen.

use crate::types::{AppointmentDetails, AppointmentStatus};
use chrono::{NaiveDate, NaiveTime};

/// In-memory working state accumulated while the user edits an appointment,
/// before a transition is committed.
///
/// Clearing events reset only this record; they never touch a persisted
/// appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditWorkspace {
    /// Remark staged for the next completion
    pub health_remark: Option<String>,
    /// Date staged for the next reschedule
    pub new_date: Option<NaiveDate>,
    /// Time staged for the next reschedule
    pub new_time: Option<NaiveTime>,
    /// Status produced by the last committed transition
    pub last_status_change: Option<AppointmentStatus>,
    /// Result of the last completion, until cleared
    pub completed: Option<AppointmentDetails>,
    /// Result of the last reschedule, until cleared
    pub rescheduled: Option<AppointmentDetails>,
}

/// Events that mutate the staged-edit state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditEvent {
    /// Stage a health remark for the next completion
    HealthRemarkChanged(String),
    /// Stage a date for the next reschedule
    AppointmentDateChanged(NaiveDate),
    /// Stage a time for the next reschedule
    AppointmentTimeChanged(NaiveTime),
    /// Forget the last status change and any staged edits
    StatusCleared,
    /// Forget the last completion result
    CompletedCleared,
    /// Forget the last reschedule result
    RescheduledCleared,
}

impl EditWorkspace {
    /// Apply an event, producing the next state.
    pub fn apply(mut self, event: EditEvent) -> Self {
        match event {
            EditEvent::HealthRemarkChanged(remark) => self.health_remark = Some(remark),
            EditEvent::AppointmentDateChanged(date) => self.new_date = Some(date),
            EditEvent::AppointmentTimeChanged(time) => self.new_time = Some(time),
            EditEvent::StatusCleared => {
                self.last_status_change = None;
                self.clear_staged();
            }
            EditEvent::CompletedCleared => self.completed = None,
            EditEvent::RescheduledCleared => self.rescheduled = None,
        }
        self
    }

    /// Drop the staged remark/date/time after a committed transition.
    pub(crate) fn clear_staged(&mut self) {
        self.health_remark = None;
        self.new_date = None;
        self.new_time = None;
    }
}
