//! Validates and applies appointment status transitions.

use crate::fsm::{machine_at, StatusMachineInput};
use crate::types::{AppointmentDetails, AppointmentStatus, DoctorRef, PatientId};
use crate::workspace::{EditEvent, EditWorkspace};
use crate::AppointmentFailure;
use chrono::{NaiveDate, NaiveTime};
use tracing::{info, warn};

/// Applies status transitions to appointments.
///
/// The engine owns an appointment only for the duration of an in-flight
/// transition: inputs are taken by reference and an updated record is
/// returned for the caller to persist. One engine instance backs one
/// appointment-edit screen; the staged edits live in its [`EditWorkspace`].
#[derive(Debug, Default)]
pub struct AppointmentEngine {
    workspace: EditWorkspace,
}

impl AppointmentEngine {
    /// Create an engine with an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current staged-edit state.
    pub fn workspace(&self) -> &EditWorkspace {
        &self.workspace
    }

    /// Apply a staged-edit event.
    pub fn apply(&mut self, event: EditEvent) {
        self.workspace = std::mem::take(&mut self.workspace).apply(event);
    }

    /// Move an appointment to a new slot with a (possibly different) doctor.
    ///
    /// Requires that the appointment is not completed and that the new date
    /// falls inside the new doctor's availability window; a date outside the
    /// window is rejected, never clamped. On success any staged edits are
    /// dropped and the reschedule result is recorded in the workspace.
    pub fn reschedule(
        &mut self,
        current: &AppointmentDetails,
        new_date: NaiveDate,
        new_time: NaiveTime,
        new_doctor: DoctorRef,
    ) -> Result<AppointmentDetails, AppointmentFailure> {
        self.ensure_transition(current, StatusMachineInput::Reschedule)?;

        if !new_doctor.is_available_on(new_date) {
            warn!(
                appointment_id = %current.appointment_id,
                doctor_id = %new_doctor.doctor_id,
                date = %new_date,
                "Reschedule rejected: date outside availability window"
            );
            return Err(AppointmentFailure::OutsideAvailability {
                date: new_date,
                available_from: new_doctor.available_from,
                available_to: new_doctor.available_to,
            });
        }

        let updated = AppointmentDetails {
            appointment_id: current.appointment_id.clone(),
            patient_id: current.patient_id.clone(),
            from_date: new_doctor.available_from,
            to_date: new_doctor.available_to,
            doctor: new_doctor,
            date: new_date,
            time: new_time,
            status: AppointmentStatus::Rescheduled,
            health_remark: None,
        };

        info!(
            appointment_id = %updated.appointment_id,
            doctor_id = %updated.doctor.doctor_id,
            date = %updated.date,
            "Appointment rescheduled"
        );

        self.workspace.clear_staged();
        self.workspace.last_status_change = Some(AppointmentStatus::Rescheduled);
        self.workspace.rescheduled = Some(updated.clone());
        Ok(updated)
    }

    /// Mark an appointment completed, persisting the health remark.
    ///
    /// Requires a non-terminal current status.
    pub fn complete(
        &mut self,
        current: &AppointmentDetails,
        patient_id: &PatientId,
        health_remark: Option<String>,
    ) -> Result<AppointmentDetails, AppointmentFailure> {
        self.ensure_transition(current, StatusMachineInput::Complete)?;

        let updated = AppointmentDetails {
            status: AppointmentStatus::Completed,
            health_remark,
            ..current.clone()
        };

        info!(
            appointment_id = %updated.appointment_id,
            patient_id = %patient_id,
            "Appointment completed"
        );

        self.workspace.clear_staged();
        self.workspace.last_status_change = Some(AppointmentStatus::Completed);
        self.workspace.completed = Some(updated.clone());
        Ok(updated)
    }

    /// Commit a reschedule using the staged date and time.
    pub fn commit_reschedule(
        &mut self,
        current: &AppointmentDetails,
        new_doctor: DoctorRef,
    ) -> Result<AppointmentDetails, AppointmentFailure> {
        let new_date = self.workspace.new_date.ok_or(AppointmentFailure::MissingDate)?;
        let new_time = self.workspace.new_time.ok_or(AppointmentFailure::MissingTime)?;
        self.reschedule(current, new_date, new_time, new_doctor)
    }

    /// Commit a completion using the staged health remark, if any.
    pub fn commit_completion(
        &mut self,
        current: &AppointmentDetails,
        patient_id: &PatientId,
    ) -> Result<AppointmentDetails, AppointmentFailure> {
        let health_remark = self.workspace.health_remark.clone();
        self.complete(current, patient_id, health_remark)
    }

    /// Check that the input is legal from the appointment's current status.
    fn ensure_transition(
        &self,
        current: &AppointmentDetails,
        input: StatusMachineInput,
    ) -> Result<(), AppointmentFailure> {
        let mut machine = machine_at(current.status);
        machine.consume(&input).map_err(|_| {
            // The only state with no legal transitions is Completed
            AppointmentFailure::AlreadyCompleted(current.appointment_id.clone())
        })?;
        Ok(())
    }
}
