//! Core types for the appointment engine.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an appointment (UUID string).
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(pub String);

impl AppointmentId {
    /// Creates a new random appointment ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates an appointment ID from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the appointment ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AppointmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AppointmentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AppointmentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of the patient an appointment belongs to.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub String);

impl PatientId {
    /// Returns the patient ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PatientId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PatientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of a doctor.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoctorId(pub String);

impl DoctorId {
    /// Returns the doctor ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DoctorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DoctorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DoctorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A doctor reference with the availability window appointments must fall in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRef {
    pub doctor_id: DoctorId,
    #[serde(default)]
    pub name: Option<String>,
    /// First day the doctor accepts appointments
    pub available_from: NaiveDate,
    /// Last day the doctor accepts appointments (inclusive)
    pub available_to: NaiveDate,
}

impl DoctorRef {
    /// Whether the doctor accepts appointments on the given day.
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        date >= self.available_from && date <= self.available_to
    }
}

/// Lifecycle status of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Rescheduled,
    Completed,
}

impl AppointmentStatus {
    /// `completed` is terminal; nothing transitions out of it.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AppointmentStatus::Completed)
    }
}

/// A booked appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDetails {
    pub appointment_id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor: DoctorRef,
    /// Copy of the doctor's availability window at booking time
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    /// Chosen day of the visit
    pub date: NaiveDate,
    /// Chosen time of the visit
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    /// Set only when the appointment is completed
    #[serde(default)]
    pub health_remark: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn availability_window_is_inclusive() {
        let doctor = DoctorRef {
            doctor_id: DoctorId::from("doc-1"),
            name: Some("Dr. Rao".to_string()),
            available_from: day(2026, 8, 10),
            available_to: day(2026, 8, 20),
        };

        assert!(doctor.is_available_on(day(2026, 8, 10)));
        assert!(doctor.is_available_on(day(2026, 8, 15)));
        assert!(doctor.is_available_on(day(2026, 8, 20)));
        assert!(!doctor.is_available_on(day(2026, 8, 9)));
        assert!(!doctor.is_available_on(day(2026, 8, 21)));
    }

    #[test]
    fn only_completed_is_terminal() {
        assert!(!AppointmentStatus::Scheduled.is_terminal());
        assert!(!AppointmentStatus::Rescheduled.is_terminal());
        assert!(AppointmentStatus::Completed.is_terminal());
    }
}
