//! Profile document records.

use serde::{Deserialize, Serialize};

/// Collections holding the profile documents.
pub mod collections {
    /// Patient profile documents
    pub const PATIENTS: &str = "patients";
    /// Hospital profile documents
    pub const HOSPITALS: &str = "hospitals";
}

/// A patient's profile document.
///
/// The backend may return partial documents; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A hospital's profile document, same optionality rules as [`Profile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    #[serde(default)]
    pub hospital_name: Option<String>,
    #[serde(default)]
    pub hospital_email: Option<String>,
    #[serde(default)]
    pub hospital_phone: Option<String>,
    #[serde(default)]
    pub hospital_city: Option<String>,
    #[serde(default)]
    pub hospital_pin_code: Option<String>,
}
