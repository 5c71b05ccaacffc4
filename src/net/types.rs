//! Wire types exchanged with the HAMS backend.
//!
//! Field names follow the backend's camelCase JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use session::Role;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub patient_id: u64,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub address: String,
    pub gender: String,
    /// ISO date.
    pub date_of_birth: String,
    pub blood_group: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub doctor_id: u64,
    pub doctor_name: String,
    pub email: String,
    pub contact_number: String,
    pub qualification: String,
    pub specialization: String,
    pub year_of_experience: u32,
    pub clinic_address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub admin_id: u64,
    pub username: String,
    pub role: String,
}

/// Stored login response for a patient session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PatientSession {
    pub patient: Patient,
}

/// Stored login response for a doctor session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DoctorSession {
    pub doctor: Doctor,
}

/// Stored login response for an admin session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AdminSession {
    pub admin: Admin,
}

/// Self-registration form for patients.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRegistration {
    pub username: String,
    pub password: String,
    pub name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub blood_group: String,
}

/// Doctor account created by an admin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRegistration {
    pub username: String,
    pub password: String,
    pub doctor_name: String,
    pub qualification: String,
    pub specialization: String,
    pub clinic_address: String,
    pub year_of_experience: u32,
    pub contact_number: String,
    pub email: String,
}

/// Fields an admin may change on an existing doctor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorUpdate {
    pub contact_number: String,
    pub year_of_experience: u32,
    pub clinic_address: String,
}

impl DoctorUpdate {
    pub fn from_doctor(doctor: &Doctor) -> Self {
        Self {
            contact_number: doctor.contact_number.clone(),
            year_of_experience: doctor.year_of_experience,
            clinic_address: doctor.clinic_address.clone(),
        }
    }
}

/// Name to greet the signed-in user with, read from the stored profile.
pub fn display_name(role: Role, profile: &serde_json::Value) -> Option<String> {
    let name = match role {
        Role::Patient => serde_json::from_value::<PatientSession>(profile.clone())
            .ok()
            .map(|session| session.patient.name),
        Role::Doctor => serde_json::from_value::<DoctorSession>(profile.clone())
            .ok()
            .map(|session| session.doctor.doctor_name),
        Role::Admin => serde_json::from_value::<AdminSession>(profile.clone())
            .ok()
            .map(|session| session.admin.username),
    };
    name.filter(|name| !name.trim().is_empty())
}
