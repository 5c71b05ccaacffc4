//! Role tags and the persisted key layout for each role's session record.
//!
//! The role key is shared by all three roles, so only one role tag can be
//! stored at a time.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownRole;

/// Prefix some backends put in front of role claims (`ROLE_ADMIN`).
pub const ROLE_PREFIX: &str = "ROLE_";

/// Shared storage key holding the normalized role tag.
pub const ROLE_KEY: &str = "userRole";

/// Login entry point used for unauthenticated redirects and logout.
pub const LOGIN_PATH: &str = "/auth/login";

/// Permission class of an authenticated party.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

/// Storage keys making up one role's session record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub token: &'static str,
    pub profile: &'static str,
    pub role: &'static str,
}

impl Role {
    /// Evaluation order for current-role resolution and token selection.
    pub const PRIORITY: [Role; 3] = [Role::Admin, Role::Doctor, Role::Patient];

    /// Upper-case role tag as stored and compared.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "PATIENT",
            Self::Doctor => "DOCTOR",
            Self::Admin => "ADMIN",
        }
    }

    #[must_use]
    pub fn keys(self) -> StorageKeys {
        let (token, profile) = match self {
            Self::Patient => ("authPatientToken", "patientData"),
            Self::Doctor => ("authDoctorToken", "doctorData"),
            Self::Admin => ("authAdminToken", "adminData"),
        };
        StorageKeys {
            token,
            profile,
            role: ROLE_KEY,
        }
    }

    /// Raw claim values a login for this role may carry. Both normalize to
    /// [`Role::as_str`]; a doubled prefix such as `ROLE_ROLE_ADMIN` does not.
    #[must_use]
    pub fn accepted_tags(self) -> [&'static str; 2] {
        match self {
            Self::Patient => ["PATIENT", "ROLE_PATIENT"],
            Self::Doctor => ["DOCTOR", "ROLE_DOCTOR"],
            Self::Admin => ["ADMIN", "ROLE_ADMIN"],
        }
    }

    #[must_use]
    pub fn accepts(self, tag: &str) -> bool {
        self.accepted_tags().contains(&tag)
    }

    /// Landing page for an authenticated session of this role.
    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Patient => "/patient/dashboard",
            Self::Doctor => "/doctor/dashboard",
            Self::Admin => "/admin/dashboard",
        }
    }

    /// Name of the nested profile object in login responses (`{"doctor": {...}}`).
    #[must_use]
    pub fn profile_field(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Doctor => "doctor",
            Self::Admin => "admin",
        }
    }

    /// The two roles other than `self`, in priority order.
    pub fn others(self) -> impl Iterator<Item = Role> {
        Self::PRIORITY.into_iter().filter(move |role| *role != self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_role(value.trim()) {
            "PATIENT" => Ok(Self::Patient),
            "DOCTOR" => Ok(Self::Doctor),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(UnknownRole(value.to_owned())),
        }
    }
}

/// Strip a single leading `ROLE_` marker; anything else is returned as-is.
#[must_use]
pub fn normalize_role(role: &str) -> &str {
    role.strip_prefix(ROLE_PREFIX).unwrap_or(role)
}
