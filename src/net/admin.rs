//! Admin doctor management.
//!
//! SYSTEM CONTEXT
//! ==============
//! Creating a doctor is an admin action, not a doctor registration: nothing
//! here writes to the session stores, so the admin's own session (and the
//! shared role key) is left as it was.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use session::{ApiError, SessionManager};

use super::api::{ApiClient, BrowserTransport, HttpMethod, Transport};
use super::types::{Doctor, DoctorRegistration, DoctorUpdate};
use crate::config::{self, AppConfig};

#[derive(Clone, Debug)]
pub struct AdminClient<T = BrowserTransport> {
    api: ApiClient<T>,
}

impl AdminClient {
    pub fn new(config: AppConfig, manager: SessionManager) -> Self {
        Self::from_api(ApiClient::new(config, manager))
    }
}

impl<T> AdminClient<T> {
    pub fn from_api(api: ApiClient<T>) -> Self {
        Self { api }
    }
}

impl<T: Transport> AdminClient<T> {
    /// # Errors
    ///
    /// Returns the backend's classified error; 409 means the username or
    /// email is taken.
    pub async fn create_doctor(&self, request: &DoctorRegistration) -> Result<(), ApiError> {
        // The backend answers with plain text.
        self.api
            .request_text(HttpMethod::Post, config::CREATE_DOCTOR_PATH, Some(request))
            .await?;
        log::info!("doctor account {} created", request.username);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the backend's classified error or [`ApiError::Decode`].
    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        let doctors: Option<Vec<Doctor>> = self.api.get_json(config::ADMIN_DOCTORS_PATH).await?;
        Ok(doctors.unwrap_or_default())
    }

    /// # Errors
    ///
    /// [`ApiError::BadRequest`] for a zero id, otherwise the backend's error.
    pub async fn update_doctor(&self, doctor_id: u64, update: &DoctorUpdate) -> Result<(), ApiError> {
        check_doctor_id(doctor_id)?;
        self.api
            .request_text(HttpMethod::Put, &config::admin_doctor_path(doctor_id), Some(update))
            .await?;
        Ok(())
    }

    /// # Errors
    ///
    /// [`ApiError::BadRequest`] for a zero id, otherwise the backend's error.
    pub async fn delete_doctor(&self, doctor_id: u64) -> Result<(), ApiError> {
        check_doctor_id(doctor_id)?;
        self.api
            .request_text::<()>(HttpMethod::Delete, &config::admin_doctor_path(doctor_id), None)
            .await?;
        log::info!("doctor {doctor_id} deleted");
        Ok(())
    }
}

fn check_doctor_id(doctor_id: u64) -> Result<(), ApiError> {
    if doctor_id == 0 {
        return Err(ApiError::BadRequest("Invalid doctor ID".to_owned()));
    }
    Ok(())
}
