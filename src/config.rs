//! Backend endpoint configuration.
//!
//! The API base URL comes from `HAMS_API_BASE_URL` at build time and can be
//! overridden at runtime through `window.HAMS_CONFIG.api_base_url`, so static
//! deployments can point at another backend without rebuilding. Values here
//! are public; never put secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use session::Role;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Build-time defaults with runtime overrides applied.
    pub fn load() -> Self {
        let mut config = Self {
            api_base_url: option_env!("HAMS_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_owned(),
        };
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        build_url_with_base(&self.api_base_url, path)
    }
}

/// Login endpoint. All roles share one endpoint; the token says who logged in.
pub fn login_endpoint(role: Role) -> &'static str {
    match role {
        Role::Patient | Role::Doctor | Role::Admin => "/auth/login",
    }
}

/// Self-registration endpoint, if the role can sign itself up.
///
/// Doctors are created by an admin through [`CREATE_DOCTOR_PATH`]; admins
/// cannot be registered at all.
pub fn register_endpoint(role: Role) -> Option<&'static str> {
    match role {
        Role::Patient => Some("/auth/register"),
        Role::Doctor | Role::Admin => None,
    }
}

/// Admin-only: create a doctor account.
pub const CREATE_DOCTOR_PATH: &str = "/admin/create-user";

/// Admin-only: doctor listing.
pub const ADMIN_DOCTORS_PATH: &str = "/admin/doctors";

/// Admin-only: one doctor, for update and delete.
pub fn admin_doctor_path(doctor_id: u64) -> String {
    format!("{ADMIN_DOCTORS_PATH}/{doctor_id}")
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();
    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{base}/{}", path.trim_start_matches('/'))
    }
}

#[cfg(feature = "hydrate")]
fn runtime_config() -> Option<RuntimeConfig> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str("HAMS_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let value = js_sys::Reflect::get(&config, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()?;
    Some(RuntimeConfig {
        api_base_url: normalize_runtime_value(&value),
    })
}

#[cfg(not(feature = "hydrate"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
