//! Per-role session store.
//!
//! One type serves all three roles; the role is a value, not a separate
//! implementation. Each store owns the token and profile keys for its role
//! and shares the role key with the other two.
//!
//! WRITE ORDER
//! ===========
//! A login first clears the other roles' records, then writes token, profile,
//! and role in that order. A reader between those steps may see nobody signed
//! in, never two roles at once.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::future::Future;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, SessionError};
use crate::events::{SessionBus, SessionEvent, SessionStatus, SubscriptionId};
use crate::role::{Role, normalize_role};
use crate::storage::KeyValueStore;
use crate::token;

/// Username/password pair posted to a login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login or registration response.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthResponse {
    pub token: Option<String>,
    /// Role-specific user data, persisted verbatim.
    pub profile: Value,
}

impl AuthResponse {
    /// Build from a raw response body.
    ///
    /// JSON objects keep the whole body as the profile and lift `token` out of
    /// it. Anything else (registration endpoints answer with plain text) is
    /// kept as a JSON string with no token.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(profile @ Value::Object(_)) => {
                let token = profile
                    .get("token")
                    .and_then(Value::as_str)
                    .filter(|token| !token.is_empty())
                    .map(str::to_owned);
                Self { token, profile }
            }
            Ok(Value::String(text)) => Self {
                token: None,
                profile: Value::String(text),
            },
            _ => Self {
                token: None,
                profile: Value::String(body.trim().to_owned()),
            },
        }
    }
}

/// HTTP collaborator performing the actual login and registration calls.
pub trait AuthBackend {
    fn login(
        &self,
        role: Role,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;

    fn register<R: Serialize>(
        &self,
        role: Role,
        request: &R,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
}

/// Persisted session record for one role.
#[derive(Clone)]
pub struct RoleSessionStore {
    role: Role,
    storage: Rc<dyn KeyValueStore>,
    bus: SessionBus,
}

impl RoleSessionStore {
    #[must_use]
    pub fn new(role: Role, storage: Rc<dyn KeyValueStore>, bus: SessionBus) -> Self {
        Self { role, storage, bus }
    }

    /// Role this store persists.
    #[must_use]
    pub fn kind(&self) -> Role {
        self.role
    }

    /// Log in against the backend and persist the resulting session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Backend`] when the call fails and
    /// [`SessionError::InvalidRole`] when the token belongs to another role.
    pub async fn login<B: AuthBackend>(
        &self,
        backend: &B,
        credentials: &Credentials,
    ) -> Result<Value, SessionError> {
        let response = backend.login(self.role, credentials).await?;
        self.complete_login(response)
    }

    /// Persist a successful login response.
    ///
    /// Other roles are cleared before the role check, so a rejected login
    /// still leaves nobody signed in.
    ///
    /// # Errors
    ///
    /// See [`RoleSessionStore::login`].
    pub fn complete_login(&self, response: AuthResponse) -> Result<Value, SessionError> {
        self.clear_other_roles();

        let Some(token) = response.token.filter(|token| !token.is_empty()) else {
            log::warn!("{} login response without token", self.role);
            return Err(SessionError::MissingToken(self.role));
        };

        let claimed = token::extract_role(&token)
            .or_else(|| self.profile_role(&response.profile))
            .unwrap_or_else(|| self.role.as_str().to_owned());
        if !self.role.accepts(&claimed) {
            log::warn!("{} login rejected: token role {claimed:?}", self.role);
            return Err(SessionError::InvalidRole {
                expected: self.role,
                found: claimed,
            });
        }
        let normalized = normalize_role(&claimed);

        let profile = serde_json::to_string(&response.profile)?;
        let keys = self.role.keys();
        self.storage.set(keys.token, &token);
        self.storage.set(keys.profile, &profile);
        self.storage.set(keys.role, normalized);
        log::info!("{} session stored", self.role);

        self.publish_status();
        Ok(response.profile)
    }

    /// Register against the backend and persist profile and role.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Backend`] when the call fails.
    pub async fn register<B: AuthBackend, R: Serialize>(
        &self,
        backend: &B,
        request: &R,
    ) -> Result<Value, SessionError> {
        let response = backend.register(self.role, request).await?;
        self.complete_registration(response)
    }

    /// Persist a registration response. No token is written; registering
    /// does not sign the user in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Profile`] if the profile cannot be encoded.
    pub fn complete_registration(&self, response: AuthResponse) -> Result<Value, SessionError> {
        let profile = serde_json::to_string(&response.profile)?;
        let keys = self.role.keys();
        self.storage.set(keys.profile, &profile);
        self.storage.set(keys.role, self.role.as_str());
        log::info!("{} registration stored", self.role);

        self.publish_status();
        Ok(response.profile)
    }

    /// Clear this role's record and ask the UI to return to the login page.
    pub fn logout(&self) {
        clear_record(self.storage.as_ref(), self.role);
        log::info!("{} logged out", self.role);
        self.publish_status();
        self.bus.publish(&SessionEvent::LoggedOut(self.role));
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read(self.role.keys().token)
    }

    /// Stored profile; unparsable or `null` profiles read as absent.
    #[must_use]
    pub fn profile(&self) -> Option<Value> {
        let raw = self.read(self.role.keys().profile)?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Null) => None,
            Ok(profile) => Some(profile),
            Err(err) => {
                log::warn!("{} profile is not valid JSON: {err}", self.role);
                None
            }
        }
    }

    /// Stored profile decoded into `T`.
    #[must_use]
    pub fn profile_as<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_value(self.profile()?).ok()
    }

    /// Shared role tag, or an empty string.
    #[must_use]
    pub fn stored_role(&self) -> String {
        self.read(self.role.keys().role).unwrap_or_default()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            authenticated: self.is_authenticated(),
            role: self.stored_role().parse().ok(),
        }
    }

    #[must_use]
    pub fn can_access(&self, required: Role) -> bool {
        self.stored_role() == required.as_str()
    }

    /// Token, profile, and this store's role tag are all present.
    #[must_use]
    pub fn validate_current_token(&self) -> bool {
        self.token().is_some() && self.profile().is_some() && self.can_access(self.role)
    }

    /// Call `listener` with the new status after every change to this role.
    pub fn subscribe(&self, listener: impl Fn(SessionStatus) + 'static) -> SubscriptionId {
        let role = self.role;
        self.bus.subscribe(move |event| {
            if let SessionEvent::Changed { role: changed, status } = event {
                if *changed == role {
                    listener(*status);
                }
            }
        })
    }

    fn clear_other_roles(&self) {
        for other in self.role.others() {
            clear_record(self.storage.as_ref(), other);
        }
        for other in self.role.others() {
            self.bus.publish(&SessionEvent::Changed {
                role: other,
                status: SessionStatus::default(),
            });
        }
    }

    fn profile_role(&self, profile: &Value) -> Option<String> {
        profile
            .get(self.role.profile_field())
            .and_then(|nested| nested.get("role"))
            .or_else(|| profile.get("role"))
            .and_then(Value::as_str)
            .filter(|role| !role.is_empty())
            .map(str::to_owned)
    }

    fn publish_status(&self) {
        self.bus.publish(&SessionEvent::Changed {
            role: self.role,
            status: self.status(),
        });
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|value| !value.is_empty())
    }
}

impl std::fmt::Debug for RoleSessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleSessionStore")
            .field("role", &self.role)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

/// Remove every key of `role`'s record, including the shared role key.
fn clear_record(storage: &dyn KeyValueStore, role: Role) {
    let keys = role.keys();
    storage.remove(keys.token);
    storage.remove(keys.profile);
    storage.remove(keys.role);
}
