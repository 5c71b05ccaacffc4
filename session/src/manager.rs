//! Reconciles the three role stores into one current role.
//!
//! LIFECYCLE
//! =========
//! Built once at startup with [`SessionManager::start`], which resets the
//! stores if more than one role holds a token. After that every mutation goes
//! through a [`RoleSessionStore`]; the manager only reads, except for the
//! forced logouts it performs on expired tokens.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::rc::Rc;

use serde_json::Value;

use crate::clock::Clock;
use crate::error::SessionError;
use crate::events::{SessionBus, SessionEvent, SubscriptionId};
use crate::role::Role;
use crate::storage::KeyValueStore;
use crate::store::{AuthBackend, Credentials, RoleSessionStore};
use crate::token;

/// Presence flags for one role's record, for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleSnapshot {
    pub role: Role,
    pub has_token: bool,
    pub has_profile: bool,
    pub stored_role: String,
}

#[derive(Clone)]
pub struct SessionManager {
    /// Indexed in [`Role::PRIORITY`] order.
    stores: [RoleSessionStore; 3],
    bus: SessionBus,
    clock: Rc<dyn Clock>,
}

impl SessionManager {
    #[must_use]
    pub fn new(storage: Rc<dyn KeyValueStore>, clock: Rc<dyn Clock>) -> Self {
        let bus = SessionBus::new();
        let stores = Role::PRIORITY
            .map(|role| RoleSessionStore::new(role, Rc::clone(&storage), bus.clone()));
        Self { stores, bus, clock }
    }

    /// Build the manager and run the startup reconciliation.
    #[must_use]
    pub fn start(storage: Rc<dyn KeyValueStore>, clock: Rc<dyn Clock>) -> Self {
        let manager = Self::new(storage, clock);
        manager.reconcile_on_startup();
        manager
    }

    #[must_use]
    pub fn store(&self, role: Role) -> &RoleSessionStore {
        let index = match role {
            Role::Admin => 0,
            Role::Doctor => 1,
            Role::Patient => 2,
        };
        &self.stores[index]
    }

    /// Stores in priority order.
    pub fn stores(&self) -> impl Iterator<Item = &RoleSessionStore> {
        self.stores.iter()
    }

    #[must_use]
    pub fn bus(&self) -> &SessionBus {
        &self.bus
    }

    #[must_use]
    pub fn now_secs(&self) -> u64 {
        self.clock.now_secs()
    }

    /// First role, in priority order, with a complete and unexpired session.
    ///
    /// An expired token logs its store out before evaluation moves on.
    #[must_use]
    pub fn current_role(&self) -> Option<Role> {
        Role::PRIORITY
            .into_iter()
            .find(|role| self.has_valid_session(*role))
    }

    fn has_valid_session(&self, role: Role) -> bool {
        let store = self.store(role);
        let Some(token) = store.token() else {
            return false;
        };
        if token::is_expired(&token, self.now_secs()) {
            log::info!("{role} token expired, clearing session");
            store.logout();
            return false;
        }
        store.validate_current_token()
    }

    pub fn clear_all_sessions(&self) {
        for store in &self.stores {
            store.logout();
        }
    }

    /// Reset everything when more than one role holds a token.
    /// Returns whether a reset happened.
    pub fn reconcile_on_startup(&self) -> bool {
        let populated = self
            .stores
            .iter()
            .filter(|store| store.is_authenticated())
            .count();
        if populated > 1 {
            log::warn!("{populated} role sessions hold tokens, clearing all");
            self.clear_all_sessions();
            return true;
        }
        false
    }

    /// Clean slate before any login attempt.
    pub fn prepare_for_login(&self) {
        self.clear_all_sessions();
    }

    /// Full login flow for `role`: clear every session, then log in.
    ///
    /// # Errors
    ///
    /// See [`RoleSessionStore::login`].
    pub async fn login<B: AuthBackend>(
        &self,
        role: Role,
        backend: &B,
        credentials: &Credentials,
    ) -> Result<Value, SessionError> {
        self.prepare_for_login();
        self.store(role).login(backend, credentials).await
    }

    pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + 'static) -> SubscriptionId {
        self.bus.subscribe(listener)
    }

    #[must_use]
    pub fn debug_state(&self) -> Vec<RoleSnapshot> {
        self.stores
            .iter()
            .map(|store| RoleSnapshot {
                role: store.kind(),
                has_token: store.token().is_some(),
                has_profile: store.profile().is_some(),
                stored_role: store.stored_role(),
            })
            .collect()
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("stores", &self.stores)
            .finish_non_exhaustive()
    }
}
