//! Reactive handle on the role session manager.
//!
//! SYSTEM CONTEXT
//! ==============
//! The manager itself is plain Rust over browser storage. Components read
//! through this context so that every write published on the session bus
//! re-runs the effects and views that asked for the current role.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use session::{Role, RouteDecision, SessionEvent, SessionManager, authorizer};

#[derive(Clone, Copy)]
pub struct SessionContext {
    manager: StoredValue<SessionManager, LocalStorage>,
    revision: RwSignal<u64>,
}

impl SessionContext {
    /// Wrap `manager` and bump the revision on every session event.
    pub fn new(manager: SessionManager) -> Self {
        let revision = RwSignal::new(0_u64);
        manager.subscribe(move |event| {
            if let SessionEvent::LoggedOut(role) = event {
                log::info!("{role} session ended");
            }
            revision.try_update(|rev| *rev += 1);
        });
        Self {
            manager: StoredValue::new_local(manager),
            revision,
        }
    }

    /// Untracked clone of the manager for async work and event handlers.
    pub fn manager(&self) -> SessionManager {
        self.manager.get_value()
    }

    /// Tracked: the active role, re-evaluated after any session write.
    pub fn current_role(&self) -> Option<Role> {
        self.revision.track();
        self.manager.with_value(SessionManager::current_role)
    }

    /// Tracked route decision for `target`.
    pub fn authorize(&self, required: Option<Role>, target: &str) -> RouteDecision {
        self.revision.track();
        self.manager
            .with_value(|manager| authorizer::authorize(manager, required, target))
    }

    /// Tracked profile of `role`, if that role is signed in.
    pub fn profile(&self, role: Role) -> Option<serde_json::Value> {
        self.revision.track();
        self.manager.with_value(|manager| {
            let store = manager.store(role);
            store
                .is_authenticated()
                .then(|| store.profile())
                .flatten()
        })
    }

    /// Log out `role` and notify subscribers.
    pub fn logout(&self, role: Role) {
        self.manager.with_value(|manager| manager.store(role).logout());
    }
}

/// Fetch the session context provided by `App`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
