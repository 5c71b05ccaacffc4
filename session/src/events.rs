//! Broadcast-on-write notifications for session changes.
//!
//! Every mutation of a session record publishes synchronously to all
//! listeners before the mutating call returns. Listeners run on the caller's
//! thread; the bus is `!Send` like the rest of the session state.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::role::Role;

/// Observable state of one role's session store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStatus {
    /// A token is present for this role.
    pub authenticated: bool,
    /// The shared role tag, when it parses as a known role.
    pub role: Option<Role>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A role's record was written or cleared.
    Changed { role: Role, status: SessionStatus },
    /// A role was explicitly logged out; the UI should return to the login page.
    LoggedOut(Role),
}

/// Handle returned by [`SessionBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&SessionEvent)>;

/// Fan-out of [`SessionEvent`]s. Clones share the same listener list.
#[derive(Clone, Default)]
pub struct SessionBus {
    listeners: Rc<RefCell<Vec<(SubscriptionId, Listener)>>>,
    next_id: Rc<Cell<u64>>,
}

impl SessionBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    /// Deliver `event` to every listener registered at the time of the call.
    pub fn publish(&self, event: &SessionEvent) {
        // Snapshot so listeners may subscribe or publish without a double borrow.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl std::fmt::Debug for SessionBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
