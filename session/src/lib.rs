//! Session and role resolution for the hospital appointment front end.
//!
//! The browser keeps one persisted session record per role (patient, doctor,
//! admin) in a shared key-value store. This crate owns the rules that keep
//! those records consistent: at most one role may hold a token, expired
//! tokens are dropped on first inspection, and the current role is resolved
//! in a fixed priority order.
//!
//! SYSTEM CONTEXT
//! ==============
//! The crate is browser-agnostic. The front end supplies the storage, clock,
//! and HTTP backend through the [`KeyValueStore`], [`Clock`], and
//! [`AuthBackend`] seams, then consults [`SessionManager`] from route guards
//! and the request authenticator.

pub mod authenticator;
pub mod authorizer;
pub mod clock;
pub mod error;
pub mod events;
pub mod manager;
pub mod role;
pub mod storage;
pub mod store;
pub mod token;

pub use authorizer::RouteDecision;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ApiError, ErrorContext, SessionError, UnknownRole};
pub use events::{SessionBus, SessionEvent, SessionStatus, SubscriptionId};
pub use manager::{RoleSnapshot, SessionManager};
pub use role::{LOGIN_PATH, Role, normalize_role};
pub use storage::{KeyValueStore, MemoryStore};
pub use store::{AuthBackend, AuthResponse, Credentials, RoleSessionStore};
