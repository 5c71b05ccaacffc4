//! Bearer-token selection for outgoing requests.
//!
//! The first store in priority order holding a token supplies it. An expired
//! token logs its store out and the request goes out unauthenticated; nothing
//! here blocks or retries.

#[cfg(test)]
#[path = "authenticator_test.rs"]
mod authenticator_test;

use crate::manager::SessionManager;
use crate::role::Role;
use crate::token;

pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// First non-empty token in priority order, with its role.
#[must_use]
pub fn select_token(manager: &SessionManager) -> Option<(Role, String)> {
    manager
        .stores()
        .find_map(|store| store.token().map(|token| (store.kind(), token)))
}

/// `Authorization` header value for the next request, if any.
#[must_use]
pub fn bearer_header(manager: &SessionManager) -> Option<(String, String)> {
    let (role, token) = select_token(manager)?;
    if token::is_expired(&token, manager.now_secs()) {
        log::info!("{role} token expired, sending request without credentials");
        manager.store(role).logout();
        return None;
    }
    Some((AUTHORIZATION_HEADER.to_owned(), format!("Bearer {token}")))
}

/// Append the bearer header to `headers` when a usable token exists.
/// Returns whether a header was added.
pub fn attach(manager: &SessionManager, headers: &mut Vec<(String, String)>) -> bool {
    match bearer_header(manager) {
        Some(header) => {
            headers.push(header);
            true
        }
        None => false,
    }
}
