//! Navigation decisions for role-guarded routes.
//!
//! UX-only: the backend enforces access control on every call.

#[cfg(test)]
#[path = "authorizer_test.rs"]
mod authorizer_test;

use url::form_urlencoded;

use crate::manager::SessionManager;
use crate::role::{LOGIN_PATH, Role};

/// Outcome of a route check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    /// Nobody is signed in; come back to `return_url` after login.
    RedirectToLogin { return_url: String },
    /// Signed in under a different role; go to that role's dashboard.
    RedirectToDashboard(Role),
}

impl RouteDecision {
    /// Where to navigate, or `None` when the route is allowed.
    #[must_use]
    pub fn redirect_path(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin { return_url } => Some(login_redirect_url(return_url)),
            Self::RedirectToDashboard(role) => Some(role.dashboard_path().to_owned()),
        }
    }
}

/// Decide whether the current session may open `target`.
///
/// `required` of `None` only asks for some authenticated role.
#[must_use]
pub fn authorize(manager: &SessionManager, required: Option<Role>, target: &str) -> RouteDecision {
    decide(manager.current_role(), required, target)
}

/// Pure decision given an already resolved current role.
#[must_use]
pub fn decide(current: Option<Role>, required: Option<Role>, target: &str) -> RouteDecision {
    match (current, required) {
        (None, _) => {
            log::debug!("no valid session for {target}, redirecting to login");
            RouteDecision::RedirectToLogin {
                return_url: target.to_owned(),
            }
        }
        (Some(current), Some(required)) if current != required => {
            log::warn!("{current} session attempted to open {required} route {target}");
            RouteDecision::RedirectToDashboard(current)
        }
        (Some(_), _) => RouteDecision::Allow,
    }
}

/// Login path carrying the page to return to.
#[must_use]
pub fn login_redirect_url(return_url: &str) -> String {
    if return_url.is_empty() {
        return LOGIN_PATH.to_owned();
    }
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("returnUrl", return_url)
        .finish();
    format!("{LOGIN_PATH}?{query}")
}

/// Role guarding `path`, from its first segment (`/doctor/...` → doctor).
#[must_use]
pub fn required_role_for_path(path: &str) -> Option<Role> {
    let first = path.trim_start_matches('/').split(['/', '?', '#']).next()?;
    match first {
        "patient" => Some(Role::Patient),
        "doctor" => Some(Role::Doctor),
        "admin" => Some(Role::Admin),
        _ => None,
    }
}
