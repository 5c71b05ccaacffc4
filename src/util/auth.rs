//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every role-restricted page applies the same redirect behavior: anonymous
//! visitors go to the login page with a return URL, sessions of another role
//! go to their own dashboard. Logging out on a guarded page lands on the
//! login page through the same path.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::authorizer::required_role_for_path;
use session::{LOGIN_PATH, Role, RouteDecision};
use url::{Position, Url};

use crate::state::session::SessionContext;

/// Re-check access whenever the session changes and redirect when denied.
pub fn install_role_guard<F>(
    session: SessionContext,
    required: Option<Role>,
    target: Signal<String>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let decision = session.authorize(required, &target.get());
        if let Some(path) = redirect_for(&decision) {
            navigate(&path, redirect_options(&decision));
        }
    });
}

/// Navigation target for a denied route.
pub fn redirect_for(decision: &RouteDecision) -> Option<String> {
    decision.redirect_path()
}

/// Dashboard redirects replace the history entry so "back" does not bounce.
pub fn redirect_options(decision: &RouteDecision) -> NavigateOptions {
    NavigateOptions {
        replace: matches!(decision, RouteDecision::RedirectToDashboard(_)),
        ..NavigateOptions::default()
    }
}

/// Where the login page should send an already signed-in user, if anywhere.
///
/// Users already on a dashboard stay put.
pub fn already_signed_in_redirect(current: Option<Role>, pathname: &str) -> Option<&'static str> {
    let role = current?;
    let on_dashboard = Role::PRIORITY
        .iter()
        .any(|role| pathname.starts_with(role.dashboard_path()));
    (!on_dashboard).then(|| role.dashboard_path())
}

/// Page to open after `role` signs in.
///
/// A `returnUrl` is honored only when it resolves to this origin, outside the
/// login page, and inside the signed-in role's area or no role's area.
pub fn post_login_target(role: Role, return_url: Option<&str>) -> String {
    return_url
        .and_then(same_origin_path)
        .filter(|path| !path.starts_with(LOGIN_PATH))
        .filter(|path| required_role_for_path(path).is_none_or(|required| required == role))
        .unwrap_or_else(|| role.dashboard_path().to_owned())
}

const LOCAL_ORIGIN: &str = "http://hams.invalid/";

/// Path, query, and fragment of `candidate` if it stays on this origin.
///
/// Resolving follows browser rules, so `//host` and `/\host` leave the origin.
fn same_origin_path(candidate: &str) -> Option<String> {
    if !candidate.starts_with('/') {
        return None;
    }
    let base = Url::parse(LOCAL_ORIGIN).ok()?;
    let resolved = base.join(candidate).ok()?;
    if resolved.origin() != base.origin() {
        log::warn!("ignoring off-site return url");
        return None;
    }
    Some(resolved[Position::BeforePath..].to_owned())
}
