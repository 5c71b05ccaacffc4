use super::*;
use crate::clock::{Clock, ManualClock};
use crate::storage::{KeyValueStore, MemoryStore};
use std::rc::Rc;

fn manager_with(role: Option<Role>) -> SessionManager {
    let storage = Rc::new(MemoryStore::new());
    if let Some(role) = role {
        let keys = role.keys();
        storage.set(keys.token, "token");
        storage.set(keys.profile, "{}");
        storage.set(keys.role, role.as_str());
    }
    SessionManager::new(
        storage as Rc<dyn KeyValueStore>,
        Rc::new(ManualClock::new(0)) as Rc<dyn Clock>,
    )
}

// =============================================================
// authorize
// =============================================================

#[test]
fn anonymous_visit_redirects_to_login_with_target() {
    let manager = manager_with(None);
    let decision = authorize(&manager, Some(Role::Patient), "/patient/my-appointments");
    assert_eq!(
        decision,
        RouteDecision::RedirectToLogin {
            return_url: "/patient/my-appointments".to_owned()
        }
    );
    assert_eq!(
        decision.redirect_path().as_deref(),
        Some("/auth/login?returnUrl=%2Fpatient%2Fmy-appointments")
    );
}

#[test]
fn matching_role_is_allowed() {
    let manager = manager_with(Some(Role::Admin));
    assert_eq!(
        authorize(&manager, Some(Role::Admin), "/admin/dashboard"),
        RouteDecision::Allow
    );
}

#[test]
fn other_role_goes_to_own_dashboard() {
    let manager = manager_with(Some(Role::Doctor));
    let decision = authorize(&manager, Some(Role::Patient), "/patient/dashboard");
    assert_eq!(decision, RouteDecision::RedirectToDashboard(Role::Doctor));
    assert_eq!(decision.redirect_path().as_deref(), Some("/doctor/dashboard"));
}

#[test]
fn unannotated_route_needs_any_session() {
    assert_eq!(decide(Some(Role::Patient), None, "/profile"), RouteDecision::Allow);
    assert!(matches!(
        decide(None, None, "/profile"),
        RouteDecision::RedirectToLogin { .. }
    ));
}

#[test]
fn allow_has_no_redirect() {
    assert_eq!(RouteDecision::Allow.redirect_path(), None);
}

// =============================================================
// helpers
// =============================================================

#[test]
fn login_redirect_without_target_is_plain_login() {
    assert_eq!(login_redirect_url(""), "/auth/login");
}

#[test]
fn login_redirect_encodes_query_characters() {
    assert_eq!(
        login_redirect_url("/doctor/patients?name=a b&x=1"),
        "/auth/login?returnUrl=%2Fdoctor%2Fpatients%3Fname%3Da+b%26x%3D1"
    );
}

#[test]
fn required_role_follows_first_segment() {
    assert_eq!(required_role_for_path("/patient/dashboard"), Some(Role::Patient));
    assert_eq!(required_role_for_path("/doctor"), Some(Role::Doctor));
    assert_eq!(required_role_for_path("/admin?tab=doctors"), Some(Role::Admin));
    assert_eq!(required_role_for_path("/auth/login"), None);
    assert_eq!(required_role_for_path("/"), None);
    assert_eq!(required_role_for_path("/patients"), None);
}
