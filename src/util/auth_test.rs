use super::*;

#[test]
fn allowed_route_has_no_redirect() {
    assert_eq!(redirect_for(&RouteDecision::Allow), None);
}

#[test]
fn anonymous_redirect_keeps_history() {
    let decision = RouteDecision::RedirectToLogin {
        return_url: "/admin/dashboard".to_owned(),
    };
    assert_eq!(
        redirect_for(&decision).as_deref(),
        Some("/auth/login?returnUrl=%2Fadmin%2Fdashboard")
    );
    assert!(!redirect_options(&decision).replace);
}

#[test]
fn wrong_role_redirect_replaces_history() {
    let decision = RouteDecision::RedirectToDashboard(Role::Patient);
    assert_eq!(redirect_for(&decision).as_deref(), Some("/patient/dashboard"));
    assert!(redirect_options(&decision).replace);
}

#[test]
fn signed_in_user_on_login_page_goes_to_dashboard() {
    assert_eq!(
        already_signed_in_redirect(Some(Role::Doctor), "/auth/login"),
        Some("/doctor/dashboard")
    );
}

#[test]
fn signed_in_user_on_dashboard_stays() {
    assert_eq!(
        already_signed_in_redirect(Some(Role::Doctor), "/patient/dashboard"),
        None
    );
}

#[test]
fn anonymous_user_is_not_redirected() {
    assert_eq!(already_signed_in_redirect(None, "/auth/login"), None);
}

#[test]
fn login_returns_to_requested_page_of_same_role() {
    assert_eq!(
        post_login_target(Role::Doctor, Some("/doctor/appointments")),
        "/doctor/appointments"
    );
}

#[test]
fn login_ignores_return_url_of_other_role() {
    assert_eq!(
        post_login_target(Role::Patient, Some("/admin/dashboard")),
        "/patient/dashboard"
    );
}

#[test]
fn login_ignores_external_and_login_return_urls() {
    assert_eq!(post_login_target(Role::Admin, Some("https://evil.test/")), "/admin/dashboard");
    assert_eq!(post_login_target(Role::Admin, Some("//evil.test/")), "/admin/dashboard");
    assert_eq!(post_login_target(Role::Admin, Some("/auth/login")), "/admin/dashboard");
    assert_eq!(post_login_target(Role::Admin, Some("/auth/login?returnUrl=%2Fx")), "/admin/dashboard");
    assert_eq!(post_login_target(Role::Admin, None), "/admin/dashboard");
}

#[test]
fn login_accepts_unrestricted_return_url() {
    assert_eq!(post_login_target(Role::Patient, Some("/about")), "/about");
}

#[test]
fn login_ignores_backslash_host_return_urls() {
    assert_eq!(post_login_target(Role::Patient, Some("/\\evil.example/x")), "/patient/dashboard");
    assert_eq!(post_login_target(Role::Patient, Some("\\\\evil.example/x")), "/patient/dashboard");
    assert_eq!(post_login_target(Role::Patient, Some("/\t/evil.example/x")), "/patient/dashboard");
}

#[test]
fn login_keeps_query_of_return_url() {
    assert_eq!(
        post_login_target(Role::Doctor, Some("/doctor/appointments?day=today")),
        "/doctor/appointments?day=today"
    );
}
