use super::*;

#[test]
fn default_base_url_points_at_local_backend() {
    let config = AppConfig::load();
    assert!(!config.api_base_url.is_empty());
}

#[test]
fn url_joins_base_and_path_with_one_slash() {
    let config = AppConfig {
        api_base_url: "http://localhost:8080/api/".to_owned(),
    };
    assert_eq!(config.url("/auth/login"), "http://localhost:8080/api/auth/login");
    assert_eq!(config.url("auth/login"), "http://localhost:8080/api/auth/login");
}

#[test]
fn empty_base_keeps_relative_path() {
    assert_eq!(build_url_with_base("  ", "/auth/login"), "/auth/login");
}

#[test]
fn normalize_runtime_value_trims_and_rejects_empty() {
    assert_eq!(normalize_runtime_value(""), None);
    assert_eq!(normalize_runtime_value("   "), None);
    assert_eq!(
        normalize_runtime_value(" https://hams.example/api "),
        Some("https://hams.example/api".to_owned())
    );
}

#[test]
fn runtime_override_replaces_base_only_when_present() {
    let mut config = AppConfig {
        api_base_url: "https://default".to_owned(),
    };
    apply_runtime_overrides(&mut config, RuntimeConfig::default());
    assert_eq!(config.api_base_url, "https://default");

    apply_runtime_overrides(
        &mut config,
        RuntimeConfig {
            api_base_url: Some("https://override".to_owned()),
        },
    );
    assert_eq!(config.api_base_url, "https://override");
}

#[test]
fn endpoints_match_backend_routes() {
    assert_eq!(login_endpoint(Role::Doctor), "/auth/login");
    assert_eq!(register_endpoint(Role::Patient), Some("/auth/register"));
    assert_eq!(register_endpoint(Role::Doctor), None);
    assert_eq!(register_endpoint(Role::Admin), None);
}

#[test]
fn admin_doctor_paths() {
    assert_eq!(CREATE_DOCTOR_PATH, "/admin/create-user");
    assert_eq!(admin_doctor_path(12), "/admin/doctors/12");
}
