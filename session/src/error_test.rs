use super::*;

// =============================================================
// ApiError::from_status
// =============================================================

#[test]
fn from_status_maps_known_codes() {
    assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403, "nope"), ApiError::Forbidden);
    assert_eq!(
        ApiError::from_status(409, "  taken  "),
        ApiError::Conflict("taken".to_owned())
    );
    assert!(matches!(ApiError::from_status(0, ""), ApiError::Network(_)));
    assert_eq!(
        ApiError::from_status(500, "boom"),
        ApiError::Http {
            status: 500,
            message: "boom".to_owned()
        }
    );
}

#[test]
fn from_status_truncates_long_bodies() {
    let body = "x".repeat(500);
    let ApiError::Http { message, .. } = ApiError::from_status(502, &body) else {
        panic!("expected http error");
    };
    assert_eq!(message.len(), MAX_ERROR_CHARS);
}

#[test]
fn status_round_trips_for_http_classes() {
    for code in [400, 401, 403, 409, 418] {
        assert_eq!(ApiError::from_status(code, "").status(), Some(code));
    }
    assert_eq!(ApiError::Network("down".to_owned()).status(), None);
}

// =============================================================
// user_message
// =============================================================

#[test]
fn login_messages_are_distinct_per_class() {
    let messages = [
        ApiError::Unauthorized.user_message(ErrorContext::Login),
        ApiError::Forbidden.user_message(ErrorContext::Login),
        ApiError::Conflict(String::new()).user_message(ErrorContext::Login),
        ApiError::Network(String::new()).user_message(ErrorContext::Login),
    ];
    for (i, a) in messages.iter().enumerate() {
        for (j, b) in messages.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
    assert_eq!(messages[0], "Invalid username or password.");
}

#[test]
fn bad_request_prefers_server_message() {
    let err = ApiError::from_status(400, "email is required");
    assert_eq!(err.user_message(ErrorContext::Registration), "email is required");
    let empty = ApiError::from_status(400, "");
    assert_eq!(
        empty.user_message(ErrorContext::Registration),
        "Invalid data provided. Please check your inputs."
    );
}

#[test]
fn unauthorized_outside_login_means_expired_session() {
    assert_eq!(
        ApiError::Unauthorized.user_message(ErrorContext::Request),
        "Your session has expired. Please log in again."
    );
}

#[test]
fn invalid_role_message_names_the_portal() {
    let err = SessionError::InvalidRole {
        expected: Role::Doctor,
        found: "PATIENT".to_owned(),
    };
    assert!(err.user_message(ErrorContext::Login).contains("doctor account"));
}

#[test]
fn session_error_wraps_backend_message() {
    let err = SessionError::from(ApiError::Forbidden);
    assert_eq!(
        err.user_message(ErrorContext::Login),
        "Access denied for this account type."
    );
}
