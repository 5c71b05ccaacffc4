//! Error taxonomy for session operations and backend calls.
//!
//! Internal inconsistencies (bad tokens, expired sessions, several roles
//! populated at once) never appear here; they are repaired in place. What is
//! left is what the user has to act on.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::role::Role;

/// Maximum number of response body characters carried into an error.
const MAX_ERROR_CHARS: usize = 200;

/// A role tag that does not name a known role.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

/// Failure of a login or registration attempt.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The token's role does not belong to the store being written.
    #[error("invalid role for {expected} session: {found:?}")]
    InvalidRole { expected: Role, found: String },
    /// A login response carried no bearer token.
    #[error("login response for {0} carried no token")]
    MissingToken(Role),
    #[error(transparent)]
    Backend(#[from] ApiError),
    #[error("failed to encode profile: {0}")]
    Profile(#[from] serde_json::Error),
}

/// Backend-originated failure, classified by HTTP status.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    /// The server could not be reached (status 0 in browser terms).
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Flow a backend error surfaced from; selects the wording shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorContext {
    Login,
    Registration,
    Request,
}

impl ApiError {
    /// Classify a non-success response.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = sanitize_body(body);
        match status {
            0 => Self::Network(message),
            400 => Self::BadRequest(message),
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            409 => Self::Conflict(message),
            _ => Self::Http { status, message },
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::Conflict(_) => Some(409),
            Self::BadRequest(_) => Some(400),
            Self::Http { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    /// Human-readable message for `context`.
    #[must_use]
    pub fn user_message(&self, context: ErrorContext) -> String {
        let fixed = match (self, context) {
            (Self::Unauthorized, ErrorContext::Login) => "Invalid username or password.",
            (Self::Unauthorized, _) => "Your session has expired. Please log in again.",
            (Self::Forbidden, ErrorContext::Login) => "Access denied for this account type.",
            (Self::Forbidden, ErrorContext::Registration) => {
                "Access denied. Admin privileges are required to create this account."
            }
            (Self::Forbidden, ErrorContext::Request) => {
                "You do not have permission to perform this action."
            }
            (Self::Conflict(_), ErrorContext::Request) => {
                "This change conflicts with existing data. Please refresh and try again."
            }
            (Self::Conflict(_), _) => "An account with this email or username already exists.",
            (Self::Network(_), _) => "Network error. Please check your connection and try again.",
            (Self::BadRequest(message), _) if message != DEFAULT_BODY => return message.clone(),
            (Self::BadRequest(_), _) => "Invalid data provided. Please check your inputs.",
            (Self::Http { .. } | Self::Decode(_), ErrorContext::Login) => {
                "Login failed. Please try again."
            }
            (Self::Http { .. } | Self::Decode(_), ErrorContext::Registration) => {
                "Registration failed. Please try again later."
            }
            (Self::Http { .. } | Self::Decode(_), ErrorContext::Request) => {
                "Something went wrong. Please try again."
            }
        };
        fixed.to_owned()
    }
}

impl SessionError {
    #[must_use]
    pub fn user_message(&self, context: ErrorContext) -> String {
        match self {
            Self::Backend(err) => err.user_message(context),
            Self::InvalidRole { expected, .. } => format!(
                "Authentication succeeded but this account is not a {} account.",
                expected.as_str().to_lowercase()
            ),
            Self::MissingToken(_) | Self::Profile(_) => {
                "Login failed. Please try again.".to_owned()
            }
        }
    }
}

const DEFAULT_BODY: &str = "Request failed.";

/// Trim and truncate a response body for display.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        DEFAULT_BODY.to_owned()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
