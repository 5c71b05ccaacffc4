//! Stateless bearer-token inspection.
//!
//! Only the payload segment is read; signatures are the backend's concern.
//! Malformed tokens decode to `None` and are never reported upward.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde_json::{Map, Value};

/// Shape a role claim must have to be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClaimShape {
    /// A non-empty string, or the first string of an array.
    Scalar,
    /// The first string of an array; scalar values are ignored.
    List,
}

/// Role claim names in the order they are consulted.
const ROLE_CLAIMS: [(&str, ClaimShape); 4] = [
    ("roles", ClaimShape::Scalar),
    ("role", ClaimShape::Scalar),
    ("authorities", ClaimShape::List),
    ("scope", ClaimShape::Scalar),
];

/// Decoded payload of a bearer token.
#[derive(Clone, Debug, PartialEq)]
pub struct Claims {
    raw: Map<String, Value>,
}

impl Claims {
    #[must_use]
    pub fn new(raw: Map<String, Value>) -> Self {
        Self { raw }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.raw.get(name)
    }

    /// First usable role claim, unmodified.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        ROLE_CLAIMS
            .iter()
            .find_map(|(name, shape)| self.raw.get(*name).and_then(|value| role_value(value, *shape)))
    }

    /// `exp` in epoch seconds. Missing or non-numeric means the token never expires.
    ///
    /// Fractional values round up: whole-second clocks reach `1000.9` at `1001`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn expiry(&self) -> Option<u64> {
        let Value::Number(exp) = self.raw.get("exp")? else {
            return None;
        };
        exp.as_u64()
            .or_else(|| exp.as_i64().map(|_| 0))
            .or_else(|| exp.as_f64().map(|secs| secs.max(0.0).ceil() as u64))
    }
}

fn role_value(value: &Value, shape: ClaimShape) -> Option<&str> {
    match (value, shape) {
        (Value::String(role), ClaimShape::Scalar) if !role.is_empty() => Some(role),
        (Value::Array(items), _) => items.first().and_then(Value::as_str),
        _ => None,
    }
}

/// Decode the payload segment of a `header.payload.signature` token.
#[must_use]
pub fn decode(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (Some(_), Some(payload), Some(_), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        log::debug!("token: expected three segments");
        return None;
    };

    let Some(bytes) = decode_segment(payload) else {
        log::debug!("token: payload is not base64");
        return None;
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(raw)) => Some(Claims::new(raw)),
        Ok(_) => {
            log::debug!("token: payload is not a JSON object");
            None
        }
        Err(err) => {
            log::debug!("token: payload is not JSON: {err}");
            None
        }
    }
}

/// Accepts base64url or standard base64, padded or not.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    let trimmed = segment.trim_end_matches('=');
    if trimmed.is_empty() {
        return None;
    }
    URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
        .ok()
}

/// Role claim carried by `token`, without normalization.
#[must_use]
pub fn extract_role(token: &str) -> Option<String> {
    decode(token)?.role().map(str::to_owned)
}

/// Whether `token` is past its `exp` at `now_secs`.
///
/// Undecodable tokens and tokens without `exp` are treated as valid.
#[must_use]
pub fn is_expired(token: &str, now_secs: u64) -> bool {
    decode(token)
        .and_then(|claims| claims.expiry())
        .is_some_and(|expiry| now_secs >= expiry)
}
