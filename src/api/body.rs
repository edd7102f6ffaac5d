//! Request envelope parsing: JSON bodies and path identifiers.
//!
//! Both checks are terminal: a failure short-circuits the handler with a
//! 400 before any store call is attempted.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::ApiError;

/// Decode a request body as a JSON object.
///
/// Takes raw bytes so a non-UTF-8 body lands here instead of being
/// rejected upstream with a plain-text response. Any decode failure, and
/// any body that is valid JSON but not an object, yields the fixed
/// `Invalid JSON body` message.
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ApiError::bad_request("Invalid JSON body")),
    }
}

/// Validate a path identifier against the UUID textual shape and parse it.
///
/// Strict 8-4-4-4-12 form only: 36 chars, dashes at positions 8/13/18/23,
/// case-insensitive hex elsewhere. `Uuid::parse_str` alone is too lenient
/// here (it also accepts un-hyphenated and urn forms).
pub fn validate_id(id: &str) -> Result<Uuid, ApiError> {
    if is_uuid_shaped(id) {
        if let Ok(uuid) = Uuid::parse_str(id) {
            return Ok(uuid);
        }
    }
    Err(ApiError::bad_request("Invalid id format — expected UUID"))
}

fn is_uuid_shaped(s: &str) -> bool {
    if s.len() != 36 {
        return false;
    }
    s.bytes().enumerate().all(|(i, b)| match i {
        8 | 13 | 18 | 23 => b == b'-',
        _ => b.is_ascii_hexdigit(),
    })
}
