//! Credential check: `x-api-key` header against the configured secret.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::server::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Middleware guarding every data route.
///
/// With no configured key the check is open (dev convenience); otherwise
/// the header must match exactly. Denied requests never reach a handler,
/// so nothing downstream can touch the store.
pub async fn require_api_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    check_api_key(state.config.auth.api_key.as_deref(), &headers)?;
    Ok(next.run(request).await)
}

/// Pure, stateless allow/deny decision.
pub fn check_api_key(expected: Option<&str>, headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(expected) = expected else {
        return Ok(());
    };
    let provided = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if provided == Some(expected) {
        Ok(())
    } else {
        Err(ApiError::unauthorized("Unauthorized: invalid or missing x-api-key"))
    }
}
