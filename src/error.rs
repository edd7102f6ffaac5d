// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::store::StoreError;

/// HTTP API error with appropriate status codes and client-facing messages.
///
/// The wire format is `{ "error": <message>, "details"?: <diagnostic> }`
/// with a non-2xx status; no endpoint ever reports an error inside a 200.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request: malformed JSON body, malformed UUID, missing
    // required field on create, empty field set on update
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found: store matched zero rows for get/update/delete
    NotFound(String),

    // 500 Internal Server Error
    Internal { message: String, details: Option<Value> },
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Internal { message, .. } => message,
        }
    }

    /// Convert to the JSON error envelope
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Internal { message, details: Some(details) } => {
                json!({ "error": message, "details": details })
            }
            _ => json!({ "error": self.message() }),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal { message: message.into(), details: None }
    }

    /// Map a store error into the API taxonomy.
    ///
    /// The "no row matched" sentinel becomes 404 `"<label> not found"` so
    /// every resource reports not-found consistently; everything else is a
    /// 500 carrying the store's message verbatim plus optional details.
    pub fn from_store(err: StoreError, label: &str) -> Self {
        match err {
            StoreError::NotFound => ApiError::not_found(format!("{} not found", label)),
            StoreError::Query { message, details } => {
                tracing::error!("store error for {}: {}", label, message);
                ApiError::Internal { message, details }
            }
            StoreError::Timeout => {
                tracing::error!("store call timed out for {}", label);
                ApiError::internal("Database query timed out")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
