//! Protective boundary: a handler panic must still produce a well-formed
//! JSON error response, never a bare transport failure.

use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

type PanicPayload = Box<dyn std::any::Any + Send + 'static>;

pub fn catch_panic_layer() -> CatchPanicLayer<fn(PanicPayload) -> Response<Body>> {
    CatchPanicLayer::custom(handle_panic as fn(PanicPayload) -> Response<Body>)
}

fn handle_panic(err: PanicPayload) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Internal server error".to_string()
    };
    tracing::error!("handler panicked: {}", message);

    let body = json!({ "error": message }).to_string();
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}
