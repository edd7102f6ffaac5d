pub mod auth;
pub mod panic;

pub use auth::require_api_key;
pub use panic::catch_panic_layer;
