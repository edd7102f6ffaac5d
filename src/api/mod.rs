pub mod body;
pub mod fields;
pub mod pagination;

pub use body::{parse_object, validate_id};
pub use fields::{pick_fields, require_fields, resolve_alias};
pub use pagination::Pagination;
