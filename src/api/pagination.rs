//! Bounded limit/offset query parameters with clamping and defaults.

use serde::Deserialize;

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 1000;

/// Raw, untrusted query parameters. Kept as strings so an unparsable value
/// falls back to the default instead of failing extraction. Handlers pull
/// this through `Option<Query<PageQuery>>` so a query string the extractor
/// cannot deserialize at all (duplicate keys and the like) also degrades to
/// the defaults rather than erroring.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// A well-formed pagination window. Construction never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Pagination {
    pub fn from_query(query: &PageQuery) -> Self {
        let limit = parse_or(query.limit.as_deref(), DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = parse_or(query.offset.as_deref(), 0).max(0);
        Self { limit, offset }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { limit: DEFAULT_LIMIT, offset: 0 }
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(default)
}
