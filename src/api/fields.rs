//! Field-level body handling: the partial-update selector, required-field
//! checks and alias resolution.

use serde_json::{Map, Value};

use crate::error::ApiError;

/// Extract the allow-listed fields present in `source`.
///
/// A key counts as present when it exists in the source object, whatever
/// its value; an explicit JSON `null` is kept so callers can clear a
/// column. Unknown keys are dropped. The boolean reports whether anything
/// survived; callers must treat an empty result as an error rather than
/// performing a no-op write.
pub fn pick_fields(source: &Map<String, Value>, allowed: &[&str]) -> (Map<String, Value>, bool) {
    let mut picked = Map::new();
    for key in allowed {
        if let Some(value) = source.get(*key) {
            picked.insert((*key).to_string(), value.clone());
        }
    }
    let has_fields = !picked.is_empty();
    (picked, has_fields)
}

/// Check that every required field is present and non-empty.
///
/// Missing, JSON `null` and empty-string values all count as absent, which
/// matches the loose truthiness the web client relies on.
pub fn require_fields(source: &Map<String, Value>, required: &[&str]) -> Result<(), ApiError> {
    for field in required {
        let present = match source.get(*field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        };
        if !present {
            return Err(ApiError::bad_request(format!("{} is required", field)));
        }
    }
    Ok(())
}

/// Resolve a legacy alias key onto its canonical column name.
///
/// If only the alias is present its value moves to the canonical key; when
/// both are present the canonical key wins. The alias key is removed either
/// way so it can never reach a store write.
pub fn resolve_alias(source: &mut Map<String, Value>, canonical: &str, alias: &str) {
    if let Some(value) = source.remove(alias) {
        if !source.contains_key(canonical) {
            source.insert(canonical.to_string(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn picks_intersection_of_present_and_allowed() {
        let source = obj(json!({ "title": "Oats", "notes": null, "id": "x", "bogus": 1 }));
        let (picked, has_fields) = pick_fields(&source, &["title", "notes", "sort_order"]);
        assert!(has_fields);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked.get("title"), Some(&json!("Oats")));
        // explicit null is kept: "clear this field" semantics
        assert_eq!(picked.get("notes"), Some(&Value::Null));
        assert!(picked.get("id").is_none());
    }

    #[test]
    fn empty_intersection_reports_no_fields() {
        let source = obj(json!({ "id": "x", "created_at": "now" }));
        let (picked, has_fields) = pick_fields(&source, &["title", "notes"]);
        assert!(!has_fields);
        assert!(picked.is_empty());

        let (picked, has_fields) = pick_fields(&obj(json!({})), &["title"]);
        assert!(!has_fields);
        assert!(picked.is_empty());
    }

    #[test]
    fn required_rejects_missing_null_and_empty() {
        let err = require_fields(&obj(json!({})), &["title"]).unwrap_err();
        assert_eq!(err.message(), "title is required");

        let err = require_fields(&obj(json!({ "title": null })), &["title"]).unwrap_err();
        assert_eq!(err.message(), "title is required");

        let err = require_fields(&obj(json!({ "title": "" })), &["title"]).unwrap_err();
        assert_eq!(err.message(), "title is required");

        require_fields(&obj(json!({ "title": "Oats" })), &["title"]).unwrap();
        // non-string scalars count as present
        require_fields(&obj(json!({ "sort_order": 0 })), &["sort_order"]).unwrap();
    }

    #[test]
    fn alias_moves_to_canonical_key() {
        let mut source = obj(json!({ "name": "Bench press" }));
        resolve_alias(&mut source, "exercise", "name");
        assert_eq!(source.get("exercise"), Some(&json!("Bench press")));
        assert!(source.get("name").is_none());
    }

    #[test]
    fn canonical_wins_when_both_present() {
        let mut source = obj(json!({ "title": "Push day", "name": "Legacy" }));
        resolve_alias(&mut source, "title", "name");
        assert_eq!(source.get("title"), Some(&json!("Push day")));
        assert!(source.get("name").is_none());
    }
}
