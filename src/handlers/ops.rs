//! Generic resource operation executor.
//!
//! Each operation is one linear pipeline: credential check (already done by
//! middleware) → envelope validation → at most one store round trip →
//! response mapping. Per-resource handler modules are thin glue over these
//! functions, parameterized by a `Resource` descriptor.

use axum::{http::StatusCode, Json};
use serde_json::{json, Map, Value};

use crate::api::pagination::{PageQuery, Pagination};
use crate::api::{parse_object, pick_fields, require_fields, resolve_alias, validate_id};
use crate::database::Db;
use crate::error::ApiError;
use crate::resources::Resource;

pub type OpResult = Result<(StatusCode, Json<Value>), ApiError>;

fn ok(body: Value) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(body))
}

/// List: ordered slice of the whole table.
pub async fn list(db: &Db, resource: &Resource, query: &PageQuery) -> OpResult {
    let page = Pagination::from_query(query);
    let rows = db
        .list(resource.table, resource.order, page.limit, page.offset, None)
        .await
        .map_err(|e| ApiError::from_store(e, resource.label))?;
    Ok(ok(Value::Array(rows)))
}

/// List scoped by a parent foreign key (e.g. meals for a day).
pub async fn list_scoped(db: &Db, resource: &Resource, parent_id: &str, query: &PageQuery) -> OpResult {
    let parent = validate_id(parent_id)?;
    let fk = parent_key(resource)?;
    let page = Pagination::from_query(query);
    let rows = db
        .list(resource.table, resource.order, page.limit, page.offset, Some((fk, parent)))
        .await
        .map_err(|e| ApiError::from_store(e, resource.label))?;
    Ok(ok(Value::Array(rows)))
}

/// List junction rows with the joined media embedded.
pub async fn list_links(db: &Db, resource: &Resource, parent_id: &str, query: &PageQuery) -> OpResult {
    let parent = validate_id(parent_id)?;
    let fk = parent_key(resource)?;
    let page = Pagination::from_query(query);
    let rows = db
        .list_links(resource.table, fk, parent, resource.order, page.limit, page.offset)
        .await
        .map_err(|e| ApiError::from_store(e, resource.label))?;
    Ok(ok(Value::Array(rows)))
}

/// Get-by-id.
pub async fn get(db: &Db, resource: &Resource, id: &str) -> OpResult {
    let id = validate_id(id)?;
    let row = db.get(resource.table, id).await.map_err(|e| ApiError::from_store(e, resource.label))?;
    Ok(ok(row))
}

/// Create, optionally scoped under a parent id taken from the path.
pub async fn create(db: &Db, resource: &Resource, body: &[u8], parent_id: Option<&str>) -> OpResult {
    let parent = match parent_id {
        Some(raw) => Some(validate_id(raw)?),
        None => None,
    };
    let mut fields = prepare_fields(resource, body)?;
    require_fields(&fields, resource.required)?;
    if let Some(parent) = parent {
        fields.insert(parent_key(resource)?.to_string(), json!(parent));
    }
    let row =
        db.insert(resource.table, &fields).await.map_err(|e| ApiError::from_store(e, resource.label))?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// Partial update against the resource's allow-list.
pub async fn update(db: &Db, resource: &Resource, id: &str, body: &[u8]) -> OpResult {
    let id = validate_id(id)?;
    let fields = prepare_fields(resource, body)?;
    if fields.is_empty() {
        return Err(ApiError::bad_request("No fields to update"));
    }
    let row = db
        .update(resource.table, id, &fields)
        .await
        .map_err(|e| ApiError::from_store(e, resource.label))?;
    Ok(ok(row))
}

/// Delete-by-id. Deleting an absent row is a 404, uniformly.
pub async fn delete(db: &Db, resource: &Resource, id: &str) -> OpResult {
    let id = validate_id(id)?;
    db.delete(resource.table, id).await.map_err(|e| ApiError::from_store(e, resource.label))?;
    Ok(ok(json!({ "deleted": true })))
}

/// Parse the body, resolve any legacy alias and keep only allow-listed
/// fields. Unknown keys are dropped silently; nothing outside the
/// allow-list can ever reach a write.
fn prepare_fields(resource: &Resource, body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    let mut parsed = parse_object(body)?;
    if let Some((canonical, alias)) = resource.alias {
        resolve_alias(&mut parsed, canonical, alias);
    }
    let (fields, _) = pick_fields(&parsed, resource.writable);
    Ok(fields)
}

fn parent_key(resource: &Resource) -> Result<&'static str, ApiError> {
    resource.parent_key.ok_or_else(|| {
        ApiError::internal(format!("{} is not a parent-scoped resource", resource.table))
    })
}
