//! Shopping list items.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};

use crate::api::pagination::PageQuery;
use crate::handlers::ops::{self, OpResult};
use crate::resources::SHOPPING_ITEMS;
use crate::server::AppState;

pub async fn list(State(state): State<AppState>, query: Option<Query<PageQuery>>) -> OpResult {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    ops::list(&state.db, &SHOPPING_ITEMS, &query).await
}

pub async fn create(State(state): State<AppState>, body: Bytes) -> OpResult {
    ops::create(&state.db, &SHOPPING_ITEMS, &body, None).await
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::get(&state.db, &SHOPPING_ITEMS, &id).await
}

pub async fn update(State(state): State<AppState>, Path(id): Path<String>, body: Bytes) -> OpResult {
    ops::update(&state.db, &SHOPPING_ITEMS, &id, &body).await
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::delete(&state.db, &SHOPPING_ITEMS, &id).await
}
