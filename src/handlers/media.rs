//! Media attachments (videos, images, links).

use axum::body::Bytes;
use axum::extract::{Path, Query, State};

use crate::api::pagination::PageQuery;
use crate::handlers::ops::{self, OpResult};
use crate::resources::MEDIA;
use crate::server::AppState;

pub async fn list(State(state): State<AppState>, query: Option<Query<PageQuery>>) -> OpResult {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    ops::list(&state.db, &MEDIA, &query).await
}

pub async fn create(State(state): State<AppState>, body: Bytes) -> OpResult {
    ops::create(&state.db, &MEDIA, &body, None).await
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::get(&state.db, &MEDIA, &id).await
}

pub async fn update(State(state): State<AppState>, Path(id): Path<String>, body: Bytes) -> OpResult {
    ops::update(&state.db, &MEDIA, &id, &body).await
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::delete(&state.db, &MEDIA, &id).await
}
