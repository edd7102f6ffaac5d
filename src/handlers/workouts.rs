//! Workout sessions, the sets inside a session and set-level media links.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};

use crate::api::pagination::PageQuery;
use crate::handlers::ops::{self, OpResult};
use crate::resources::{Resource, WORKOUT_SESSIONS, WORKOUT_SETS, WORKOUT_SET_MEDIA};
use crate::server::AppState;

/// Session descriptor with the sort key pinned at startup (see
/// `AppState::sessions_order`).
fn sessions(state: &AppState) -> Resource {
    Resource { order: Some(state.sessions_order), ..WORKOUT_SESSIONS }
}

// /api/workout-sessions

pub async fn list_sessions(
    State(state): State<AppState>,
    query: Option<Query<PageQuery>>,
) -> OpResult {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    ops::list(&state.db, &sessions(&state), &query).await
}

pub async fn create_session(State(state): State<AppState>, body: Bytes) -> OpResult {
    ops::create(&state.db, &WORKOUT_SESSIONS, &body, None).await
}

pub async fn get_session(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::get(&state.db, &WORKOUT_SESSIONS, &id).await
}

pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> OpResult {
    ops::update(&state.db, &WORKOUT_SESSIONS, &id, &body).await
}

pub async fn remove_session(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::delete(&state.db, &WORKOUT_SESSIONS, &id).await
}

// /api/workout-sessions/:id/sets and /api/workout-sets/:id

pub async fn list_sets(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Option<Query<PageQuery>>,
) -> OpResult {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    ops::list_scoped(&state.db, &WORKOUT_SETS, &id, &query).await
}

pub async fn create_set(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> OpResult {
    ops::create(&state.db, &WORKOUT_SETS, &body, Some(&id)).await
}

pub async fn get_set(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::get(&state.db, &WORKOUT_SETS, &id).await
}

pub async fn update_set(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> OpResult {
    ops::update(&state.db, &WORKOUT_SETS, &id, &body).await
}

pub async fn remove_set(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::delete(&state.db, &WORKOUT_SETS, &id).await
}

// /api/workout-sets/:id/media and /api/workout-set-media/:id

pub async fn list_set_media(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Option<Query<PageQuery>>,
) -> OpResult {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    ops::list_links(&state.db, &WORKOUT_SET_MEDIA, &id, &query).await
}

pub async fn link_set_media(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> OpResult {
    ops::create(&state.db, &WORKOUT_SET_MEDIA, &body, Some(&id)).await
}

pub async fn unlink_set_media(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::delete(&state.db, &WORKOUT_SET_MEDIA, &id).await
}
