//! Diet days and the meals planned for each day.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};

use crate::api::pagination::PageQuery;
use crate::handlers::ops::{self, OpResult};
use crate::resources::{DIET_DAYS, DIET_MEALS};
use crate::server::AppState;

// /api/diet-days

pub async fn list_days(
    State(state): State<AppState>,
    query: Option<Query<PageQuery>>,
) -> OpResult {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    ops::list(&state.db, &DIET_DAYS, &query).await
}

pub async fn create_day(State(state): State<AppState>, body: Bytes) -> OpResult {
    ops::create(&state.db, &DIET_DAYS, &body, None).await
}

pub async fn get_day(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::get(&state.db, &DIET_DAYS, &id).await
}

pub async fn update_day(State(state): State<AppState>, Path(id): Path<String>, body: Bytes) -> OpResult {
    ops::update(&state.db, &DIET_DAYS, &id, &body).await
}

pub async fn remove_day(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::delete(&state.db, &DIET_DAYS, &id).await
}

// /api/diet-days/:id/meals and /api/diet-meals/:id

pub async fn list_meals(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Option<Query<PageQuery>>,
) -> OpResult {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    ops::list_scoped(&state.db, &DIET_MEALS, &id, &query).await
}

pub async fn create_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> OpResult {
    ops::create(&state.db, &DIET_MEALS, &body, Some(&id)).await
}

pub async fn get_meal(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::get(&state.db, &DIET_MEALS, &id).await
}

pub async fn update_meal(State(state): State<AppState>, Path(id): Path<String>, body: Bytes) -> OpResult {
    ops::update(&state.db, &DIET_MEALS, &id, &body).await
}

pub async fn remove_meal(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::delete(&state.db, &DIET_MEALS, &id).await
}
