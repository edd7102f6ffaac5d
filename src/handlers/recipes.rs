//! Recipes, their ingredients and their media links.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};

use crate::api::pagination::PageQuery;
use crate::handlers::ops::{self, OpResult};
use crate::resources::{RECIPES, RECIPE_INGREDIENTS, RECIPE_MEDIA};
use crate::server::AppState;

// /api/recipes

pub async fn list(State(state): State<AppState>, query: Option<Query<PageQuery>>) -> OpResult {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    ops::list(&state.db, &RECIPES, &query).await
}

pub async fn create(State(state): State<AppState>, body: Bytes) -> OpResult {
    ops::create(&state.db, &RECIPES, &body, None).await
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::get(&state.db, &RECIPES, &id).await
}

pub async fn update(State(state): State<AppState>, Path(id): Path<String>, body: Bytes) -> OpResult {
    ops::update(&state.db, &RECIPES, &id, &body).await
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::delete(&state.db, &RECIPES, &id).await
}

// /api/recipes/:id/ingredients and /api/recipe-ingredients/:id

pub async fn list_ingredients(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Option<Query<PageQuery>>,
) -> OpResult {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    ops::list_scoped(&state.db, &RECIPE_INGREDIENTS, &id, &query).await
}

pub async fn create_ingredient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> OpResult {
    ops::create(&state.db, &RECIPE_INGREDIENTS, &body, Some(&id)).await
}

pub async fn update_ingredient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> OpResult {
    ops::update(&state.db, &RECIPE_INGREDIENTS, &id, &body).await
}

pub async fn remove_ingredient(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::delete(&state.db, &RECIPE_INGREDIENTS, &id).await
}

// /api/recipes/:id/media and /api/recipe-media/:id

pub async fn list_media(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Option<Query<PageQuery>>,
) -> OpResult {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    ops::list_links(&state.db, &RECIPE_MEDIA, &id, &query).await
}

pub async fn link_media(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> OpResult {
    ops::create(&state.db, &RECIPE_MEDIA, &body, Some(&id)).await
}

pub async fn unlink_media(State(state): State<AppState>, Path(id): Path<String>) -> OpResult {
    ops::delete(&state.db, &RECIPE_MEDIA, &id).await
}
