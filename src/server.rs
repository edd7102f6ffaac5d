//! Application state and router assembly.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::database::Db;
use crate::handlers::{auth, diet, media, recipes, shopping, workouts};
use crate::middleware::{catch_panic_layer, require_api_key};
use crate::resources::SortOrder;

/// Shared per-process state, dependency-injected into every handler.
/// No other cross-request state exists; the database is the sole source
/// of truth.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: Db,
    /// Sort key for workout-session listings, pinned once at startup.
    pub sessions_order: SortOrder,
}

pub fn app(state: AppState) -> Router {
    let data = Router::new()
        // Recipes, ingredients, recipe-media links
        .route("/api/recipes", get(recipes::list).post(recipes::create))
        .route(
            "/api/recipes/:id",
            get(recipes::get).put(recipes::update).delete(recipes::remove),
        )
        .route(
            "/api/recipes/:id/ingredients",
            get(recipes::list_ingredients).post(recipes::create_ingredient),
        )
        .route(
            "/api/recipe-ingredients/:id",
            put(recipes::update_ingredient).delete(recipes::remove_ingredient),
        )
        .route("/api/recipes/:id/media", get(recipes::list_media).post(recipes::link_media))
        .route("/api/recipe-media/:id", delete(recipes::unlink_media))
        // Media library
        .route("/api/media", get(media::list).post(media::create))
        .route("/api/media/:id", get(media::get).put(media::update).delete(media::remove))
        // Shopping list
        .route("/api/shopping-items", get(shopping::list).post(shopping::create))
        .route(
            "/api/shopping-items/:id",
            get(shopping::get).put(shopping::update).delete(shopping::remove),
        )
        // Diet plan
        .route("/api/diet-days", get(diet::list_days).post(diet::create_day))
        .route(
            "/api/diet-days/:id",
            get(diet::get_day).put(diet::update_day).delete(diet::remove_day),
        )
        .route("/api/diet-days/:id/meals", get(diet::list_meals).post(diet::create_meal))
        .route(
            "/api/diet-meals/:id",
            get(diet::get_meal).put(diet::update_meal).delete(diet::remove_meal),
        )
        // Workouts
        .route(
            "/api/workout-sessions",
            get(workouts::list_sessions).post(workouts::create_session),
        )
        .route(
            "/api/workout-sessions/:id",
            get(workouts::get_session)
                .put(workouts::update_session)
                .delete(workouts::remove_session),
        )
        .route(
            "/api/workout-sessions/:id/sets",
            get(workouts::list_sets).post(workouts::create_set),
        )
        .route(
            "/api/workout-sets/:id",
            get(workouts::get_set).put(workouts::update_set).delete(workouts::remove_set),
        )
        .route(
            "/api/workout-sets/:id/media",
            get(workouts::list_set_media).post(workouts::link_set_media),
        )
        .route("/api/workout-set-media/:id", delete(workouts::unlink_set_media))
        // Credential check on every data route
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/auth/login", post(auth::login))
        .merge(data)
        // Global middleware
        .layer(catch_panic_layer())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "name": "TrackBase API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health (public)",
            "login": "/api/auth/login (public - key acquisition)",
            "recipes": "/api/recipes[/:id][/ingredients|/media]",
            "media": "/api/media[/:id]",
            "shopping": "/api/shopping-items[/:id]",
            "diet": "/api/diet-days[/:id][/meals], /api/diet-meals/:id",
            "workouts": "/api/workout-sessions[/:id][/sets], /api/workout-sets/:id[/media]",
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "timestamp": now, "database": "ok" })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string(),
            })),
        ),
    }
}
