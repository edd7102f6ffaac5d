use std::sync::Arc;

use anyhow::Context;

use trackbase::config::AppConfig;
use trackbase::database::Db;
use trackbase::resources::{SortOrder, WORKOUT_SESSIONS};
use trackbase::server::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, APP_API_KEY, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    if config.database.url.is_empty() {
        anyhow::bail!("DATABASE_URL is not set");
    }
    if config.auth.api_key.is_none() {
        tracing::warn!("APP_API_KEY not set: data routes are open (dev mode)");
    }

    let db = Db::connect(&config.database).await.context("failed to connect to database")?;
    let sessions_order = pin_sessions_order(&db).await?;

    let port = config.server.port;
    let state = AppState { config: Arc::new(config), db, sessions_order };

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("TrackBase API listening on http://{}", bind_addr);
    axum::serve(listener, app(state)).await.context("server")?;
    Ok(())
}

/// Pin the workout-session sort key for the process lifetime.
///
/// Older deployments of the schema lack `session_date`; probing once at
/// startup replaces the legacy per-request fallback query.
async fn pin_sessions_order(db: &Db) -> anyhow::Result<SortOrder> {
    let preferred = WORKOUT_SESSIONS
        .order
        .context("workout sessions descriptor has no sort key")?;
    if db
        .has_column(WORKOUT_SESSIONS.table, preferred.column)
        .await
        .context("failed to probe workout_sessions schema")?
    {
        Ok(preferred)
    } else {
        tracing::warn!(
            "workout_sessions.{} missing; listing by created_at",
            preferred.column
        );
        Ok(SortOrder { column: "created_at", ascending: false })
    }
}
