//! Store-side behavior against a real database.
//!
//! These run only when `TRACKBASE_TEST_DATABASE_URL` points at a Postgres
//! database with the schema loaded; otherwise they skip. They cover the
//! paths the lazy-pool suites cannot reach: row round trips and the
//! zero-rows-matched sentinel behind every 404.

mod common;

use anyhow::{Context, Result};
use serde_json::json;

#[tokio::test]
async fn recipe_rows_round_trip_and_missing_rows_are_404() -> Result<()> {
    let Some(app) = common::live_app().await? else {
        eprintln!("{} not set; skipping", common::LIVE_DB_ENV);
        return Ok(());
    };

    let (status, created) = common::send(
        &app,
        "POST",
        "/api/recipes",
        None,
        Some(&json!({ "title": "Overnight oats", "notes": "soak" }).to_string()),
    )
    .await?;
    assert_eq!(status, 201);
    assert_eq!(created["title"], "Overnight oats");
    let id = created["id"].as_str().context("created row carries an id")?.to_string();
    let uri = format!("/api/recipes/{}", id);

    let (status, fetched) = common::send(&app, "GET", &uri, None, None).await?;
    assert_eq!(status, 200);
    assert_eq!(fetched["title"], "Overnight oats");

    let (status, updated) = common::send(
        &app,
        "PUT",
        &uri,
        None,
        Some(&json!({ "notes": "soak overnight" }).to_string()),
    )
    .await?;
    assert_eq!(status, 200);
    assert_eq!(updated["notes"], "soak overnight");
    assert_eq!(updated["title"], "Overnight oats");

    let (status, body) = common::send(&app, "DELETE", &uri, None, None).await?;
    assert_eq!(status, 200);
    assert_eq!(body["deleted"], true);

    // Deleting again matches zero rows: 404, uniformly
    let (status, body) = common::send(&app, "DELETE", &uri, None, None).await?;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Recipe not found");

    // Get and update of the vanished row hit the same sentinel
    let (status, body) = common::send(&app, "GET", &uri, None, None).await?;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Recipe not found");

    let (status, body) = common::send(
        &app,
        "PUT",
        &uri,
        None,
        Some(&json!({ "title": "ghost" }).to_string()),
    )
    .await?;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Recipe not found");

    Ok(())
}
