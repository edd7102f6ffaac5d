//! Envelope validation: every one of these requests must terminate before
//! the store is touched. The test router's pool points at nothing, so any
//! accidental store call would surface as a 500 instead of the asserted 400.

mod common;

use anyhow::Result;
use axum::Router;
use serde_json::json;

const WELL_FORMED: &str = "00000000-0000-0000-0000-000000000000";

fn app() -> Router {
    // Open mode: these tests exercise the stages after the credential check
    common::test_app(None, None)
}

#[tokio::test]
async fn malformed_ids_are_rejected_across_resources() -> Result<()> {
    let app = app();
    let uris = [
        ("GET", "/api/recipes/not-a-uuid"),
        ("PUT", "/api/recipes/123"),
        ("DELETE", "/api/recipes/123e4567-e89b-12d3-a456-42661417400"), // one digit short
        ("GET", "/api/media/xyz"),
        ("GET", "/api/diet-days/xyz"),
        ("PUT", "/api/diet-meals/xyz"),
        ("GET", "/api/shopping-items/xyz"),
        ("GET", "/api/workout-sessions/xyz"),
        ("PUT", "/api/workout-sets/xyz"),
        ("DELETE", "/api/recipe-media/xyz"),
        ("DELETE", "/api/workout-set-media/xyz"),
        // scoped routes validate the parent id the same way
        ("GET", "/api/recipes/xyz/ingredients"),
        ("POST", "/api/diet-days/xyz/meals"),
        ("GET", "/api/workout-sessions/xyz/sets"),
        ("POST", "/api/workout-sets/xyz/media"),
    ];
    for (method, uri) in uris {
        let (status, body) = common::send(&app, method, uri, None, Some("{}")).await?;
        assert_eq!(status, 400, "{} {}", method, uri);
        assert_eq!(body["error"], "Invalid id format — expected UUID", "{} {}", method, uri);
    }
    Ok(())
}

#[tokio::test]
async fn malformed_json_bodies_are_rejected() -> Result<()> {
    let app = app();
    for (method, uri) in [
        ("POST", "/api/recipes"),
        ("POST", "/api/media"),
        ("POST", "/api/shopping-items"),
        ("POST", "/api/diet-days"),
        ("POST", "/api/workout-sessions"),
        ("PUT", &format!("/api/recipes/{}", WELL_FORMED)[..]),
        ("PUT", &format!("/api/media/{}", WELL_FORMED)[..]),
    ] {
        for bad in ["{not json", "", "[1,2,3]", "\"a string\""] {
            let (status, body) = common::send(&app, method, uri, None, Some(bad)).await?;
            assert_eq!(status, 400, "{} {} body {:?}", method, uri, bad);
            assert_eq!(body["error"], "Invalid JSON body");
        }
    }
    Ok(())
}

#[tokio::test]
async fn non_utf8_bodies_get_the_json_envelope() -> Result<()> {
    let app = app();
    // Bodies bypass the framework's string decoding, so byte soup reaches
    // the JSON parser and comes back as the standard envelope rather than
    // a plain-text rejection.
    let (status, body) =
        common::send_bytes(&app, "POST", "/api/recipes", vec![0xFF, 0xFE, b'{', b'}']).await?;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid JSON body");

    let (status, body) = common::send_bytes(
        &app,
        "PUT",
        &format!("/api/recipes/{}", WELL_FORMED),
        vec![0xFF, 0xFE],
    )
    .await?;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid JSON body");
    Ok(())
}

#[tokio::test]
async fn duplicate_pagination_parameters_fall_back_to_defaults() -> Result<()> {
    let app = app();
    // Pagination parsing never errors: a query string the extractor cannot
    // deserialize degrades to the defaults, so the request proceeds to the
    // store. The absent store makes that a JSON 500, not an extractor 400.
    let (status, body) =
        common::send(&app, "GET", "/api/recipes?limit=1&limit=2", None, None).await?;
    assert_eq!(status, 500);
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn id_validation_runs_before_body_parsing() -> Result<()> {
    let app = app();
    let (status, body) = common::send(&app, "PUT", "/api/recipes/bogus", None, Some("{oops")).await?;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid id format — expected UUID");
    Ok(())
}

#[tokio::test]
async fn updates_with_no_recognized_fields_are_rejected() -> Result<()> {
    let app = app();
    let empties = [
        json!({}).to_string(),
        // unknown keys are dropped by the allow-list
        json!({ "bogus": 1, "id": "evil", "created_at": "evil" }).to_string(),
    ];
    for uri in [
        format!("/api/recipes/{}", WELL_FORMED),
        format!("/api/media/{}", WELL_FORMED),
        format!("/api/shopping-items/{}", WELL_FORMED),
        format!("/api/diet-days/{}", WELL_FORMED),
        format!("/api/diet-meals/{}", WELL_FORMED),
        format!("/api/workout-sessions/{}", WELL_FORMED),
        format!("/api/workout-sets/{}", WELL_FORMED),
        format!("/api/recipe-ingredients/{}", WELL_FORMED),
    ] {
        for body in &empties {
            let (status, response) = common::send(&app, "PUT", &uri, None, Some(body)).await?;
            assert_eq!(status, 400, "{}", uri);
            assert_eq!(response["error"], "No fields to update", "{}", uri);
        }
    }
    Ok(())
}

#[tokio::test]
async fn creates_require_their_required_fields() -> Result<()> {
    let app = app();
    let cases = [
        ("/api/recipes".to_string(), json!({ "notes": "tasty" }), "title is required"),
        ("/api/media".to_string(), json!({ "title": "clip" }), "url is required"),
        ("/api/shopping-items".to_string(), json!({ "qty_text": "12" }), "name is required"),
        ("/api/diet-days".to_string(), json!({ "sort_order": 1 }), "label is required"),
        (
            format!("/api/diet-days/{}/meals", WELL_FORMED),
            json!({ "title": "Oats" }),
            "meal_type is required",
        ),
        (
            format!("/api/diet-days/{}/meals", WELL_FORMED),
            json!({ "meal_type": "breakfast" }),
            "title is required",
        ),
        ("/api/workout-sessions".to_string(), json!({ "notes": "pr day" }), "title is required"),
        (
            format!("/api/workout-sessions/{}/sets", WELL_FORMED),
            json!({ "reps": "8-12" }),
            "exercise is required",
        ),
        (format!("/api/recipes/{}/ingredients", WELL_FORMED), json!({}), "name is required"),
        (format!("/api/recipes/{}/media", WELL_FORMED), json!({}), "media_id is required"),
        (format!("/api/workout-sets/{}/media", WELL_FORMED), json!({}), "media_id is required"),
    ];
    for (uri, body, expected) in cases {
        let (status, response) =
            common::send(&app, "POST", &uri, None, Some(&body.to_string())).await?;
        assert_eq!(status, 400, "{}", uri);
        assert_eq!(response["error"], expected, "{}", uri);
    }
    Ok(())
}

#[tokio::test]
async fn required_fields_reject_null_and_empty_values() -> Result<()> {
    let app = app();
    for body in [json!({ "title": null }), json!({ "title": "" })] {
        let (status, response) =
            common::send(&app, "POST", "/api/recipes", None, Some(&body.to_string())).await?;
        assert_eq!(status, 400);
        assert_eq!(response["error"], "title is required");
    }
    Ok(())
}

#[tokio::test]
async fn session_and_set_aliases_satisfy_the_required_field() -> Result<()> {
    let app = app();

    // `name` resolves onto `title`, so creation proceeds past validation
    // and dies at the absent store instead of failing the required check.
    let (status, _) = common::send(
        &app,
        "POST",
        "/api/workout-sessions",
        None,
        Some(&json!({ "name": "Push day" }).to_string()),
    )
    .await?;
    assert_eq!(status, 500);

    let (status, _) = common::send(
        &app,
        "POST",
        &format!("/api/workout-sessions/{}/sets", WELL_FORMED),
        None,
        Some(&json!({ "name": "Bench press" }).to_string()),
    )
    .await?;
    assert_eq!(status, 500);
    Ok(())
}
