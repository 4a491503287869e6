//! HTTP-level integration tests for the project directory and visibility
//! rules.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_applies_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let ada = common::signup(&app, "ada@example.com", None).await;

    let response = common::post_json_auth(
        app,
        "/api/v1/projects",
        json!({ "title": "  Sketch daily  ", "description": "   " }),
        &ada.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Sketch daily");
    assert_eq!(json["duration_days"], 7);
    assert_eq!(json["is_public"], true);
    assert_eq!(json["owner_id"], ada.id);
    assert!(json["description"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_validation(pool: PgPool) {
    let app = common::build_test_app(pool);
    let ada = common::signup(&app, "ada@example.com", None).await;

    let cases = [
        (json!({ "title": "x", "duration_days": 10 }), "INVALID_DURATION"),
        (json!({ "title": "x", "duration_days": 0 }), "INVALID_DURATION"),
        (json!({ "title": "   " }), "INVALID_TITLE"),
        (json!({ "title": "t".repeat(201) }), "INVALID_TITLE"),
    ];
    for (body, code) in cases {
        let response =
            common::post_json_auth(app.clone(), "/api/v1/projects", body, &ada.token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], code);
    }

    let mine = body_json(get_auth(app, "/api/v1/projects/mine", &ada.token).await).await;
    assert!(mine["data"].as_array().unwrap().is_empty(), "nothing was created");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/projects", json!({ "title": "Nope" })).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_private_project_hidden_from_others(pool: PgPool) {
    let app = common::build_test_app(pool);
    let ada = common::signup(&app, "ada@example.com", None).await;
    let bob = common::signup(&app, "bob@example.com", None).await;
    let id = common::create_project(
        &app,
        &ada.token,
        json!({ "title": "Diary", "is_public": false, "duration_days": 14 }),
    )
    .await;
    let uri = format!("/api/v1/projects/{id}");

    let response = get(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app.clone(), &uri, &bob.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, &uri, &ada.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Diary");
    assert_eq!(json["progress"]["total"], 14);
    assert_eq!(json["progress"]["completed"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_project_visible_to_anonymous(pool: PgPool) {
    let app = common::build_test_app(pool);
    let ada = common::signup(&app, "ada@example.com", Some("Ada")).await;
    let id = common::create_project(&app, &ada.token, json!({ "title": "Open book" })).await;

    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["owner_name"], "Ada");
    assert_eq!(json["progress"]["percent"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_token_rejected_on_optional_auth_route(pool: PgPool) {
    let app = common::build_test_app(pool);
    let ada = common::signup(&app, "ada@example.com", None).await;
    let id = common::create_project(&app, &ada.token, json!({ "title": "Open book" })).await;

    let response = get_auth(app, &format!("/api/v1/projects/{id}"), "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_listing_excludes_private(pool: PgPool) {
    let app = common::build_test_app(pool);
    let ada = common::signup(&app, "ada@example.com", Some("Ada")).await;
    let bob = common::signup(&app, "bob@example.com", None).await;
    common::create_project(&app, &ada.token, json!({ "title": "Ada public" })).await;
    common::create_project(&app, &ada.token, json!({ "title": "Ada private", "is_public": false }))
        .await;
    common::create_project(&app, &bob.token, json!({ "title": "Bob public" })).await;

    let json = body_json(get(app.clone(), "/api/v1/projects/public").await).await;
    let listed: Vec<(String, String)> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            (
                p["title"].as_str().unwrap().to_string(),
                p["owner_name"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        listed,
        vec![
            ("Bob public".to_string(), "bob@example.com".to_string()),
            ("Ada public".to_string(), "Ada".to_string()),
        ]
    );

    let mine = body_json(get_auth(app, "/api/v1/projects/mine", &ada.token).await).await;
    assert_eq!(mine["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_owner_updates_metadata(pool: PgPool) {
    let app = common::build_test_app(pool);
    let ada = common::signup(&app, "ada@example.com", None).await;
    let id = common::create_project(
        &app,
        &ada.token,
        json!({ "title": "Draft", "description": "old notes", "duration_days": 21 }),
    )
    .await;
    let uri = format!("/api/v1/projects/{id}");

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({ "title": "Final", "is_public": false }),
        &ada.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Final");
    assert_eq!(json["is_public"], false);
    assert_eq!(json["description"], "old notes");
    assert_eq!(json["duration_days"], 21);

    let response = put_json_auth(app, &uri, json!({ "description": "" }), &ada.token).await;
    assert!(body_json(response).await["description"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_owner_update_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let ada = common::signup(&app, "ada@example.com", None).await;
    let bob = common::signup(&app, "bob@example.com", None).await;
    let id = common::create_project(&app, &ada.token, json!({ "title": "Mine" })).await;

    let response = put_json_auth(
        app,
        &format!("/api/v1/projects/{id}"),
        json!({ "title": "Hijacked" }),
        &bob.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_progress_counts_written_days(pool: PgPool) {
    let app = common::build_test_app(pool);
    let ada = common::signup(&app, "ada@example.com", None).await;
    let id = common::create_project(&app, &ada.token, json!({ "title": "Week" })).await;

    for day in [1, 3, 5] {
        common::write_entry(&app, &ada.token, id, day, "done").await;
    }
    // Rewriting a day does not count twice.
    common::write_entry(&app, &ada.token, id, 3, "done again").await;

    let response = get(app, &format!("/api/v1/projects/{id}/progress")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "completed": 3, "total": 7, "percent": 43 })
    );
}
