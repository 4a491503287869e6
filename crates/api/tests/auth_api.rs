//! HTTP-level integration tests for signup, login, token refresh, logout,
//! and the caller's own profile.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, post_json_auth, put_json_auth, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_signup_returns_tokens_and_creates_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "email": "Ada@Example.com", "password": TEST_PASSWORD });
    let response = post_json(app.clone(), "/api/v1/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["expires_in"], 900);
    assert_eq!(json["user"]["email"], "ada@example.com");
    // Username defaults to the email; no display name yet.
    assert_eq!(json["user"]["display_name"], "ada@example.com");

    let user_id = json["user"]["id"].as_i64().unwrap();
    let response = get(app, &format!("/api/v1/profiles/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["username"], "ada@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_signup_duplicate_email_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    common::signup(&app, "ada@example.com", None).await;

    let body = json!({ "email": "ada@example.com", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_signup_rejects_short_password_and_bad_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/signup",
        json!({ "email": "ada@example.com", "password": "short" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json(
        app,
        "/api/v1/auth/signup",
        json!({ "email": "not-an-email", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login / refresh / logout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success_and_wrong_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = common::signup(&app, "ada@example.com", Some("Ada")).await;

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "email": "ADA@example.com", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["display_name"], "Ada");

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "email": "ada@example.com", "password": "wrong-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "nobody@example.com", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_rotates_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "email": "ada@example.com", "password": TEST_PASSWORD });
    let signup = body_json(post_json(app.clone(), "/api/v1/auth/signup", body).await).await;
    let refresh_token = signup["refresh_token"].as_str().unwrap().to_string();

    let response = post_json(
        app.clone(),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let rotated = body_json(response).await;
    assert_ne!(rotated["refresh_token"], signup["refresh_token"]);

    // The old token was consumed by the rotation.
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_revokes_refresh_tokens(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "email": "ada@example.com", "password": TEST_PASSWORD });
    let signup = body_json(post_json(app.clone(), "/api/v1/auth/signup", body).await).await;
    let access = signup["access_token"].as_str().unwrap();

    let response = post_json_auth(app.clone(), "/api/v1/auth/logout", json!({}), access).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({ "refresh_token": signup["refresh_token"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/auth/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Own profile
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_lists_profile_and_projects(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = common::signup(&app, "ada@example.com", None).await;
    let body = json!({ "title": "Private one", "is_public": false });
    common::create_project(&app, &user.token, body).await;

    let response = get_auth(app.clone(), "/api/v1/me", &user.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["id"], user.id);
    assert!(json["user"].get("password_hash").is_none());
    assert_eq!(json["profile"]["username"], "ada@example.com");
    assert_eq!(json["projects"].as_array().unwrap().len(), 1);

    let response = get(app, "/api/v1/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_own_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = common::signup(&app, "ada@example.com", None).await;

    let response = put_json_auth(
        app.clone(),
        "/api/v1/me/profile",
        json!({ "display_name": "  Ada L.  ", "bio": "Writes every day" }),
        &user.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["display_name"], "Ada L.");
    assert_eq!(json["bio"], "Writes every day");

    let too_long = "x".repeat(101);
    let response = put_json_auth(
        app,
        "/api/v1/me/profile",
        json!({ "display_name": too_long }),
        &user.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_listing_ignores_authorization_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/projects/public", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_profile_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/profiles/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
