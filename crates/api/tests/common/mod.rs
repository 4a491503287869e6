#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use daybook_api::auth::jwt::JwtConfig;
use daybook_api::config::{ServerConfig, StorageConfig};
use daybook_api::router::build_app_router;
use daybook_api::state::AppState;
use daybook_core::storage::{MemoryObjectStore, ObjectStore};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "daybook-integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        storage: StorageConfig {
            root: std::env::temp_dir().join("daybook-test-media"),
            media_base_url: "https://media.test".to_string(),
            timeout_secs: 1,
            max_upload_bytes: 64 * 1024,
        },
    }
}

/// Build the full application router backed by an in-memory object store.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_store(pool, Arc::new(MemoryObjectStore::new("https://media.test")))
}

/// Build the full application router with a caller-supplied object store.
pub fn build_test_app_with_store(pool: PgPool, object_store: Arc<dyn ObjectStore>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        object_store,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, None, Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

/// POST a single-file multipart form under the field name `file`.
pub async fn post_file_auth(
    app: Router,
    uri: &str,
    filename: &str,
    bytes: &[u8],
    token: &str,
) -> Response {
    let boundary = "daybook-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A signed-up user: id and access token.
pub struct TestUser {
    pub id: i64,
    pub token: String,
}

/// Sign up through the API and return the new user's id and access token.
pub async fn signup(app: &Router, email: &str, display_name: Option<&str>) -> TestUser {
    let body = serde_json::json!({
        "email": email,
        "password": TEST_PASSWORD,
        "display_name": display_name,
    });
    let response = post_json(app.clone(), "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    TestUser {
        id: json["user"]["id"].as_i64().unwrap(),
        token: json["access_token"].as_str().unwrap().to_string(),
    }
}

/// Create a project through the API and return its id.
pub async fn create_project(app: &Router, token: &str, body: Value) -> i64 {
    let response = post_json_auth(app.clone(), "/api/v1/projects", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Write a day's entry through the API and return the entry JSON.
pub async fn write_entry(
    app: &Router,
    token: &str,
    project_id: i64,
    day: i32,
    content: &str,
) -> Value {
    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/projects/{project_id}/entries/{day}"),
        serde_json::json!({ "content": content }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}
