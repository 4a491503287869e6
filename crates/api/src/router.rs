//! Application router. `main.rs` and the integration tests both build the
//! app through [`build_app_router`], so tests exercise the real middleware.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{ServerConfig, StorageConfig};
use crate::routes;
use crate::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Routes, media files, and the middleware stack, with state attached.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes(config));
    let app = mount_media(app, &config.storage);
    with_middleware(app, config).with_state(state)
}

/// Serve the local object store's directory when images are addressed by
/// a path on this host.
fn mount_media(app: Router<AppState>, storage: &StorageConfig) -> Router<AppState> {
    if storage.serves_locally() {
        app.nest_service(&storage.media_base_url, ServeDir::new(&storage.root))
    } else {
        app
    }
}

/// Layers, outermost last: CORS, request id, tracing, id propagation,
/// timeout, panic recovery.
fn with_middleware(app: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let timeout = Duration::from_secs(config.request_timeout_secs);

    app.layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
}

/// CORS for the configured origins. Entries are written with PUT, so it is
/// allowed alongside GET and POST.
///
/// # Panics
///
/// Panics on an origin that is not a valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
