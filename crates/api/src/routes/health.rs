//! Liveness endpoint, mounted outside `/api/v1`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
///
/// 200 while the database answers, 503 with `status: "degraded"` otherwise,
/// so load balancers can take the instance out of rotation.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = match daybook_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            false
        }
    };

    let (code, status) = if db_healthy {
        (StatusCode::OK, HealthStatus::Ok)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, HealthStatus::Degraded)
    };
    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    };
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
