use axum::routing::{get, put};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/me`.
///
/// ```text
/// GET /          -> me
/// PUT /profile   -> update_me
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::me))
        .route("/profile", put(profile::update_me))
}
