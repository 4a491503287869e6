use axum::routing::get;
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// Routes mounted at `/entries`.
///
/// ```text
/// GET  /{entry_id}/comments   -> comment::list
/// POST /{entry_id}/comments   -> comment::create (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{entry_id}/comments",
        get(comment::list).post(comment::create),
    )
}
