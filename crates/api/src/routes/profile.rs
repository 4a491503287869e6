use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// GET /{user_id}   -> get_by_user_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{user_id}", get(profile::get_by_user_id))
}
