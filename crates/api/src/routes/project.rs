//! Route definitions for the `/projects` resource.
//!
//! Day entries are nested under `/projects/{id}/entries`.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{entry, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// POST   /                              -> create
/// GET    /mine                          -> list_mine
/// GET    /public                        -> list_public
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// GET    /{id}/progress                 -> progress
///
/// GET    /{id}/entries                  -> entry::list
/// GET    /{id}/entries/{day}            -> entry::get_by_day
/// PUT    /{id}/entries/{day}            -> entry::upsert
/// POST   /{id}/entries/{day}/image      -> entry::upload_image
/// ```
///
/// `max_upload_bytes` caps the request body of the image route.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    let entry_routes = Router::new()
        .route("/", get(entry::list))
        .route("/{day}", get(entry::get_by_day).put(entry::upsert))
        .route(
            "/{day}/image",
            post(entry::upload_image).layer(DefaultBodyLimit::max(max_upload_bytes)),
        );

    Router::new()
        .route("/", post(project::create))
        .route("/mine", get(project::list_mine))
        .route("/public", get(project::list_public))
        .route("/{id}", get(project::get_by_id).put(project::update))
        .route("/{id}/progress", get(project::progress))
        .nest("/{id}/entries", entry_routes)
}
