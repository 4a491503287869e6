pub mod auth;
pub mod entry;
pub mod health;
pub mod me;
pub mod profile;
pub mod project;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                                     signup (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /me                                              own account, profile, projects
/// /me/profile                                      update own profile (PUT)
/// /profiles/{user_id}                              public profile
///
/// /projects                                        create (POST)
/// /projects/mine                                   own projects
/// /projects/public                                 public projects
/// /projects/{id}                                   get (optional auth), update (owner)
/// /projects/{id}/progress                          progress (optional auth)
/// /projects/{id}/entries                           list (optional auth)
/// /projects/{id}/entries/{day}                     get (optional auth), upsert (owner)
/// /projects/{id}/entries/{day}/image               upload image (owner, multipart)
///
/// /entries/{entry_id}/comments                     list (optional auth), post (auth)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/me", me::router())
        .nest("/profiles", profile::router())
        .nest(
            "/projects",
            project::router(config.storage.max_upload_bytes),
        )
        .nest("/entries", entry::router())
}
