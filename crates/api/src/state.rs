use std::sync::Arc;

use daybook_core::storage::ObjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and everything else is
/// behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: daybook_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Destination for entry image uploads.
    pub object_store: Arc<dyn ObjectStore>,
}
