use std::net::SocketAddr;
use std::sync::Arc;

use daybook_core::storage::LocalObjectStore;
use daybook_db::DbPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use daybook_api::config::{ServerConfig, StorageConfig};
use daybook_api::router::build_app_router;
use daybook_api::state::AppState;

const DEFAULT_LOG_FILTER: &str = "daybook_api=debug,daybook_db=info,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = connect_database(&database_url).await;
    let object_store = open_object_store(&config.storage).await;

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        object_store,
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Shut down cleanly");
}

/// Human-readable logs filtered by `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, verify, and migrate. Any failure aborts startup.
async fn connect_database(database_url: &str) -> DbPool {
    let pool = daybook_db::create_pool(database_url)
        .await
        .expect("Failed to connect to database");
    daybook_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    daybook_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready");
    pool
}

async fn open_object_store(storage: &StorageConfig) -> Arc<LocalObjectStore> {
    tokio::fs::create_dir_all(&storage.root)
        .await
        .expect("Failed to create STORAGE_ROOT");
    tracing::info!(
        root = %storage.root.display(),
        base_url = %storage.media_base_url,
        serves_locally = storage.serves_locally(),
        "Object store ready"
    );
    Arc::new(LocalObjectStore::new(
        storage.root.clone(),
        storage.media_base_url.clone(),
    ))
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
