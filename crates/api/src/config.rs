use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use daybook_core::storage::DEFAULT_STORAGE_TIMEOUT_SECS;

use crate::auth::jwt::JwtConfig;

/// Default upload limit for entry images (10 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// Everything except the JWT secret and the database URL has a default
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins, from the comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
    pub storage: StorageConfig,
}

/// Where entry images are written and how they are served.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory the local object store writes into.
    pub root: PathBuf,
    /// URL prefix of stored files. A path (`/media`) means this server
    /// serves `root` itself; an absolute URL points at another host.
    pub media_base_url: String,
    /// Upper bound for one object store call, in seconds.
    pub timeout_secs: u64,
    /// Largest accepted request body on the upload route.
    pub max_upload_bytes: usize,
}

/// Read `name` from the environment, falling back to `default` when unset.
///
/// # Panics
///
/// Panics when the variable is set but does not parse, so a typo in the
/// deployment fails at startup instead of silently using the default.
pub(crate) fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{name}={raw:?} is invalid: {e}")),
        Err(_) => default,
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// See [`JwtConfig::from_env`] and [`StorageConfig::from_env`] for the
    /// nested sections.
    pub fn from_env() -> Self {
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: env_or("PORT", 3000),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            jwt: JwtConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }
}

impl StorageConfig {
    /// Load object store settings from environment variables.
    ///
    /// | Env Var                | Default          |
    /// |------------------------|------------------|
    /// | `STORAGE_ROOT`         | `storage/media`  |
    /// | `MEDIA_BASE_URL`       | `/media`         |
    /// | `STORAGE_TIMEOUT_SECS` | `10`             |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`       |
    pub fn from_env() -> Self {
        Self {
            root: env_or("STORAGE_ROOT", PathBuf::from("storage/media")),
            media_base_url: env_or("MEDIA_BASE_URL", "/media".to_string()),
            timeout_secs: env_or("STORAGE_TIMEOUT_SECS", DEFAULT_STORAGE_TIMEOUT_SECS),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
        }
    }

    /// Whether this process serves stored files itself.
    pub fn serves_locally(&self) -> bool {
        self.media_base_url.starts_with('/') && self.media_base_url.len() > 1
    }
}
