//! Object storage for entry images.
//!
//! Uploads are a two-step operation: bytes go to an [`ObjectStore`] first,
//! and only the returned URL is later associated with an entry. If the
//! second step never happens the blob is orphaned, which is acceptable; an
//! entry never points at a blob that was not stored.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default upper bound for a single object store call.
pub const DEFAULT_STORAGE_TIMEOUT_SECS: u64 = 10;

/// Extension used when the uploaded filename has none.
const FALLBACK_EXTENSION: &str = "bin";

/// Longest extension kept from an uploaded filename.
const MAX_EXTENSION_LENGTH: usize = 8;

/// Hex characters of randomness in an image key.
const KEY_NONCE_LENGTH: usize = 12;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Object store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid object key '{0}'")]
    InvalidKey(String),

    #[error("Object store did not respond within {0:?}")]
    Timeout(Duration),
}

impl From<StorageError> for CoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidKey(key) => {
                CoreError::Internal(format!("Invalid object key '{key}'"))
            }
            other => CoreError::StorageUnavailable(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// A place to put binary uploads that hands back a retrievable URL.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key` and return the URL they can be fetched from.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, StorageError>;
}

/// Call [`ObjectStore::put`] and give up after `timeout`.
pub async fn put_with_timeout(
    store: &dyn ObjectStore,
    key: &str,
    bytes: Vec<u8>,
    content_type: Option<&str>,
    timeout: Duration,
) -> Result<String, StorageError> {
    match tokio::time::timeout(timeout, store.put(key, bytes, content_type)).await {
        Ok(result) => result,
        Err(_) => Err(StorageError::Timeout(timeout)),
    }
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Build the object key for a day's image:
/// `{project_id}/{day}-{millis}-{nonce}.{ext}`.
///
/// The random nonce keeps two uploads for the same day from overwriting
/// each other, even within one millisecond.
pub fn entry_image_key(
    project_id: DbId,
    day: i32,
    filename: Option<&str>,
    now: Timestamp,
) -> String {
    let ext = filename
        .and_then(file_extension)
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string());
    let nonce = Uuid::new_v4().simple().to_string();
    format!(
        "{project_id}/{day}-{}-{}.{ext}",
        now.timestamp_millis(),
        &nonce[..KEY_NONCE_LENGTH]
    )
}

/// Lowercased extension of `filename`, if it has a sane one.
fn file_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_lowercase();
    let sane = !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LENGTH
        && ext.chars().all(|c| c.is_ascii_alphanumeric());
    sane.then_some(ext)
}

/// Reject keys that are empty, absolute, or escape the store root.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let path = Path::new(key);
    let ok = !key.is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
    if ok {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

fn join_url(base_url: &str, key: &str) -> String {
    format!("{}/{key}", base_url.trim_end_matches('/'))
}

// ---------------------------------------------------------------------------
// Local filesystem store
// ---------------------------------------------------------------------------

/// Stores objects as files under `root`; URLs are `{base_url}/{key}`.
///
/// The API server serves `root` at the path given by `base_url`.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
    base_url: String,
}

impl LocalObjectStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: Option<&str>,
    ) -> Result<String, StorageError> {
        validate_key(key)?;
        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &bytes).await?;
        Ok(join_url(&self.base_url, key))
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Keeps objects in memory. Used by tests and local experiments.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    base_url: String,
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryObjectStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            objects: Mutex::default(),
        }
    }

    /// Bytes stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: Option<&str>,
    ) -> Result<String, StorageError> {
        validate_key(key)?;
        self.objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), bytes);
        Ok(join_url(&self.base_url, key))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
