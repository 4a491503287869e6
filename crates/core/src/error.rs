use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity is absent, or the caller may not see it. Private projects
    /// are reported this way so their existence does not leak.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid day {day}: must be between 1 and {duration_days}")]
    InvalidDay { day: i64, duration_days: i32 },

    #[error("Invalid duration {0}: must be one of 7, 14, 21 or 28 days")]
    InvalidDuration(i32),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Entry content must not be empty unless an image is attached")]
    EmptyEntry,

    #[error("Comment content must not be empty")]
    EmptyComment,

    /// Two referenced entities do not belong together (e.g. an entry
    /// addressed through a project it is not part of).
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An external dependency (database, object store) failed or timed out.
    /// Callers may retry with backoff; the core never retries on its own.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Whether repeating the same call later could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CoreError::StorageUnavailable(_))
    }
}
