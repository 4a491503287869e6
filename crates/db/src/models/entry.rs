//! Day-entry entity model and DTOs.

use daybook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An entry row from the `entries` table. Unique per `(project_id, day_number)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Entry {
    pub id: DbId,
    pub project_id: DbId,
    pub day_number: i32,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for writing a day's entry.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertEntry {
    #[serde(default)]
    pub content: String,
}
