//! Refresh-token session model and DTOs.

use daybook_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSession {
    pub id: DbId,
    pub user_id: DbId,
    #[serde(skip_serializing)]
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a session.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
