//! Comment entity model and DTOs.

use daybook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub entry_id: DbId,
    pub author_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

/// A comment with its author's display name resolved from `profiles`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentWithAuthor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub comment: Comment,
    pub author_name: String,
}

/// DTO for posting a comment. The author comes from the session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub content: String,
}
