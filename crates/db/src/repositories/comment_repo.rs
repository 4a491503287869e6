//! Repository for the `comments` table.
//!
//! Comments are append-only. Listing orders by `(created_at, id)`; the
//! BIGSERIAL id breaks ties between comments created in the same instant.

use daybook_core::profile::ANONYMOUS_DISPLAY_NAME;
use daybook_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::CommentWithAuthor;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, entry_id, author_id, content, created_at";

/// Author name resolution against a `profiles pr` join; `$1` is the fallback.
const AUTHOR_NAME: &str =
    "COALESCE(NULLIF(btrim(pr.display_name), ''), pr.username, $1) AS author_name";

/// Provides append and list operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Append a comment and return it with the author's name resolved.
    pub async fn create(
        pool: &PgPool,
        entry_id: DbId,
        author_id: DbId,
        content: &str,
    ) -> Result<CommentWithAuthor, sqlx::Error> {
        let query = format!(
            "WITH inserted AS (
                INSERT INTO comments (entry_id, author_id, content)
                VALUES ($2, $3, $4)
                RETURNING {COLUMNS}
             )
             SELECT c.id, c.entry_id, c.author_id, c.content, c.created_at, {AUTHOR_NAME}
             FROM inserted c
             LEFT JOIN profiles pr ON pr.user_id = c.author_id"
        );
        sqlx::query_as::<_, CommentWithAuthor>(&query)
            .bind(ANONYMOUS_DISPLAY_NAME)
            .bind(entry_id)
            .bind(author_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// List the comments on an entry, oldest first.
    pub async fn list_for_entry(
        pool: &PgPool,
        entry_id: DbId,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT c.id, c.entry_id, c.author_id, c.content, c.created_at, {AUTHOR_NAME}
             FROM comments c
             LEFT JOIN profiles pr ON pr.user_id = c.author_id
             WHERE c.entry_id = $2
             ORDER BY c.created_at ASC, c.id ASC"
        );
        sqlx::query_as::<_, CommentWithAuthor>(&query)
            .bind(ANONYMOUS_DISPLAY_NAME)
            .bind(entry_id)
            .fetch_all(pool)
            .await
    }
}
