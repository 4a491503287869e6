//! Repository for the `entries` table.
//!
//! Writes go through single `INSERT ... ON CONFLICT` statements against the
//! `uq_entries_project_day` constraint, so concurrent writes to the same day
//! converge on one row instead of racing a separate existence check.

use daybook_core::types::DbId;
use sqlx::PgPool;

use crate::models::entry::Entry;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, day_number, content, image_url, created_at, updated_at";

/// Provides day-keyed read/write operations for entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Create the entry for `(project_id, day)` or update it in place.
    ///
    /// An existing entry keeps its `id` and `created_at`; its content is
    /// replaced, and its image only when `image_url` is `Some`.
    pub async fn upsert(
        pool: &PgPool,
        project_id: DbId,
        day: i32,
        content: &str,
        image_url: Option<&str>,
    ) -> Result<Entry, sqlx::Error> {
        let query = format!(
            "INSERT INTO entries (project_id, day_number, content, image_url)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_entries_project_day DO UPDATE SET
                content = EXCLUDED.content,
                image_url = COALESCE(EXCLUDED.image_url, entries.image_url)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(project_id)
            .bind(day)
            .bind(content)
            .bind(image_url)
            .fetch_one(pool)
            .await
    }

    /// Set the image of `(project_id, day)`, creating an empty-text entry if
    /// the day has none yet. Existing content is left untouched.
    pub async fn attach_image(
        pool: &PgPool,
        project_id: DbId,
        day: i32,
        image_url: &str,
    ) -> Result<Entry, sqlx::Error> {
        let query = format!(
            "INSERT INTO entries (project_id, day_number, content, image_url)
             VALUES ($1, $2, '', $3)
             ON CONFLICT ON CONSTRAINT uq_entries_project_day DO UPDATE SET
                image_url = EXCLUDED.image_url
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(project_id)
            .bind(day)
            .bind(image_url)
            .fetch_one(pool)
            .await
    }

    /// Find the entry for a given day of a project.
    pub async fn find_by_day(
        pool: &PgPool,
        project_id: DbId,
        day: i32,
    ) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entries WHERE project_id = $1 AND day_number = $2"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(project_id)
            .bind(day)
            .fetch_optional(pool)
            .await
    }

    /// Find an entry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries WHERE id = $1");
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries of a project, ordered by day ascending.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Entry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entries
             WHERE project_id = $1
             ORDER BY day_number ASC"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Day numbers that have an entry, ascending. Feeds progress calculation.
    pub async fn list_days(pool: &PgPool, project_id: DbId) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            "SELECT day_number FROM entries WHERE project_id = $1 ORDER BY day_number ASC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }
}
