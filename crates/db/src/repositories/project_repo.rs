//! Repository for the `projects` table.

use daybook_core::profile::ANONYMOUS_DISPLAY_NAME;
use daybook_core::project::DEFAULT_DURATION_DAYS;
use daybook_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, PublicProject, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, description, duration_days, is_public, \
                       start_date, created_at, updated_at";

/// The same columns qualified for queries that join `profiles`.
const JOINED_COLUMNS: &str = "p.id, p.owner_id, p.title, p.description, p.duration_days, \
                              p.is_public, p.start_date, p.created_at, p.updated_at";

/// Provides create/read/update operations for projects. Projects are never
/// deleted.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project owned by `owner_id`, returning the created row.
    ///
    /// Missing optional fields default to a 7-day public project starting
    /// today. Callers validate the input first.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (owner_id, title, description, duration_days, is_public, start_date)
             VALUES ($1, $2, $3, COALESCE($4, $7), COALESCE($5, true), COALESCE($6, CURRENT_DATE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration_days)
            .bind(input.is_public)
            .bind(input.start_date)
            .bind(DEFAULT_DURATION_DAYS)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID, regardless of visibility.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's projects, most recently created first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE owner_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// List every public project with its owner's name, most recent first.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<PublicProject>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS},
                    COALESCE(NULLIF(btrim(pr.display_name), ''), pr.username, $1) AS owner_name
             FROM projects p
             LEFT JOIN profiles pr ON pr.user_id = p.owner_id
             WHERE p.is_public = true
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, PublicProject>(&query)
            .bind(ANONYMOUS_DISPLAY_NAME)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied; an
    /// empty description clears it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = CASE WHEN $3::text IS NULL THEN description ELSE NULLIF($3, '') END,
                is_public = COALESCE($4, is_public)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.is_public)
            .fetch_optional(pool)
            .await
    }
}
