//! Project directory: creation, listing, lookup, and metadata updates.

use daybook_core::access::{ensure_readable, ensure_writable, Actor};
use daybook_core::error::CoreError;
use daybook_core::progress::Progress;
use daybook_core::project::{
    normalize_description, validate_duration, validate_title, DEFAULT_DURATION_DAYS,
};
use daybook_core::types::DbId;
use daybook_db::models::project::{CreateProject, Project, PublicProject, UpdateProject};
use daybook_db::repositories::{EntryRepo, ProfileRepo, ProjectRepo};
use serde::Serialize;
use sqlx::PgPool;

use super::load_project;
use crate::error::AppResult;

/// A project as shown on its own page: the row, its owner's name, and the
/// derived progress.
#[derive(Debug, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub owner_name: String,
    pub progress: Progress,
}

fn require_user(actor: Actor) -> Result<DbId, CoreError> {
    actor
        .user_id()
        .ok_or_else(|| CoreError::Unauthorized("You must be signed in".into()))
}

/// Create a project owned by the actor.
///
/// Title is trimmed, a blank description is dropped, and the duration
/// defaults to one week.
pub async fn create_project(
    pool: &PgPool,
    actor: Actor,
    input: &CreateProject,
) -> AppResult<Project> {
    let owner_id = require_user(actor)?;
    let title = validate_title(&input.title)?;
    let duration_days = input.duration_days.unwrap_or(DEFAULT_DURATION_DAYS);
    validate_duration(duration_days)?;
    let description = normalize_description(input.description.as_deref())?;

    let normalized = CreateProject {
        title,
        description,
        duration_days: Some(duration_days),
        is_public: input.is_public,
        start_date: input.start_date,
    };
    let project = ProjectRepo::create(pool, owner_id, &normalized).await?;

    tracing::info!(
        project_id = project.id,
        user_id = owner_id,
        duration_days,
        is_public = project.is_public,
        "Project created"
    );
    Ok(project)
}

/// The actor's own projects, newest first.
pub async fn list_owned(pool: &PgPool, actor: Actor) -> AppResult<Vec<Project>> {
    let owner_id = require_user(actor)?;
    Ok(ProjectRepo::list_by_owner(pool, owner_id).await?)
}

/// Every public project, newest first, with owner names.
pub async fn list_public(pool: &PgPool) -> AppResult<Vec<PublicProject>> {
    Ok(ProjectRepo::list_public(pool).await?)
}

/// Look up a project the actor is allowed to see. Hidden projects are
/// reported as not found.
pub async fn get_project(pool: &PgPool, actor: Actor, project_id: DbId) -> AppResult<Project> {
    let project = load_project(pool, project_id).await?;
    ensure_readable(actor, &project)?;
    Ok(project)
}

/// Progress of a visible project, derived from its entries.
pub async fn progress(pool: &PgPool, actor: Actor, project_id: DbId) -> AppResult<Progress> {
    let project = get_project(pool, actor, project_id).await?;
    progress_of(pool, &project).await
}

/// A visible project with owner name and progress.
pub async fn project_detail(
    pool: &PgPool,
    actor: Actor,
    project_id: DbId,
) -> AppResult<ProjectDetail> {
    let project = get_project(pool, actor, project_id).await?;
    let progress = progress_of(pool, &project).await?;
    let owner_name = ProfileRepo::display_name_of(pool, project.owner_id).await?;
    Ok(ProjectDetail {
        project,
        owner_name,
        progress,
    })
}

/// Change a project's title, description, or visibility. Owner only.
///
/// A blank description clears it.
pub async fn update_project(
    pool: &PgPool,
    actor: Actor,
    project_id: DbId,
    input: &UpdateProject,
) -> AppResult<Project> {
    let project = load_project(pool, project_id).await?;
    ensure_writable(actor, &project)?;

    let title = input.title.as_deref().map(validate_title).transpose()?;
    let description = match input.description.as_deref() {
        Some(text) => Some(normalize_description(Some(text))?.unwrap_or_default()),
        None => None,
    };

    let normalized = UpdateProject {
        title,
        description,
        is_public: input.is_public,
    };
    let updated = ProjectRepo::update(pool, project_id, &normalized)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })?;

    tracing::info!(project_id, is_public = updated.is_public, "Project updated");
    Ok(updated)
}

async fn progress_of(pool: &PgPool, project: &Project) -> AppResult<Progress> {
    let days = EntryRepo::list_days(pool, project.id).await?;
    Ok(Progress::compute(project.duration_days, days))
}
