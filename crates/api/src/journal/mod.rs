//! Journal operations: projects, day entries, and comment threads.
//!
//! Each operation takes the acting [`Actor`](daybook_core::access::Actor)
//! explicitly, loads the project it touches, applies the access rules from
//! `daybook_core::access`, validates input, and only then writes. Handlers
//! stay thin and call into these functions.

pub mod comments;
pub mod entries;
pub mod projects;

use daybook_core::error::CoreError;
use daybook_core::types::DbId;
use daybook_db::models::project::Project;
use daybook_db::repositories::ProjectRepo;
use sqlx::PgPool;

use crate::error::AppResult;

/// Load a project regardless of who is asking. Callers apply the access
/// rules.
pub(crate) async fn load_project(pool: &PgPool, project_id: DbId) -> AppResult<Project> {
    let project = ProjectRepo::find_by_id(pool, project_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })?;
    Ok(project)
}
