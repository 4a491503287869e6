//! Comment threads on day entries.
//!
//! Reading a thread follows the parent project's visibility. Posting needs a
//! signed-in actor who can see the project; ownership is not required.

use daybook_core::access::{ensure_commentable, ensure_readable, Actor};
use daybook_core::comment::{check_entry_belongs_to, validate_comment};
use daybook_core::error::CoreError;
use daybook_core::types::DbId;
use daybook_db::models::comment::CommentWithAuthor;
use daybook_db::models::entry::Entry;
use daybook_db::models::project::Project;
use daybook_db::repositories::{CommentRepo, EntryRepo};
use sqlx::PgPool;

use super::load_project;
use crate::error::AppResult;

/// Load an entry together with the project it belongs to.
pub async fn load_entry_scope(pool: &PgPool, entry_id: DbId) -> AppResult<(Entry, Project)> {
    let entry = EntryRepo::find_by_id(pool, entry_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Entry",
            id: entry_id,
        })?;
    let project = load_project(pool, entry.project_id).await?;
    Ok((entry, project))
}

/// Comments on an entry, oldest first.
///
/// An entry in a project hidden from the actor is reported as not found.
pub async fn list_comments(
    pool: &PgPool,
    actor: Actor,
    entry: &Entry,
    project: &Project,
) -> AppResult<Vec<CommentWithAuthor>> {
    check_entry_belongs_to(entry.id, entry.project_id, project.id)?;
    ensure_readable(actor, project).map_err(|_| CoreError::NotFound {
        entity: "Entry",
        id: entry.id,
    })?;
    Ok(CommentRepo::list_for_entry(pool, entry.id).await?)
}

/// Append a comment to an entry. The stored text is trimmed.
pub async fn post_comment(
    pool: &PgPool,
    actor: Actor,
    entry: &Entry,
    project: &Project,
    content: &str,
) -> AppResult<CommentWithAuthor> {
    check_entry_belongs_to(entry.id, entry.project_id, project.id)?;
    ensure_commentable(actor, project)?;
    let content = validate_comment(content)?;
    let author_id = actor
        .user_id()
        .ok_or_else(|| CoreError::Unauthorized("You must be signed in".into()))?;

    let comment = CommentRepo::create(pool, entry.id, author_id, &content).await?;
    tracing::info!(
        entry_id = entry.id,
        project_id = project.id,
        user_id = author_id,
        comment_id = comment.comment.id,
        "Comment posted"
    );
    Ok(comment)
}
