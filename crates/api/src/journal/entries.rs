//! Day-keyed entry reads and writes, including two-phase image uploads.

use std::time::Duration;

use chrono::Utc;
use daybook_core::access::{ensure_readable, ensure_writable, Actor};
use daybook_core::entry::{validate_day, validate_entry_content};
use daybook_core::error::CoreError;
use daybook_core::storage::{entry_image_key, put_with_timeout, ObjectStore};
use daybook_core::types::DbId;
use daybook_db::models::entry::Entry;
use daybook_db::models::project::Project;
use daybook_db::repositories::EntryRepo;
use sqlx::PgPool;

use super::load_project;
use crate::error::AppResult;

/// An uploaded image as received from the client.
#[derive(Debug)]
pub struct ImageUpload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Load a project and check that the actor may write its entries and that
/// `day` is inside its duration, in that order. Returns the day as stored.
async fn writable_day(
    pool: &PgPool,
    actor: Actor,
    project_id: DbId,
    day: i64,
) -> AppResult<(Project, i32)> {
    let project = load_project(pool, project_id).await?;
    ensure_writable(actor, &project)?;
    let day = validate_day(day, project.duration_days)?;
    Ok((project, day))
}

/// All entries of a visible project, ordered by day.
pub async fn list_entries(pool: &PgPool, actor: Actor, project_id: DbId) -> AppResult<Vec<Entry>> {
    let project = load_project(pool, project_id).await?;
    ensure_readable(actor, &project)?;
    Ok(EntryRepo::list_by_project(pool, project.id).await?)
}

/// The entry for one day of a visible project, if written.
pub async fn get_entry(
    pool: &PgPool,
    actor: Actor,
    project_id: DbId,
    day: i64,
) -> AppResult<Option<Entry>> {
    let project = load_project(pool, project_id).await?;
    ensure_readable(actor, &project)?;
    let day = validate_day(day, project.duration_days)?;
    Ok(EntryRepo::find_by_day(pool, project.id, day).await?)
}

/// Create or replace the text of a day's entry.
///
/// Empty text is rejected unless an image URL comes with it. An image
/// already on the entry is kept when `image_url` is `None`.
pub async fn upsert_entry(
    pool: &PgPool,
    actor: Actor,
    project_id: DbId,
    day: i64,
    content: &str,
    image_url: Option<&str>,
) -> AppResult<Entry> {
    let (project, day) = writable_day(pool, actor, project_id, day).await?;
    validate_entry_content(content, image_url.is_some())?;

    let entry = EntryRepo::upsert(pool, project.id, day, content, image_url).await?;
    tracing::info!(project_id, day, entry_id = entry.id, "Entry saved");
    Ok(entry)
}

/// Point a day's entry at an already-stored image, creating an empty-text
/// entry when the day has none.
pub async fn attach_image(
    pool: &PgPool,
    actor: Actor,
    project_id: DbId,
    day: i64,
    image_url: &str,
) -> AppResult<Entry> {
    let (project, day) = writable_day(pool, actor, project_id, day).await?;

    let entry = EntryRepo::attach_image(pool, project.id, day, image_url).await?;
    tracing::info!(project_id, day, entry_id = entry.id, "Entry image attached");
    Ok(entry)
}

/// Store an uploaded image and attach it to a day.
///
/// Access and day checks run before anything is stored. If the store call
/// fails or times out nothing is attached; if attaching fails after a
/// successful store the blob is left orphaned.
pub async fn attach_image_upload(
    pool: &PgPool,
    store: &dyn ObjectStore,
    store_timeout: Duration,
    actor: Actor,
    project_id: DbId,
    day: i64,
    upload: ImageUpload,
) -> AppResult<Entry> {
    let (project, day_number) = writable_day(pool, actor, project_id, day).await?;
    if upload.bytes.is_empty() {
        return Err(CoreError::Validation("Uploaded file is empty".into()).into());
    }

    let key = entry_image_key(project.id, day_number, upload.filename.as_deref(), Utc::now());
    let size = upload.bytes.len();
    let url = put_with_timeout(
        store,
        &key,
        upload.bytes,
        upload.content_type.as_deref(),
        store_timeout,
    )
    .await
    .inspect_err(|e| {
        tracing::warn!(project_id, day, key = %key, error = %e, "Image store failed");
    })?;
    tracing::debug!(project_id, day, key = %key, size, "Image stored");

    attach_image(pool, actor, project_id, day, &url).await
}
