//! Handlers for day entries under `/projects/{id}/entries`.

use std::time::Duration;

use axum::extract::{Multipart, Path, State};
use axum::Json;
use daybook_core::types::DbId;
use daybook_db::models::entry::{Entry, UpsertEntry};

use crate::error::{AppError, AppResult};
use crate::journal::entries::{self, ImageUpload};
use crate::middleware::auth::{AuthUser, CurrentActor};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/{id}/entries
pub async fn list(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Entry>>>> {
    let data = entries::list_entries(&state.pool, actor, project_id).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects/{id}/entries/{day}
///
/// `data` is `null` for a day with nothing written yet.
pub async fn get_by_day(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path((project_id, day)): Path<(DbId, i64)>,
) -> AppResult<Json<DataResponse<Option<Entry>>>> {
    let data = entries::get_entry(&state.pool, actor, project_id, day).await?;
    Ok(Json(DataResponse { data }))
}

/// PUT /api/v1/projects/{id}/entries/{day}
pub async fn upsert(
    State(state): State<AppState>,
    user: AuthUser,
    Path((project_id, day)): Path<(DbId, i64)>,
    Json(input): Json<UpsertEntry>,
) -> AppResult<Json<Entry>> {
    let entry =
        entries::upsert_entry(&state.pool, user.actor(), project_id, day, &input.content, None)
            .await?;
    Ok(Json(entry))
}

/// POST /api/v1/projects/{id}/entries/{day}/image
///
/// Accepts a multipart form with a required `file` field. The file is
/// stored first and then attached to the day's entry.
pub async fn upload_image(
    State(state): State<AppState>,
    user: AuthUser,
    Path((project_id, day)): Path<(DbId, i64)>,
    mut multipart: Multipart,
) -> AppResult<Json<Entry>> {
    let mut upload: Option<ImageUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue; // ignore unknown fields
        }
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some(ImageUpload {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let upload =
        upload.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let entry = entries::attach_image_upload(
        &state.pool,
        state.object_store.as_ref(),
        Duration::from_secs(state.config.storage.timeout_secs),
        user.actor(),
        project_id,
        day,
        upload,
    )
    .await?;
    Ok(Json(entry))
}
