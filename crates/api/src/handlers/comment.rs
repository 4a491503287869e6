//! Handlers for comment threads under `/entries/{entry_id}/comments`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use daybook_core::types::DbId;
use daybook_db::models::comment::{CommentWithAuthor, CreateComment};

use crate::error::AppResult;
use crate::journal::comments;
use crate::middleware::auth::{AuthUser, CurrentActor};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/entries/{entry_id}/comments
pub async fn list(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(entry_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<CommentWithAuthor>>>> {
    let (entry, project) = comments::load_entry_scope(&state.pool, entry_id).await?;
    let data = comments::list_comments(&state.pool, actor, &entry, &project).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/entries/{entry_id}/comments
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(entry_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<CommentWithAuthor>)> {
    let (entry, project) = comments::load_entry_scope(&state.pool, entry_id).await?;
    let comment =
        comments::post_comment(&state.pool, user.actor(), &entry, &project, &input.content)
            .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}
