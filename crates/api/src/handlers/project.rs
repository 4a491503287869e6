//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use daybook_core::progress::Progress;
use daybook_core::types::DbId;
use daybook_db::models::project::{CreateProject, Project, PublicProject, UpdateProject};

use crate::error::AppResult;
use crate::journal::projects::{self, ProjectDetail};
use crate::middleware::auth::{AuthUser, CurrentActor};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = projects::create_project(&state.pool, user.actor(), &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects/mine
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let data = projects::list_owned(&state.pool, user.actor()).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects/public
pub async fn list_public(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PublicProject>>>> {
    let data = projects::list_public(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects/{id}
///
/// Includes the owner's name and current progress. Private projects of
/// other users answer 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let detail = projects::project_detail(&state.pool, actor, id).await?;
    Ok(Json(detail))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = projects::update_project(&state.pool, user.actor(), id, &input).await?;
    Ok(Json(project))
}

/// GET /api/v1/projects/{id}/progress
pub async fn progress(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<DbId>,
) -> AppResult<Json<Progress>> {
    let progress = projects::progress(&state.pool, actor, id).await?;
    Ok(Json(progress))
}
