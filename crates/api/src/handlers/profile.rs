//! Handlers for profiles: the caller's own (`/me`) and public lookups.

use axum::extract::{Path, State};
use axum::Json;
use daybook_core::error::CoreError;
use daybook_core::profile::validate_profile_fields;
use daybook_core::types::DbId;
use daybook_db::models::profile::{Profile, UpdateProfile};
use daybook_db::models::project::Project;
use daybook_db::models::user::User;
use daybook_db::repositories::{ProfileRepo, UserRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::journal::projects;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response for `GET /me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: User,
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
}

/// GET /api/v1/me
///
/// The caller's account, profile, and own projects.
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<MeResponse>> {
    let account = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;
    let profile = ProfileRepo::find_by_user_id(&state.pool, user.user_id).await?;
    let projects = projects::list_owned(&state.pool, user.actor()).await?;

    Ok(Json(MeResponse {
        user: account,
        profile,
        projects,
    }))
}

/// PUT /api/v1/me/profile
pub async fn update_me(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<Profile>> {
    let normalized = UpdateProfile {
        display_name: input.display_name.as_deref().map(|n| n.trim().to_string()),
        bio: input.bio.as_deref().map(|b| b.trim().to_string()),
    };
    validate_profile_fields(normalized.display_name.as_deref(), normalized.bio.as_deref())?;

    let profile = ProfileRepo::update(&state.pool, user.user_id, &normalized)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user.user_id,
        }))?;
    tracing::info!(user_id = user.user_id, "Profile updated");
    Ok(Json(profile))
}

/// GET /api/v1/profiles/{user_id}
pub async fn get_by_user_id(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Profile>> {
    let profile = ProfileRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: user_id,
        }))?;
    Ok(Json(profile))
}
