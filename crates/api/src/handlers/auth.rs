//! Handlers for the `/auth` resource (signup, login, refresh, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use daybook_core::error::CoreError;
use daybook_core::profile::{normalize_email, resolve_username, MIN_PASSWORD_LENGTH};
use daybook_core::types::DbId;
use daybook_db::models::profile::CreateProfile;
use daybook_db::models::session::CreateSession;
use daybook_db::models::user::{CreateUser, User};
use daybook_db::repositories::{ProfileRepo, SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, hash_refresh_token, RefreshToken,
};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    /// Defaults to the email address.
    pub username: Option<String>,
    pub display_name: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by signup, login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub display_name: String,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Create an account and its profile in one transaction, then sign in.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let email = normalize_email(&input.email)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let username = resolve_username(input.username.as_deref(), &email)?;
    let display_name = input
        .display_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from);

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let mut tx = state.pool.begin().await?;
    let user = UserRepo::create(
        &mut *tx,
        &CreateUser {
            email,
            password_hash,
        },
    )
    .await?;
    ProfileRepo::create(
        &mut *tx,
        &CreateProfile {
            user_id: user.id,
            username,
            display_name,
        },
    )
    .await?;
    tx.commit().await?;

    tracing::info!(user_id = user.id, "User signed up");
    let response = sign_in(&state, &user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = normalize_email(&input.email).map_err(|_| invalid_credentials())?;
    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected: wrong password");
        return Err(invalid_credentials());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let response = sign_in(&state, &user).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The old
/// session is revoked; a token can be exchanged only once.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);
    let expired = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid or expired refresh token".into(),
        ))
    };

    let session = SessionRepo::find_live(&state.pool, &token_hash)
        .await?
        .ok_or_else(expired)?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // Losing the rotation to a concurrent refresh counts as an invalid token.
    let refresh = generate_refresh_token();
    let next = next_session(&state, user.id, &refresh);
    SessionRepo::rotate(&state.pool, session.id, &next)
        .await?
        .ok_or_else(expired)?;

    let response = auth_response(&state, &user, refresh).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated user. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, user.user_id).await?;
    tracing::info!(user_id = user.user_id, revoked, "User logged out");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn next_session(state: &AppState, user_id: DbId, refresh: &RefreshToken) -> CreateSession {
    let ttl = chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);
    CreateSession {
        user_id,
        refresh_token_hash: refresh.hash.clone(),
        expires_at: Utc::now() + ttl,
    }
}

/// Open a new session for `user` and return its tokens.
async fn sign_in(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let refresh = generate_refresh_token();
    let session = SessionRepo::create(&state.pool, &next_session(state, user.id, &refresh)).await?;
    tracing::debug!(user_id = user.id, session_id = session.id, "Session opened");
    auth_response(state, user, refresh).await
}

/// Sign an access token and pair it with `refresh`, whose session is
/// already stored.
async fn auth_response(
    state: &AppState,
    user: &User,
    refresh: RefreshToken,
) -> AppResult<AuthResponse> {
    let jwt = &state.config.jwt;
    let access_token = generate_access_token(user.id, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let display_name = ProfileRepo::display_name_of(&state.pool, user.id).await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh.plaintext,
        expires_in: jwt.access_ttl_secs(),
        user: UserInfo {
            id: user.id,
            email: user.email.clone(),
            display_name,
        },
    })
}
