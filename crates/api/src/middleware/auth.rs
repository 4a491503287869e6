//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use daybook_core::access::Actor;
use daybook_core::error::CoreError;
use daybook_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the
/// `Authorization` header. Rejects the request with 401 when absent.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// The user's id (from `claims.sub`).
    pub user_id: DbId,
}

impl AuthUser {
    pub fn actor(&self) -> Actor {
        Actor::user(self.user_id)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match bearer_user_id(parts, state)? {
            Some(user_id) => Ok(AuthUser { user_id }),
            None => Err(AppError::Core(CoreError::Unauthorized(
                "Missing Authorization header".into(),
            ))),
        }
    }
}

/// The caller as an [`Actor`]: anonymous when no `Authorization` header is
/// sent. A header that is present but invalid is still rejected with 401.
#[derive(Debug, Clone, Copy)]
pub struct CurrentActor(pub Actor);

impl FromRequestParts<AppState> for CurrentActor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor = match bearer_user_id(parts, state)? {
            Some(user_id) => Actor::user(user_id),
            None => Actor::anonymous(),
        };
        Ok(CurrentActor(actor))
    }
}

/// `Ok(None)` when no header is present, the token's subject when it
/// validates, 401 otherwise.
fn bearer_user_id(parts: &Parts, state: &AppState) -> Result<Option<DbId>, AppError> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

    let claims = validate_token(token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
    })?;

    Ok(Some(claims.sub))
}
