//! Repository for the `user_sessions` table.
//!
//! A session is live while it is neither revoked nor past `expires_at`.
//! Refreshing replaces a live session with a new one in one statement, so
//! a refresh token can be exchanged at most once.

use daybook_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::{CreateSession, UserSession};

const COLUMNS: &str = "id, user_id, refresh_token_hash, expires_at, is_revoked, \
                       created_at, updated_at";

const LIVE: &str = "is_revoked = false AND expires_at > NOW()";

pub struct SessionRepo;

impl SessionRepo {
    /// Open a session at login or signup.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<UserSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_sessions (user_id, refresh_token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSession>(&query)
            .bind(input.user_id)
            .bind(&input.refresh_token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// The live session holding `token_hash`, if any.
    pub async fn find_live(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<UserSession>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM user_sessions WHERE refresh_token_hash = $1 AND {LIVE}");
        sqlx::query_as::<_, UserSession>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke live session `old_id` and open `next` for the same user.
    ///
    /// Returns `None`, and opens nothing, when `old_id` is no longer live,
    /// e.g. because a concurrent refresh already rotated it. `next.user_id`
    /// is ignored in favour of the revoked session's owner.
    pub async fn rotate(
        pool: &PgPool,
        old_id: DbId,
        next: &CreateSession,
    ) -> Result<Option<UserSession>, sqlx::Error> {
        let query = format!(
            "WITH revoked AS (
                 UPDATE user_sessions SET is_revoked = true
                 WHERE id = $1 AND {LIVE}
                 RETURNING user_id
             )
             INSERT INTO user_sessions (user_id, refresh_token_hash, expires_at)
             SELECT user_id, $2, $3 FROM revoked
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSession>(&query)
            .bind(old_id)
            .bind(&next.refresh_token_hash)
            .bind(next.expires_at)
            .fetch_optional(pool)
            .await
    }

    /// Revoke every live session of a user (logout). Returns how many.
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let query = format!("UPDATE user_sessions SET is_revoked = true WHERE user_id = $1 AND {LIVE}");
        let result = sqlx::query(&query).bind(user_id).execute(pool).await?;
        Ok(result.rows_affected())
    }
}
