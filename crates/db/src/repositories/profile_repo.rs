//! Repository for the `profiles` table.

use daybook_core::profile::ANONYMOUS_DISPLAY_NAME;
use daybook_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::profile::{CreateProfile, Profile, UpdateProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "user_id, username, display_name, bio, created_at, updated_at";

/// Provides operations for user profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateProfile,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (user_id, username, display_name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(input.user_id)
            .bind(&input.username)
            .bind(&input.display_name)
            .fetch_one(executor)
            .await
    }

    /// Find the profile of a user.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a profile. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the user has no profile.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                display_name = COALESCE($2, display_name),
                bio = COALESCE($3, bio)
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.display_name)
            .bind(&input.bio)
            .fetch_optional(pool)
            .await
    }

    /// The name shown next to a user's content: display name, then
    /// username, then the anonymous placeholder when no profile exists.
    pub async fn display_name_of(pool: &PgPool, user_id: DbId) -> Result<String, sqlx::Error> {
        Ok(Self::find_by_user_id(pool, user_id)
            .await?
            .map(|profile| profile.shown_name())
            .unwrap_or_else(|| ANONYMOUS_DISPLAY_NAME.to_string()))
    }
}
