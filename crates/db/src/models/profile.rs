//! Profile entity model and DTOs.

use daybook_core::profile::display_name_or_fallback;
use daybook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A profile row from the `profiles` table, keyed by user id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub user_id: DbId,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Profile {
    /// The name shown next to this user's content.
    pub fn shown_name(&self) -> String {
        display_name_or_fallback(self.display_name.as_deref(), Some(&self.username))
    }
}

/// DTO for creating a profile at signup.
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub user_id: DbId,
    pub username: String,
    pub display_name: Option<String>,
}

/// DTO for updating the caller's own profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfile {
    pub display_name: Option<String>,
    pub bio: Option<String>,
}
