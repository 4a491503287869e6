//! Project entity model and DTOs.

use chrono::NaiveDate;
use daybook_core::access::ProjectScope;
use daybook_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub duration_days: i32,
    pub is_public: bool,
    pub start_date: NaiveDate,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectScope for Project {
    fn project_id(&self) -> DbId {
        self.id
    }

    fn owner_id(&self) -> DbId {
        self.owner_id
    }

    fn is_public(&self) -> bool {
        self.is_public
    }
}

/// A public project together with its owner's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublicProject {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub project: Project,
    pub owner_name: String,
}

/// DTO for creating a new project. The owner comes from the session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to 7 if omitted.
    pub duration_days: Option<i32>,
    /// Defaults to `true` if omitted.
    pub is_public: Option<bool>,
    /// Defaults to the current date if omitted.
    pub start_date: Option<NaiveDate>,
}

/// DTO for updating a project. Owner and duration are fixed at creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}
