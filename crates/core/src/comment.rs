//! Comment validation.

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length for a comment.
pub const MAX_COMMENT_LENGTH: usize = 2_000;

/// Validate comment text and return it trimmed.
pub fn validate_comment(content: &str) -> Result<String, CoreError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyComment);
    }
    if trimmed.chars().count() > MAX_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Comment exceeds maximum length of {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Check that an entry belongs to the project it is being accessed through.
pub fn check_entry_belongs_to(
    entry_id: DbId,
    entry_project_id: DbId,
    project_id: DbId,
) -> Result<(), CoreError> {
    if entry_project_id == project_id {
        Ok(())
    } else {
        Err(CoreError::InvalidReference(format!(
            "Entry {entry_id} belongs to project {entry_project_id}, not {project_id}"
        )))
    }
}
