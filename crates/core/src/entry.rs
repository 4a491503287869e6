//! Day-entry validation.
//!
//! An entry is keyed by `(project, day_number)`; the day must fall inside the
//! project's duration and the entry must carry either text or an image.

use crate::error::CoreError;

/// Maximum length for an entry's text content.
pub const MAX_ENTRY_LENGTH: usize = 20_000;

/// Validate that `day` lies in `1..=duration_days` and return it as the
/// stored column type.
///
/// Days arrive from the URL as `i64` so that values past `i32::MAX` are
/// still reported as an invalid day.
pub fn validate_day(day: i64, duration_days: i32) -> Result<i32, CoreError> {
    if (1..=i64::from(duration_days)).contains(&day) {
        i32::try_from(day).map_err(|_| CoreError::InvalidDay { day, duration_days })
    } else {
        Err(CoreError::InvalidDay { day, duration_days })
    }
}

/// Validate entry text. Empty text is only allowed when an image is attached.
pub fn validate_entry_content(content: &str, has_image: bool) -> Result<(), CoreError> {
    if content.trim().is_empty() && !has_image {
        return Err(CoreError::EmptyEntry);
    }
    if content.chars().count() > MAX_ENTRY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Entry text exceeds maximum length of {MAX_ENTRY_LENGTH} characters"
        )));
    }
    Ok(())
}
