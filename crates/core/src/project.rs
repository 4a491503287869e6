//! Project constants and validation functions.
//!
//! A project is time-boxed to a whole number of weeks. Its duration fixes
//! the valid day range for entries, so it cannot change after creation.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Durations a project may be created with (one to four weeks).
pub const SUPPORTED_DURATIONS: &[i32] = &[7, 14, 21, 28];

/// Duration used when the caller does not pick one.
pub const DEFAULT_DURATION_DAYS: i32 = 7;

/// Maximum length for a project title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for a project description.
pub const MAX_DESCRIPTION_LENGTH: usize = 5_000;

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate a project title and return it trimmed.
pub fn validate_title(title: &str) -> Result<String, CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidTitle("Title is required".into()));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::InvalidTitle(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate that a duration is one of [`SUPPORTED_DURATIONS`].
pub fn validate_duration(duration_days: i32) -> Result<(), CoreError> {
    if SUPPORTED_DURATIONS.contains(&duration_days) {
        Ok(())
    } else {
        Err(CoreError::InvalidDuration(duration_days))
    }
}

/// Normalize an optional description: blank becomes `None`.
pub fn normalize_description(description: Option<&str>) -> Result<Option<String>, CoreError> {
    let Some(text) = description.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    if text.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(Some(text.to_string()))
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(validate_title("  Learn Rust  ").unwrap(), "Learn Rust");
    }

    #[test]
    fn test_blank_title_rejected() {
        assert_matches!(validate_title(""), Err(CoreError::InvalidTitle(_)));
        assert_matches!(validate_title("   \t"), Err(CoreError::InvalidTitle(_)));
    }

    #[test]
    fn test_overlong_title_rejected() {
        let long = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert_matches!(validate_title(&long), Err(CoreError::InvalidTitle(_)));
        assert!(validate_title(&"x".repeat(MAX_TITLE_LENGTH)).is_ok());
    }

    #[test]
    fn test_supported_durations_accepted() {
        for d in SUPPORTED_DURATIONS {
            assert!(validate_duration(*d).is_ok());
        }
    }

    #[test]
    fn test_unsupported_durations_rejected() {
        for d in [0, -7, 1, 10, 30, 35] {
            assert_matches!(validate_duration(d), Err(CoreError::InvalidDuration(v)) if v == d);
        }
    }

    #[test]
    fn test_description_normalization() {
        assert_eq!(normalize_description(None).unwrap(), None);
        assert_eq!(normalize_description(Some("   ")).unwrap(), None);
        assert_eq!(
            normalize_description(Some(" a week of sketches ")).unwrap(),
            Some("a week of sketches".to_string())
        );
        let long = "d".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert!(normalize_description(Some(&long)).is_err());
    }
}
