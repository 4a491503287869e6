//! Profile and account field rules.
//!
//! Profiles exist for attribution: comments and public project listings show
//! the author's display name, falling back to the username.

use crate::error::CoreError;

/// Shown when a user has neither a display name nor a username.
pub const ANONYMOUS_DISPLAY_NAME: &str = "Anonymous";

/// Maximum length for a username.
pub const MAX_USERNAME_LENGTH: usize = 100;

/// Maximum length for a display name.
pub const MAX_DISPLAY_NAME_LENGTH: usize = 100;

/// Maximum length for a profile bio.
pub const MAX_BIO_LENGTH: usize = 1_000;

/// Minimum password length accepted at signup.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Resolve the name shown next to a user's content.
pub fn display_name_or_fallback(display_name: Option<&str>, username: Option<&str>) -> String {
    display_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .or_else(|| username.map(str::trim).filter(|n| !n.is_empty()))
        .unwrap_or(ANONYMOUS_DISPLAY_NAME)
        .to_string()
}

/// Validate an email address and return it trimmed and lowercased.
///
/// Only the shape is checked; deliverability is the identity provider's
/// concern.
pub fn normalize_email(email: &str) -> Result<String, CoreError> {
    let email = email.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if !valid || email.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        )));
    }
    Ok(email)
}

/// Pick the username for a new profile: the requested one, else the email.
pub fn resolve_username(requested: Option<&str>, email: &str) -> Result<String, CoreError> {
    let username = requested
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(email);
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Username exceeds maximum length of {MAX_USERNAME_LENGTH} characters"
        )));
    }
    Ok(username.to_string())
}

/// Validate the optional display name and bio of a profile update.
pub fn validate_profile_fields(
    display_name: Option<&str>,
    bio: Option<&str>,
) -> Result<(), CoreError> {
    if display_name.is_some_and(|n| n.chars().count() > MAX_DISPLAY_NAME_LENGTH) {
        return Err(CoreError::Validation(format!(
            "Display name exceeds maximum length of {MAX_DISPLAY_NAME_LENGTH} characters"
        )));
    }
    if bio.is_some_and(|b| b.chars().count() > MAX_BIO_LENGTH) {
        return Err(CoreError::Validation(format!(
            "Bio exceeds maximum length of {MAX_BIO_LENGTH} characters"
        )));
    }
    Ok(())
}
