//! Text field rules shared by session and idea construction.

use crate::domain::foundation::ValidationError;

/// Maximum length for a session name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Checks that a text field is present and not blank.
///
/// `max` bounds the trimmed character count when given.
pub fn require_text(field: &str, value: &str, max: Option<usize>) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::required(field));
    }
    if let Some(max) = max {
        if trimmed.chars().count() > max {
            return Err(ValidationError::too_long(field, max));
        }
    }
    Ok(())
}
