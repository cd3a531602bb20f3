//! Field validation shared by the create/update DTOs.

use crate::error::CoreError;

/// Maximum length of a title or name field.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a free-text description or bio.
pub const MAX_DESCRIPTION_LENGTH: usize = 5000;

/// Reject empty or whitespace-only values and values over [`MAX_TITLE_LENGTH`].
pub fn require_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Like [`require_text`], but only when the field is being set.
pub fn optional_text(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    value.map_or(Ok(()), |v| require_text(field, v))
}

pub fn limit_description(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if v.chars().count() > MAX_DESCRIPTION_LENGTH => Err(CoreError::Validation(
            format!("{field} must be at most {MAX_DESCRIPTION_LENGTH} characters"),
        )),
        _ => Ok(()),
    }
}

/// Episode durations are whole, positive minutes.
pub fn validate_duration_minutes(minutes: i32) -> Result<(), CoreError> {
    if minutes <= 0 {
        return Err(CoreError::Validation(format!(
            "duration_minutes must be positive, got {minutes}"
        )));
    }
    Ok(())
}

/// Explicit ranks supplied on create/update must not be negative.
pub fn validate_sort_order(sort_order: Option<i32>) -> Result<(), CoreError> {
    match sort_order {
        Some(order) if order < 0 => Err(CoreError::Validation(format!(
            "sort_order must be non-negative, got {order}"
        ))),
        _ => Ok(()),
    }
}
