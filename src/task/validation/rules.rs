//! Individual validation rule implementations.
//!
//! Each rule is a pure function over one field. Rules return the normalized
//! field value on success or a specific [`ValidationError`] on failure.

use super::error::{ValidationError, ValidationResult};
use crate::task::domain::Priority;

/// Maximum task text length in characters, measured after trimming.
pub const MAX_TEXT_CHARS: usize = 500;

/// Maximum category length in characters, measured after trimming.
pub const MAX_CATEGORY_CHARS: usize = 50;

/// Trims `text` and requires something to remain.
///
/// `blank_error` selects the error reported for blank input, which differs
/// between creation and update.
///
/// # Errors
///
/// Returns `blank_error` when `text` is empty after trimming.
pub fn non_blank_text(text: &str, blank_error: ValidationError) -> ValidationResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(blank_error);
    }
    Ok(trimmed)
}

/// Checks the length of already trimmed text.
///
/// # Errors
///
/// Returns [`ValidationError::TextTooLong`] above [`MAX_TEXT_CHARS`].
pub fn text_length(trimmed: &str) -> ValidationResult<()> {
    let actual = trimmed.chars().count();
    if actual > MAX_TEXT_CHARS {
        return Err(ValidationError::TextTooLong {
            max: MAX_TEXT_CHARS,
            actual,
        });
    }
    Ok(())
}

/// Parses a supplied priority name. A blank name counts as not supplied.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPriority`] for any other name than
/// `low`, `medium`, or `high`.
pub fn priority(value: &str) -> ValidationResult<Option<Priority>> {
    if value.is_empty() {
        return Ok(None);
    }
    Priority::try_from(value)
        .map(Some)
        .map_err(|err| ValidationError::InvalidPriority(err.0))
}

/// Trims a supplied category. A blank category normalizes to `None`.
///
/// # Errors
///
/// Returns [`ValidationError::CategoryTooLong`] above
/// [`MAX_CATEGORY_CHARS`].
pub fn category(value: &str) -> ValidationResult<Option<String>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let actual = trimmed.chars().count();
    if actual > MAX_CATEGORY_CHARS {
        return Err(ValidationError::CategoryTooLong {
            max: MAX_CATEGORY_CHARS,
            actual,
        });
    }
    Ok(Some(trimmed.to_owned()))
}
