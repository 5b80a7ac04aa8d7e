//! Validation error types.

use thiserror::Error;

/// Result type for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Malformed task creation or update input.
///
/// Display strings are user-facing messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Creation text is missing or blank.
    #[error("Task text is required")]
    TextRequired,

    /// Update text was supplied but is blank.
    #[error("Task text cannot be empty")]
    TextEmpty,

    /// Text exceeds the character limit after trimming.
    #[error("Task text cannot exceed {max} characters")]
    TextTooLong {
        /// Maximum allowed characters.
        max: usize,
        /// Characters supplied.
        actual: usize,
    },

    /// Priority is not one of the supported names.
    #[error("Priority must be low, medium, or high")]
    InvalidPriority(String),

    /// Category exceeds the character limit.
    #[error("Category cannot exceed {max} characters")]
    CategoryTooLong {
        /// Maximum allowed characters.
        max: usize,
        /// Characters supplied.
        actual: usize,
    },
}
