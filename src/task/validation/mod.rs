//! Task input validation.
//!
//! Validators run before any repository mutation and turn raw requests into
//! the validated inputs the repository accepts. Rules are checked in a fixed
//! order and the first violation wins: text presence, text length, priority,
//! category.

mod error;
pub mod rules;

pub use error::{ValidationError, ValidationResult};

use crate::task::domain::{CreateTaskRequest, NewTask, TaskPatch, UpdateTaskRequest};

/// Validates a creation request.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in rule order.
pub fn validate_create(request: &CreateTaskRequest) -> ValidationResult<NewTask> {
    let text = rules::non_blank_text(&request.text, ValidationError::TextRequired)?;
    rules::text_length(text)?;
    let priority = request
        .priority
        .as_deref()
        .map(rules::priority)
        .transpose()?
        .flatten();
    let category = request
        .category
        .as_deref()
        .map(rules::category)
        .transpose()?
        .flatten();
    Ok(NewTask {
        text: text.to_owned(),
        priority,
        category,
    })
}

/// Validates an update request. Only supplied fields are checked.
///
/// A supplied blank category becomes a patch that clears the category.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in rule order.
pub fn validate_update(request: &UpdateTaskRequest) -> ValidationResult<TaskPatch> {
    let text = request.text.as_deref().map(updated_text).transpose()?;
    let priority = request
        .priority
        .as_deref()
        .map(rules::priority)
        .transpose()?
        .flatten();
    let category = request
        .category
        .as_deref()
        .map(rules::category)
        .transpose()?;
    Ok(TaskPatch {
        text,
        completed: request.completed,
        priority,
        category,
    })
}

fn updated_text(value: &str) -> ValidationResult<String> {
    let trimmed = rules::non_blank_text(value, ValidationError::TextEmpty)?;
    rules::text_length(trimmed)?;
    Ok(trimmed.to_owned())
}
