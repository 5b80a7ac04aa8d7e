//! Task record and its creation and update inputs.

use super::{Priority, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A tracked unit of work.
///
/// The serialized form is the persisted storage record: camel-cased field
/// names, RFC 3339 timestamps, and `category` omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

/// Validated input for creating a task.
///
/// Produced by [`crate::task::validation::validate_create`]; `priority` is
/// left unset when the caller omitted it so the repository applies the
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Trimmed task text.
    pub text: String,
    /// Requested priority, if any.
    pub priority: Option<Priority>,
    /// Requested category, if any.
    pub category: Option<String>,
}

impl NewTask {
    /// Creates creation input with only the task text set.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: None,
            category: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Validated partial update for an existing task.
///
/// Unset fields leave the stored value untouched. `category` is doubly
/// optional: `Some(None)` clears the category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement text.
    pub text: Option<String>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
    /// Replacement priority.
    pub priority: Option<Priority>,
    /// Replacement or cleared category.
    pub category: Option<Option<String>>,
}

impl TaskPatch {
    /// Patch that only sets the completion flag.
    #[must_use]
    pub const fn completion(completed: bool) -> Self {
        Self {
            text: None,
            completed: Some(completed),
            priority: None,
            category: None,
        }
    }

    /// Returns `true` when the patch carries no field changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.category.is_none()
    }
}

impl Task {
    /// Builds a fresh, pending task from validated input.
    #[must_use]
    pub fn create(input: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            text: input.text,
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
            priority: input.priority.unwrap_or_default(),
            category: input.category,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the task category, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Merges a patch onto this task and refreshes `updated_at`.
    ///
    /// The timestamp is refreshed even for an empty patch.
    pub fn apply(&mut self, patch: TaskPatch, clock: &impl Clock) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        self.touch(clock);
    }

    /// Updates `updated_at` to the current clock time.
    ///
    /// A clock reading earlier than the stored value is ignored so
    /// `updated_at` never moves backwards.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().max(self.updated_at);
    }
}
