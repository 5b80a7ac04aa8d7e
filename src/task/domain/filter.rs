//! Conjunctive filter sets over the task collection.

use super::{Priority, Task};

/// Optional predicates combined with logical AND.
///
/// The default filter matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Exact completion state.
    pub completed: Option<bool>,
    /// Exact priority.
    pub priority: Option<Priority>,
    /// Exact category.
    pub category: Option<String>,
    /// Case-insensitive substring of the task text. Empty matches all.
    pub search: Option<String>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to tasks with the given completion state.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Restricts to tasks with the given priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts to tasks in the given category.
    ///
    /// An empty category applies no restriction.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restricts to tasks whose text contains `search`, ignoring case.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns `true` when `task` satisfies every set predicate.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.completed.is_none_or(|completed| task.is_completed() == completed)
            && self.priority.is_none_or(|priority| task.priority() == priority)
            && self.category_matches(task)
            && self.search_matches(task)
    }

    fn category_matches(&self, task: &Task) -> bool {
        match self.category.as_deref() {
            None | Some("") => true,
            Some(category) => task.category() == Some(category),
        }
    }

    fn search_matches(&self, task: &Task) -> bool {
        match self.search.as_deref() {
            None | Some("") => true,
            Some(needle) => task
                .text()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}
