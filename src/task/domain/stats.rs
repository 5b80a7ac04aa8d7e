//! Collection summary counts.

use super::Task;

/// Counts of tasks by completion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// All tasks.
    pub total: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Tasks not yet completed.
    pub pending: usize,
}

impl TaskStats {
    /// Summarizes a set of tasks.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.is_completed()).count();
        Self {
            total: tasks.len(),
            completed,
            pending: tasks.len().saturating_sub(completed),
        }
    }
}
