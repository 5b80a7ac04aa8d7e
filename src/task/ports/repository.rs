//! Repository port for task persistence and lookup.

use crate::task::domain::{NewTask, Task, TaskFilter, TaskId, TaskPatch};
use async_trait::async_trait;

/// Task persistence contract.
///
/// Missing records are reported as `None` or `false`, never as errors.
/// Implementations own their storage failure policy; callers never see one.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Builds a task from validated input, stores it, and returns it.
    async fn create(&self, input: NewTask) -> Task;

    /// Returns every task matching `filter`, newest first.
    async fn find_all(&self, filter: &TaskFilter) -> Vec<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: &TaskId) -> Option<Task>;

    /// Merges `patch` onto the stored task and refreshes its `updated_at`.
    ///
    /// Returns `None` when the task does not exist.
    async fn update(&self, id: &TaskId, patch: TaskPatch) -> Option<Task>;

    /// Removes the task, returning whether anything was removed.
    async fn delete(&self, id: &TaskId) -> bool;

    /// Returns the number of stored tasks.
    async fn count(&self) -> usize {
        self.find_all(&TaskFilter::default()).await.len()
    }
}
