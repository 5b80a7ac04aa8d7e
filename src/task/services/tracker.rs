//! Service layer for task creation, lookup, update, and queries.

use crate::task::{
    domain::{
        CreateTaskRequest, Priority, Task, TaskFilter, TaskId, TaskPatch, TaskStats,
        UpdateTaskRequest,
    },
    ports::TaskRepository,
    validation::{self, ValidationError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for task operations.
///
/// A missing record is not an error; operations report it as `None` or
/// `false`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The task identifier was empty.
    #[error("Task ID is required")]
    MissingId,
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task tracking entry point for presentation code.
///
/// Validates input and enforces identifier preconditions before delegating
/// to the repository, so rejected calls never touch storage.
#[derive(Debug)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the request is
    /// malformed.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let input = validation::validate_create(&request)?;
        let task = self.repository.create(input).await;
        debug!(task_id = %task.id(), "created task");
        Ok(task)
    }

    /// Returns every task matching `filter`, newest first.
    pub async fn get_all_tasks(&self, filter: &TaskFilter) -> Vec<Task> {
        self.repository.find_all(filter).await
    }

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::MissingId`] when `id` is empty.
    pub async fn get_task_by_id(&self, id: &str) -> TaskServiceResult<Option<Task>> {
        let task_id = require_id(id)?;
        Ok(self.repository.find_by_id(&task_id).await)
    }

    /// Validates and applies a partial update.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::MissingId`] when `id` is empty, or
    /// [`TaskServiceError::Validation`] when the request is malformed.
    pub async fn update_task(
        &self,
        id: &str,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Option<Task>> {
        let task_id = require_id(id)?;
        let patch = validation::validate_update(&request)?;
        Ok(self.repository.update(&task_id, patch).await)
    }

    /// Deletes a task, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::MissingId`] when `id` is empty.
    pub async fn delete_task(&self, id: &str) -> TaskServiceResult<bool> {
        let task_id = require_id(id)?;
        let removed = self.repository.delete(&task_id).await;
        if removed {
            debug!(task_id = %task_id, "deleted task");
        }
        Ok(removed)
    }

    /// Flips the completion flag of a task.
    ///
    /// Returns `None` when no task has the identifier, including an empty one.
    pub async fn toggle_task_completion(&self, id: &str) -> Option<Task> {
        let task_id = TaskId::from_raw(id);
        let task = self.repository.find_by_id(&task_id).await?;
        self.repository
            .update(&task_id, TaskPatch::completion(!task.is_completed()))
            .await
    }

    /// Returns tasks whose text contains `query`, ignoring case.
    ///
    /// A blank query returns the whole collection.
    pub async fn search_tasks(&self, query: &str) -> Vec<Task> {
        if query.trim().is_empty() {
            return self.get_all_tasks(&TaskFilter::default()).await;
        }
        self.get_all_tasks(&TaskFilter::new().with_search(query))
            .await
    }

    /// Returns completed tasks.
    pub async fn get_completed_tasks(&self) -> Vec<Task> {
        self.get_all_tasks(&TaskFilter::new().with_completed(true))
            .await
    }

    /// Returns tasks not yet completed.
    pub async fn get_pending_tasks(&self) -> Vec<Task> {
        self.get_all_tasks(&TaskFilter::new().with_completed(false))
            .await
    }

    /// Returns tasks with the given priority.
    pub async fn get_tasks_by_priority(&self, priority: Priority) -> Vec<Task> {
        self.get_all_tasks(&TaskFilter::new().with_priority(priority))
            .await
    }

    /// Returns tasks in the given category.
    pub async fn get_tasks_by_category(&self, category: &str) -> Vec<Task> {
        self.get_all_tasks(&TaskFilter::new().with_category(category))
            .await
    }

    /// Counts tasks by completion state.
    pub async fn task_stats(&self) -> TaskStats {
        let tasks = self.get_all_tasks(&TaskFilter::default()).await;
        TaskStats::from_tasks(&tasks)
    }

    /// Deletes every completed task, returning how many were removed.
    pub async fn clear_completed(&self) -> usize {
        let mut removed = 0;
        for task in self.get_completed_tasks().await {
            if self.repository.delete(task.id()).await {
                removed += 1;
            }
        }
        debug!(removed, "cleared completed tasks");
        removed
    }
}

fn require_id(id: &str) -> TaskServiceResult<TaskId> {
    let task_id = TaskId::from_raw(id);
    if task_id.is_empty() {
        return Err(TaskServiceError::MissingId);
    }
    Ok(task_id)
}
