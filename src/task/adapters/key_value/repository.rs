//! Task repository persisting the whole collection under one storage key.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, error};

use crate::config::AppConfig;
use crate::task::{
    domain::{NewTask, Task, TaskFilter, TaskId, TaskPatch},
    ports::{KeyValueStore, TaskRepository},
};

/// Task repository over a [`KeyValueStore`].
///
/// The collection is stored as one JSON array and every mutation rewrites
/// it in full. Read-modify-write cycles are not serialized across callers:
/// concurrent writers race and the last write wins.
///
/// Storage failures never reach callers. An unreadable or corrupt value is
/// logged and read as an empty collection; a failed write is logged and
/// dropped.
#[derive(Debug)]
pub struct KeyValueTaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    store: S,
    storage_key: String,
    clock: Arc<C>,
}

impl<S, C> KeyValueTaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Creates a repository storing the collection under `storage_key`.
    #[must_use]
    pub fn new(store: S, storage_key: impl Into<String>, clock: Arc<C>) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
            clock,
        }
    }

    /// Creates a repository keyed by the configured storage prefix.
    #[must_use]
    pub fn from_config(store: S, config: &AppConfig, clock: Arc<C>) -> Self {
        Self::new(store, config.storage_key(), clock)
    }

    /// Returns the key the collection is stored under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn load(&self) -> Vec<Task> {
        let raw = match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                error!(key = %self.storage_key, error = %err, "failed to read tasks from storage");
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            error!(key = %self.storage_key, error = %err, "failed to parse stored tasks");
            Vec::new()
        })
    }

    fn save(&self, tasks: &[Task]) {
        let raw = match serde_json::to_string(tasks) {
            Ok(raw) => raw,
            Err(err) => {
                error!(key = %self.storage_key, error = %err, "failed to serialize tasks");
                return;
            }
        };
        match self.store.set(&self.storage_key, &raw) {
            Ok(()) => debug!(key = %self.storage_key, count = tasks.len(), "saved tasks to storage"),
            Err(err) => {
                error!(key = %self.storage_key, error = %err, "failed to write tasks to storage");
            }
        }
    }
}

#[async_trait]
impl<S, C> TaskRepository for KeyValueTaskRepository<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    async fn create(&self, input: NewTask) -> Task {
        let task = Task::create(input, &*self.clock);
        let mut tasks = self.load();
        tasks.push(task.clone());
        self.save(&tasks);
        task
    }

    async fn find_all(&self, filter: &TaskFilter) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .load()
            .into_iter()
            .filter(|task| filter.matches(task))
            .collect();
        tasks.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        tasks
    }

    async fn find_by_id(&self, id: &TaskId) -> Option<Task> {
        self.load().into_iter().find(|task| task.id() == id)
    }

    async fn update(&self, id: &TaskId, patch: TaskPatch) -> Option<Task> {
        let mut tasks = self.load();
        let task = tasks.iter_mut().find(|task| task.id() == id)?;
        task.apply(patch, &*self.clock);
        let updated = task.clone();
        self.save(&tasks);
        Some(updated)
    }

    async fn delete(&self, id: &TaskId) -> bool {
        let mut tasks = self.load();
        let before = tasks.len();
        tasks.retain(|task| task.id() != id);
        if tasks.len() == before {
            return false;
        }
        self.save(&tasks);
        true
    }

    async fn count(&self) -> usize {
        self.load().len()
    }
}
