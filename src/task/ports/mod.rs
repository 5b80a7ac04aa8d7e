//! Port contracts for task tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by task services and
//! repository adapters.

pub mod repository;
pub mod storage;

pub use repository::TaskRepository;
pub use storage::{KeyValueStore, StorageError, StorageResult};
