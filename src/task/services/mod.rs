//! Application services for task tracking.

mod tracker;

pub use tracker::{TaskService, TaskServiceError, TaskServiceResult};
