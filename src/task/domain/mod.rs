//! Domain model for task tracking.
//!
//! The task domain models the task record, its validated creation and update
//! inputs, and the filter sets used to query the collection, while keeping
//! storage concerns outside of the domain boundary.

mod error;
mod filter;
mod ids;
mod priority;
mod request;
mod stats;
mod task;

pub use error::ParsePriorityError;
pub use filter::TaskFilter;
pub use ids::TaskId;
pub use priority::Priority;
pub use request::{CreateTaskRequest, UpdateTaskRequest};
pub use stats::TaskStats;
pub use task::{NewTask, Task, TaskPatch};
