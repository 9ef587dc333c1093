//! Task domain model and the task store
//!
//! Submodules:
//! - `task`: the `Task` value type and `Priority`
//! - `record`: plain record form used for (de)serialization
//! - `task_store`: ordered task collection with mutation and persistence
//! - `queries`: filtered and sorted views over a `TaskStore`

pub(crate) mod record;
mod queries;
mod task;
mod task_store;

// Re-export all public types
pub use queries::{ListOptions, SortKey};
pub use record::TaskRecord;
pub use task::{DEFAULT_CATEGORY, Priority, Task};
pub use task_store::{TaskStore, TaskUpdate};
