//! Personal task tracker library
//!
//! This library keeps a single user's to-do list in memory and mirrors it to a
//! local TOML file after every change.
//!
//! # Architecture
//!
//! - **Domain Layer**: `todo` module - `Task`, `Priority` and the `TaskStore`
//! - **Persistence Layer**: `storage` module - whole-file TOML storage
//! - **Driver helpers**: `validation` and `formatting` - input parsing and
//!   console rendering used by the `todo` binary
//!
//! # Example
//!
//! ```no_run
//! use todo_tracker::{ListOptions, Priority, SortKey, Task, TaskStore};
//!
//! let mut store = TaskStore::open("tasks.toml");
//! store.add(Task::new("Buy milk").with_priority(Priority::High))?;
//! store.complete("Buy milk");
//!
//! let options = ListOptions {
//!     sort_by: Some(SortKey::Priority),
//!     ..Default::default()
//! };
//! for task in store.list(&options) {
//!     println!("{}", task.title);
//! }
//! # Ok::<(), todo_tracker::TaskError>(())
//! ```

pub mod error;
pub mod formatting;
pub mod storage;
pub mod todo;
pub mod validation;

// Re-export commonly used types
pub use error::{StorageError, TaskError};
pub use storage::Storage;
pub use todo::{ListOptions, Priority, SortKey, Task, TaskRecord, TaskStore, TaskUpdate};
