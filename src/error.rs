//! Error types for the task tracker
//!
//! Lookups of unknown titles are not errors; they come back as `false` or
//! `None` from the store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or changing tasks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Invalid date format '{0}'. Use YYYY-MM-DD (e.g., '2025-03-15')")]
    MalformedDate(String),

    #[error("Task title must not be empty")]
    MissingTitle,

    #[error("A task titled '{0}' already exists")]
    DuplicateTitle(String),
}

/// Errors raised while reading or writing the backing file
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed task data in {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Failed to encode task data: {0}")]
    Encode(#[from] toml::ser::Error),
}
