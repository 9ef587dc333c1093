use crate::error::StorageError;
use crate::todo::record::TaskFile;
use crate::todo::Task;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed persistence for a task list
///
/// The whole list is read or written in one call; no file handle is kept
/// between calls.
#[derive(Debug, Clone)]
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read every task from the backing file
    ///
    /// A missing file is a fresh start and yields an empty list.
    pub fn load(&self) -> Result<Vec<Task>, StorageError> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.file_path.clone(),
                    source,
                });
            }
        };

        let file: TaskFile = toml::from_str(&content).map_err(|e| self.malformed(e))?;
        file.tasks
            .into_iter()
            .map(Task::from_record)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| self.malformed(e))
    }

    /// Rewrite the backing file with the given tasks
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let file = TaskFile {
            tasks: tasks.iter().map(Task::to_record).collect(),
        };
        let content = toml::to_string_pretty(&file)?;
        fs::write(&self.file_path, content).map_err(|source| StorageError::Io {
            path: self.file_path.clone(),
            source,
        })
    }

    fn malformed(&self, reason: impl ToString) -> StorageError {
        StorageError::Malformed {
            path: self.file_path.clone(),
            reason: reason.to_string(),
        }
    }
}
