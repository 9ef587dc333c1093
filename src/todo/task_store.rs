use super::task::{Priority, Task};
use crate::error::{StorageError, TaskError};
use crate::storage::Storage;
use chrono::NaiveDate;
use std::path::Path;

/// Field changes applied by [`TaskStore::update`]
///
/// `None` always means "leave as is". For `title` and `category` a blank
/// string (empty or whitespace only) also means "leave as is", while
/// `description` and `due_date` accept an explicit empty value so they can be
/// cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `Some(None)` clears the due date
    pub due_date: Option<Option<NaiveDate>>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

impl TaskUpdate {
    fn apply(self, task: &mut Task) {
        if let Some(title) = self.title.filter(|t| !t.trim().is_empty()) {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(category) = self.category.filter(|c| !c.trim().is_empty()) {
            task.category = category;
        }
    }
}

/// Ordered, file-backed collection of tasks
///
/// Tasks are kept in insertion order. Every successful mutation rewrites the
/// backing file before returning. A failed write is logged and the in-memory
/// change is kept.
#[derive(Debug)]
pub struct TaskStore {
    /// All tasks in insertion order
    pub(crate) tasks: Vec<Task>,
    storage: Storage,
}

impl TaskStore {
    /// Open a store backed by `path`, loading whatever the file already holds
    pub fn open(path: impl AsRef<Path>) -> Self {
        let mut store = Self {
            tasks: Vec::new(),
            storage: Storage::new(path),
        };
        store.reload();
        store
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.title == title)
    }

    /// Append a task to the end of the list
    ///
    /// # Errors
    /// * [`TaskError::MissingTitle`] if the title is empty or only whitespace
    /// * [`TaskError::DuplicateTitle`] if a task with this title already exists
    pub fn add(&mut self, task: Task) -> Result<(), TaskError> {
        if task.title.trim().is_empty() {
            return Err(TaskError::MissingTitle);
        }
        if self.position(&task.title).is_some() {
            return Err(TaskError::DuplicateTitle(task.title));
        }

        tracing::debug!(title = %task.title, "adding task");
        self.tasks.push(task);
        self.persist_or_log();
        Ok(())
    }

    /// Remove the task with the given title
    ///
    /// # Returns
    /// `true` if a task was removed
    pub fn remove(&mut self, title: &str) -> bool {
        let Some(pos) = self.position(title) else {
            return false;
        };
        self.tasks.remove(pos);
        tracing::debug!(title, "removed task");
        self.persist_or_log();
        true
    }

    /// Mark the task with the given title as completed
    ///
    /// # Returns
    /// `true` if the task was found
    pub fn complete(&mut self, title: &str) -> bool {
        let Some(pos) = self.position(title) else {
            return false;
        };
        self.tasks[pos].completed = true;
        tracing::debug!(title, "completed task");
        self.persist_or_log();
        true
    }

    /// Apply `changes` to the task titled `old_title`
    ///
    /// # Returns
    /// `Ok(true)` if the task was found and updated, `Ok(false)` if no task has
    /// that title
    ///
    /// # Errors
    /// [`TaskError::DuplicateTitle`] if the new title belongs to another task.
    /// Nothing is changed in that case.
    pub fn update(&mut self, old_title: &str, changes: TaskUpdate) -> Result<bool, TaskError> {
        let Some(pos) = self.position(old_title) else {
            return Ok(false);
        };

        if let Some(new_title) = changes.title.as_deref().filter(|t| !t.trim().is_empty())
            && new_title != old_title
            && self.position(new_title).is_some()
        {
            return Err(TaskError::DuplicateTitle(new_title.to_string()));
        }

        changes.apply(&mut self.tasks[pos]);
        tracing::debug!(title = old_title, "updated task");
        self.persist_or_log();
        Ok(true)
    }

    /// Look up a task by title
    ///
    /// The reference is only valid until the next mutation.
    pub fn get(&self, title: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.title == title)
    }

    /// Write the full list to the backing file
    pub fn persist(&self) -> Result<(), StorageError> {
        self.storage.save(&self.tasks)
    }

    fn persist_or_log(&self) {
        if let Err(e) = self.persist() {
            tracing::error!(error = %e, "failed to save tasks; changes are kept in memory only");
        }
    }

    /// Replace the in-memory list with the contents of the backing file
    ///
    /// A missing file gives an empty list. Unreadable or malformed data is
    /// logged and also leaves the list empty.
    pub fn reload(&mut self) {
        self.tasks = match self.storage.load() {
            Ok(tasks) => tasks,
            Err(e @ StorageError::Malformed { .. }) => {
                tracing::warn!(error = %e, "discarding unreadable task data");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load tasks");
                Vec::new()
            }
        };
        tracing::debug!(count = self.tasks.len(), path = %self.path().display(), "loaded tasks");
    }
}
