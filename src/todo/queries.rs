//! Filtered and sorted views over a TaskStore
//!
//! Listing never reorders the stored sequence; it hands back references in
//! display order.

use super::task::Task;
use super::task_store::TaskStore;
use std::str::FromStr;

/// Sort order for [`TaskStore::list`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Earliest due date first, undated tasks last
    DueDate,
    /// High, then Medium, then Low
    Priority,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "due_date" => Ok(SortKey::DueDate),
            "priority" => Ok(SortKey::Priority),
            _ => Err(format!(
                "Invalid sort key '{}'. Valid options are: due_date, priority",
                s
            )),
        }
    }
}

/// Filters and sort order for a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// `None` keeps insertion order
    pub sort_by: Option<SortKey>,
    /// Keep only tasks with this completion state
    pub completed: Option<bool>,
    /// Keep only tasks in exactly this category
    pub category: Option<String>,
}

impl ListOptions {
    fn matches(&self, task: &Task) -> bool {
        self.completed.is_none_or(|c| task.completed == c)
            && self.category.as_ref().is_none_or(|c| task.category == *c)
    }
}

/// Sort tasks in place; stable, so equal keys keep their relative order
pub fn sort_tasks(tasks: &mut [&Task], key: SortKey) {
    match key {
        SortKey::DueDate => tasks.sort_by_key(|t| (t.due_date.is_none(), t.due_date)),
        SortKey::Priority => tasks.sort_by_key(|t| t.priority.rank()),
    }
}

impl TaskStore {
    /// Produce a filtered, sorted view of the tasks for display
    pub fn list(&self, options: &ListOptions) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().filter(|t| options.matches(t)).collect();
        if let Some(key) = options.sort_by {
            sort_tasks(&mut tasks, key);
        }
        tasks
    }
}
