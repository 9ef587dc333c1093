//! Plain record form of a task
//!
//! `TaskRecord` is what actually goes through serde. Keeping it separate from
//! [`Task`] lets the file format stay stringly-typed (dates as `YYYY-MM-DD`,
//! priorities as names) while the in-memory type stays strongly typed.

use super::task::{DEFAULT_CATEGORY, Priority, Task};
use crate::error::TaskError;
use crate::validation::parse_due_date;
use serde::{Deserialize, Serialize};

fn default_priority() -> String {
    Priority::default().as_str().to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Serialized shape of a single task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Due date as `YYYY-MM-DD`; the key is omitted when there is no date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "default_category")]
    pub category: String,
}

/// Top-level document written to the data file
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct TaskFile {
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

impl Task {
    /// Convert the task into its plain record form
    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
            priority: self.priority.as_str().to_string(),
            completed: self.completed,
            category: self.category.clone(),
        }
    }

    /// Build a task from a record
    ///
    /// # Errors
    /// * [`TaskError::MissingTitle`] if the title is empty or only whitespace
    /// * [`TaskError::MalformedDate`] if `due_date` is not `YYYY-MM-DD`
    pub fn from_record(record: TaskRecord) -> Result<Self, TaskError> {
        if record.title.trim().is_empty() {
            return Err(TaskError::MissingTitle);
        }

        let due_date = match record.due_date.as_deref() {
            Some(date_str) => Some(parse_due_date(date_str)?),
            None => None,
        };

        Ok(Task {
            title: record.title,
            description: record.description,
            due_date,
            priority: Priority::from_stored(&record.priority),
            completed: record.completed,
            category: record.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_record_round_trip_keeps_every_field() {
        let mut task = Task::new("Buy milk")
            .with_description("2 liters")
            .with_due_date(NaiveDate::from_ymd_opt(2024, 1, 10))
            .with_priority(Priority::High)
            .with_category("Errands");
        task.completed = true;

        let restored = Task::from_record(task.to_record()).unwrap();
        assert_eq!(restored, task);
    }

    #[test]
    fn test_to_record_formats_date() {
        let task = Task::new("Pay rent").with_due_date(NaiveDate::from_ymd_opt(2024, 3, 1));
        let record = task.to_record();
        assert_eq!(record.due_date.as_deref(), Some("2024-03-01"));
        assert_eq!(record.priority, "Medium");
    }

    #[test]
    fn test_from_record_rejects_malformed_date() {
        let mut record = Task::new("Pay rent").to_record();
        record.due_date = Some("03/01/2024".to_string());
        assert_eq!(
            Task::from_record(record),
            Err(TaskError::MalformedDate("03/01/2024".to_string()))
        );
    }

    #[test]
    fn test_from_record_requires_title() {
        let record = Task::new("").to_record();
        assert_eq!(Task::from_record(record), Err(TaskError::MissingTitle));
    }

    #[test]
    fn test_from_record_rejects_whitespace_title() {
        let record = Task::new(" \t ").to_record();
        assert_eq!(Task::from_record(record), Err(TaskError::MissingTitle));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let record: TaskRecord = toml::from_str(r#"title = "Call dentist""#).unwrap();
        let task = Task::from_record(record).unwrap();
        assert_eq!(task, Task::new("Call dentist"));
    }

    #[test]
    fn test_record_without_title_does_not_parse() {
        let result: Result<TaskRecord, _> = toml::from_str(r#"description = "orphan""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_stored_priority_loads_as_medium() {
        let mut record = Task::new("Water plants").to_record();
        record.priority = "Urgent".to_string();
        let task = Task::from_record(record).unwrap();
        assert_eq!(task.priority, Priority::Medium);
    }
}
