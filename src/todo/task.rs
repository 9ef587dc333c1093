use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Default category assigned to tasks that were not filed anywhere else
pub const DEFAULT_CATEGORY: &str = "General";

/// Task priority
///
/// Ordering for display is High, Medium, Low (see [`Priority::rank`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Sort rank used by priority listings (lower sorts first)
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Canonical spelling used in the data file
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Lenient conversion used when reading stored records.
    ///
    /// Anything that is not a recognized priority is treated as Medium, and
    /// is written back as Medium on the next save.
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::debug!(priority = value, "unknown stored priority, loading as Medium");
            Priority::default()
        })
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: High, Medium, Low",
                s
            )),
        }
    }
}

/// A single to-do item
///
/// The title doubles as the task's identifier inside a [`super::TaskStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Title, unique within a store
    pub title: String,
    /// Free-form description, may be empty
    pub description: String,
    /// Optional due date (no time component)
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub completed: bool,
    pub category: String,
}

impl Task {
    /// Create an open task with default priority and category
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due_date: None,
            priority: Priority::default(),
            completed: false,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}
