//! Formatting helper functions for console output
//!
//! This module contains the rendering of tasks for the command-line driver.

use crate::todo::Task;

/// Format a single task as a one-line summary
///
/// # Example output
/// `[x] Buy milk (priority: High, category: Errands, due: 2024-01-10)`
pub fn format_task_line(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    let mut line = format!(
        "[{}] {} (priority: {}, category: {}",
        mark, task.title, task.priority, task.category
    );
    if let Some(due) = task.due_date {
        line.push_str(&format!(", due: {}", due));
    }
    line.push(')');
    line
}

/// Format a single task with every field, one per line
pub fn format_task_detail(task: &Task) -> String {
    let mut result = format!("Title: {}\n", task.title);
    if !task.description.is_empty() {
        result.push_str(&format!("  Description: {}\n", task.description));
    }
    match task.due_date {
        Some(due) => result.push_str(&format!("  Due date: {}\n", due)),
        None => result.push_str("  Due date: none\n"),
    }
    result.push_str(&format!("  Priority: {}\n", task.priority));
    result.push_str(&format!("  Category: {}\n", task.category));
    result.push_str(&format!(
        "  Status: {}\n",
        if task.completed { "completed" } else { "pending" }
    ));
    result
}

/// Format a listing into a display string
pub fn format_tasks(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        result.push_str("- ");
        result.push_str(&format_task_line(task));
        result.push('\n');
    }
    result
}
