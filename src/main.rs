//! todo - command-line driver for the task tracker
//!
//! Each subcommand maps onto one `TaskStore` operation. All parsing and
//! rendering lives here; the library only sees validated values.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_tracker::formatting;
use todo_tracker::validation;
use todo_tracker::{ListOptions, Priority, SortKey, Task, TaskStore, TaskUpdate};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Personal task tracker backed by a local TOML file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task data file
    #[arg(short, long, env = "TODO_FILE", default_value = "tasks.toml")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new task
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        due: Option<NaiveDate>,
        /// High, Medium or Low
        #[arg(short, long, value_parser = validation::parse_priority, default_value = "Medium")]
        priority: Priority,
        #[arg(short, long, default_value = todo_tracker::todo::DEFAULT_CATEGORY)]
        category: String,
    },
    /// Remove a task
    Remove { title: String },
    /// Mark a task as completed
    Complete { title: String },
    /// Change fields of an existing task
    Update {
        /// Current title of the task
        title: String,
        /// New title (empty keeps the current one)
        #[arg(long = "title")]
        new_title: Option<String>,
        /// New description (an empty value clears it)
        #[arg(short, long)]
        description: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg, conflicts_with = "clear_due")]
        due: Option<NaiveDate>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
        #[arg(short, long, value_parser = validation::parse_priority)]
        priority: Option<Priority>,
        /// New category (empty keeps the current one)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List tasks
    List {
        /// Sort by due_date or priority
        #[arg(short, long, value_parser = validation::parse_sort_key)]
        sort: Option<SortKey>,
        /// Only completed tasks
        #[arg(long, conflicts_with = "pending")]
        completed: bool,
        /// Only pending tasks
        #[arg(long)]
        pending: bool,
        /// Only tasks in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show every field of one task
    Show { title: String },
    /// Rewrite the data file from the current list
    Save,
}

fn parse_date_arg(date_str: &str) -> Result<NaiveDate, String> {
    validation::parse_due_date(date_str).map_err(|e| e.to_string())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let mut store = TaskStore::open(&args.file);

    match args.command {
        Command::Add {
            title,
            description,
            due,
            priority,
            category,
        } => {
            let task = Task::new(title.clone())
                .with_description(description)
                .with_due_date(due)
                .with_priority(priority)
                .with_category(category);
            store.add(task)?;
            println!("Task '{}' added", title);
        }
        Command::Remove { title } => {
            if !store.remove(&title) {
                bail!("Task '{}' not found", title);
            }
            println!("Task '{}' removed", title);
        }
        Command::Complete { title } => {
            if !store.complete(&title) {
                bail!("Task '{}' not found", title);
            }
            println!("Task '{}' marked as completed", title);
        }
        Command::Update {
            title,
            new_title,
            description,
            due,
            clear_due,
            priority,
            category,
        } => {
            let due_date = if clear_due { Some(None) } else { due.map(Some) };
            let changes = TaskUpdate {
                title: new_title,
                description,
                due_date,
                priority,
                category,
            };
            if !store.update(&title, changes)? {
                bail!("Task '{}' not found", title);
            }
            println!("Task '{}' updated", title);
        }
        Command::List {
            sort,
            completed,
            pending,
            category,
        } => {
            let completed_filter = match (completed, pending) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let options = ListOptions {
                sort_by: sort,
                completed: completed_filter,
                category,
            };
            println!("{}", formatting::format_tasks(&store.list(&options)).trim_end());
        }
        Command::Show { title } => match store.get(&title) {
            Some(task) => print!("{}", formatting::format_task_detail(task)),
            None => bail!("Task '{}' not found", title),
        },
        Command::Save => {
            store
                .persist()
                .with_context(|| format!("Failed to save {}", store.path().display()))?;
            println!("Saved {} task(s) to {}", store.len(), store.path().display());
        }
    }

    Ok(())
}
