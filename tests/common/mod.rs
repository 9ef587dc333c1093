//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use todo_tracker::{Priority, Task, TaskStore};
use tracing_subscriber::fmt::MakeWriter;

/// Path to a not-yet-existing data file inside a fresh temporary directory
pub fn get_test_path() -> (PathBuf, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    (path, dir)
}

/// Open an empty store backed by a temporary file
pub fn get_test_store() -> (TaskStore, TempDir) {
    let (path, dir) = get_test_path();
    (TaskStore::open(path), dir)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Create a test task with the fields listings care about
pub fn create_test_task(title: &str, due: Option<NaiveDate>, priority: Priority) -> Task {
    Task::new(title).with_due_date(due).with_priority(priority)
}

pub fn titles(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.title.clone()).collect()
}

/// In-memory sink for formatted log lines
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a thread-local subscriber and return its result with the
/// log output it produced
pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}
