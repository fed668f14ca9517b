//! Seed input for a board session.
//!
//! # Responsibility
//! - Turn externally supplied task records (JSON) into validated `Task`s.
//! - Provide a deterministic demo board for local runs.
//!
//! # Invariants
//! - Every seeded record passes the same validation as `Task::with_id`.
//! - Record order in the input is the board insertion order.

use crate::model::task::{Task, TaskStatus};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Seed loading failures.
#[derive(Debug)]
pub enum SeedError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed file `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid seed data: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Parses a JSON array of task records.
///
/// # Errors
/// - `SeedError::Json` for malformed JSON, unknown statuses or blank ids.
pub fn parse_seed(json: &str) -> Result<Vec<Task>, SeedError> {
    let tasks: Vec<Task> = serde_json::from_str(json)?;
    Ok(tasks)
}

/// Reads and parses a seed file.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Task>, SeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| {
        error!(
            "event=seed_load module=seed status=error error_code=seed_read_failed error={}",
            source
        );
        SeedError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    match parse_seed(&raw) {
        Ok(tasks) => {
            info!(
                "event=seed_load module=seed status=ok source=file task_count={}",
                tasks.len()
            );
            Ok(tasks)
        }
        Err(err) => {
            error!(
                "event=seed_load module=seed status=error error_code=seed_parse_failed error={}",
                err
            );
            Err(err)
        }
    }
}

/// Returns the built-in demo board.
pub fn fixture_tasks() -> Vec<Task> {
    [
        ("task-1", "Sketch board layout", TaskStatus::Todo),
        ("task-2", "Wire sign-in flow", TaskStatus::InProgress),
        ("task-3", "Set up project", TaskStatus::Done),
        ("task-4", "Write drag-and-drop tests", TaskStatus::Todo),
    ]
    .into_iter()
    .filter_map(|(id, title, status)| Task::with_id(id, title, status).ok())
    .collect()
}
