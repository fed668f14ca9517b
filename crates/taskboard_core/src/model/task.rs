//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record rendered by board columns.
//! - Own status parsing and display labels for the closed status set.
//!
//! # Invariants
//! - `id` is non-blank and never changes after construction.
//! - `status` is always a `TaskStatus` variant; there is no open string form.
//! - Deserialization applies the same validation as `Task::with_id`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque task identifier.
///
/// Generated ids are UUID v4 strings; seeded ids may be any non-blank string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Creates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps a caller-provided identifier verbatim.
    ///
    /// Ids are opaque: whitespace is kept, so `" a"` and `"a"` stay distinct.
    /// Empty or whitespace-only input is rejected.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, TaskValidationError> {
        let value = value.as_ref();
        if value.trim().is_empty() {
            return Err(TaskValidationError::BlankId);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.0
    }
}

/// Workflow state a task occupies; one board column per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet.
    Todo,
    /// Work is in progress.
    InProgress,
    /// Completed.
    Done,
}

impl TaskStatus {
    /// Every status in board display order.
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Stable wire value (matches serde representation).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Human-readable column title.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskValidationError;

    /// Accepts the wire value plus the spellings UI column ids commonly use
    /// (`to_do`, `inprogress`, `in-progress`, `To Do`), case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value
            .trim()
            .to_ascii_lowercase()
            .replace(['-', ' '], "_");
        match normalized.as_str() {
            "todo" | "to_do" => Ok(Self::Todo),
            "in_progress" | "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(TaskValidationError::UnknownStatus(value.trim().to_string())),
        }
    }
}

/// Validation failures for task construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    BlankId,
    UnknownStatus(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "task id must not be blank"),
            Self::UnknownStatus(value) => write!(
                f,
                "unknown task status `{value}`; expected todo|in_progress|done"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Only `status` is manipulated by board logic; `title` and `description`
/// are payload carried through to the UI untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
}

impl Task {
    /// Creates a new `Todo` task with a generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            title: title.into(),
            description: None,
            status: TaskStatus::Todo,
        }
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by seed/import paths where identity already exists externally.
    ///
    /// # Errors
    /// - `TaskValidationError::BlankId` when `id` is empty or only whitespace.
    pub fn with_id(
        id: impl AsRef<str>,
        title: impl Into<String>,
        status: TaskStatus,
    ) -> Result<Self, TaskValidationError> {
        Ok(Self {
            id: TaskId::parse(id)?,
            title: title.into(),
            description: None,
            status,
        })
    }

    /// Builder-style description setter.
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
