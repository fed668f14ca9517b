//! FFI use-case API for the board UI.
//!
//! # Responsibility
//! - Expose synchronous board entry points to the UI via FRB.
//! - Hold the single board session (tasks + drag payload) for the process.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported in response envelopes, never thrown.
//! - The drag payload is cleared after every drop attempt.

use log::warn;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};
use taskboard_core::{
    core_version as core_version_inner, fixture_tasks, init_logging as init_logging_inner,
    parse_seed, ping as ping_inner, BoardService, ColumnView, MemoryTransfer, Task, TaskCollection,
    TaskStatus,
};

struct BoardSession {
    service: BoardService,
    transfer: MemoryTransfer,
}

static SESSION: Lazy<Mutex<BoardSession>> = Lazy::new(|| {
    Mutex::new(BoardSession {
        service: BoardService::default(),
        transfer: MemoryTransfer::new(),
    })
});

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task as rendered by a column card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Wire status (`todo|in_progress|done`).
    pub status: String,
}

/// One column with its cards, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnItem {
    pub status: String,
    pub title: String,
    pub tasks: Vec<TaskItem>,
}

/// Result envelope for board mutations that may fail on input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    pub ok: bool,
    /// Created task id, when the action creates one.
    pub task_id: Option<String>,
    pub message: String,
    /// Board revision after the action.
    pub revision: u64,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, task_id: Option<String>, revision: u64) -> Self {
        Self {
            ok: true,
            task_id,
            message: message.into(),
            revision,
        }
    }

    fn failure(message: impl Into<String>, revision: u64) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
            revision,
        }
    }
}

/// Result envelope for a drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDropResponse {
    /// Whether a task changed column; UI refreshes only when `true`.
    pub moved: bool,
    pub revision: u64,
    pub message: String,
}

/// Replaces the board with tasks parsed from a JSON array.
///
/// # FFI contract
/// - On parse failure the current board is kept unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn board_load_seed(seed_json: String) -> BoardActionResponse {
    let mut session = lock_session();
    match parse_seed(seed_json.as_str()) {
        Ok(tasks) => {
            let count = tasks.len();
            reset_session(&mut session, tasks);
            BoardActionResponse::success(
                format!("Loaded {count} task(s)."),
                None,
                session.service.revision(),
            )
        }
        Err(err) => {
            warn!(
                "event=board_load_seed module=ffi status=error error={}",
                err
            );
            BoardActionResponse::failure(
                format!("board_load_seed failed: {err}"),
                session.service.revision(),
            )
        }
    }
}

/// Replaces the board with the built-in demo tasks.
#[flutter_rust_bridge::frb(sync)]
pub fn board_load_fixture() -> BoardActionResponse {
    let mut session = lock_session();
    let tasks = fixture_tasks();
    let count = tasks.len();
    reset_session(&mut session, tasks);
    BoardActionResponse::success(
        format!("Loaded {count} task(s)."),
        None,
        session.service.revision(),
    )
}

/// Returns every column with its tasks.
#[flutter_rust_bridge::frb(sync)]
pub fn board_columns() -> Vec<ColumnItem> {
    lock_session()
        .service
        .columns()
        .into_iter()
        .map(to_column_item)
        .collect()
}

/// Returns tasks of one column; unknown status strings yield an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn board_tasks_by_status(status: String) -> Vec<TaskItem> {
    let Ok(status) = status.parse::<TaskStatus>() else {
        return Vec::new();
    };
    lock_session()
        .service
        .tasks()
        .by_status(status)
        .into_iter()
        .map(to_task_item)
        .collect()
}

/// Creates a `todo` task.
#[flutter_rust_bridge::frb(sync)]
pub fn board_create_task(title: String, description: Option<String>) -> BoardActionResponse {
    let mut session = lock_session();
    let title = title.trim();
    if title.is_empty() {
        return BoardActionResponse::failure(
            "board_create_task failed: title must not be empty",
            session.service.revision(),
        );
    }

    let description = description
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    let id = session.service.create_task(title, description);
    BoardActionResponse::success(
        "Task created.",
        Some(id.to_string()),
        session.service.revision(),
    )
}

/// Records the start of a drag on `task_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_begin_drag(task_id: String) {
    let mut guard = lock_session();
    let session = &mut *guard;
    session
        .service
        .start_drag(task_id.as_str(), &mut session.transfer);
}

/// Completes the current drag over the column for `status`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_complete_drop(status: String) -> BoardDropResponse {
    let mut guard = lock_session();
    let session = &mut *guard;
    let response = match status.parse::<TaskStatus>() {
        Ok(status) => {
            let moved = session.service.drop_on_column(&session.transfer, status);
            BoardDropResponse {
                moved,
                revision: session.service.revision(),
                message: if moved {
                    "Task moved.".to_string()
                } else {
                    "No change.".to_string()
                },
            }
        }
        Err(err) => BoardDropResponse {
            moved: false,
            revision: session.service.revision(),
            message: format!("board_complete_drop failed: {err}"),
        },
    };
    session.transfer.clear();
    response
}

/// Current board revision; the UI re-renders when it changes.
#[flutter_rust_bridge::frb(sync)]
pub fn board_revision() -> u64 {
    lock_session().service.revision()
}

// A panic while holding the lock cannot leave the board half-mutated, so a
// poisoned lock is recovered instead of propagated across FFI.
fn lock_session() -> MutexGuard<'static, BoardSession> {
    SESSION
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn reset_session(session: &mut BoardSession, tasks: Vec<Task>) {
    session
        .service
        .replace_tasks(TaskCollection::from_tasks(tasks));
    session.transfer.clear();
}

fn to_column_item(view: ColumnView) -> ColumnItem {
    ColumnItem {
        status: view.status.as_str().to_string(),
        title: view.title.to_string(),
        tasks: view.tasks.into_iter().map(to_task_item).collect(),
    }
}

fn to_task_item(task: Task) -> TaskItem {
    TaskItem {
        id: task.id.to_string(),
        title: task.title,
        description: task.description,
        status: task.status.as_str().to_string(),
    }
}
