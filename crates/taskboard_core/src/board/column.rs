//! Fixed column definitions and per-column snapshots.

use crate::board::collection::TaskCollection;
use crate::model::task::{Task, TaskStatus};
use serde::Serialize;

/// One board column: the status it renders and its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    pub status: TaskStatus,
    pub title: &'static str,
}

const BOARD_COLUMNS: [BoardColumn; 3] = [
    BoardColumn {
        status: TaskStatus::Todo,
        title: TaskStatus::Todo.label(),
    },
    BoardColumn {
        status: TaskStatus::InProgress,
        title: TaskStatus::InProgress.label(),
    },
    BoardColumn {
        status: TaskStatus::Done,
        title: TaskStatus::Done.label(),
    },
];

/// Returns board columns in display order.
pub fn board_columns() -> &'static [BoardColumn] {
    &BOARD_COLUMNS
}

/// Returns the column definition rendering `status`.
pub fn column_for(status: TaskStatus) -> BoardColumn {
    match status {
        TaskStatus::Todo => BOARD_COLUMNS[0],
        TaskStatus::InProgress => BOARD_COLUMNS[1],
        TaskStatus::Done => BOARD_COLUMNS[2],
    }
}

/// Render-ready snapshot of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub status: TaskStatus,
    pub title: &'static str,
    pub tasks: Vec<Task>,
}

impl ColumnView {
    pub fn from_collection(column: BoardColumn, collection: &TaskCollection) -> Self {
        Self {
            status: column.status,
            title: column.title,
            tasks: collection.by_status(column.status),
        }
    }
}
