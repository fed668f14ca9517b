//! Board use-case service.
//!
//! # Responsibility
//! - Provide the entry points a UI layer calls for rendering and gestures.
//! - Track a render revision so hosts know when columns must be redrawn.
//!
//! # Invariants
//! - `revision` increases by exactly one per visible change and never on a
//!   rejected move.
//! - All mutation goes through `TaskCollection`; the service keeps no
//!   parallel task state.

use crate::board::collection::TaskCollection;
use crate::board::column::{board_columns, column_for, ColumnView};
use crate::dnd::transfer::{TransferChannel, TASK_ID_TRANSFER_KEY};
use crate::model::task::{Task, TaskId, TaskStatus};
use log::{debug, info};

/// Board facade owning one session's collection.
#[derive(Debug, Clone, Default)]
pub struct BoardService {
    tasks: TaskCollection,
    revision: u64,
}

impl BoardService {
    pub fn new(tasks: TaskCollection) -> Self {
        Self { tasks, revision: 0 }
    }

    /// Creates a service seeded with `tasks` in order.
    pub fn from_seed(tasks: impl IntoIterator<Item = Task>) -> Self {
        let service = Self::new(TaskCollection::from_tasks(tasks));
        info!(
            "event=board_seed module=board status=ok task_count={}",
            service.tasks.len()
        );
        service
    }

    /// Swaps in a freshly loaded collection.
    ///
    /// Counts as one visible change, so the revision keeps increasing across
    /// reloads.
    pub fn replace_tasks(&mut self, tasks: TaskCollection) {
        self.tasks = tasks;
        self.bump();
        info!(
            "event=board_replace module=board status=ok task_count={} revision={}",
            self.tasks.len(),
            self.revision
        );
    }

    /// Read-only access to the underlying collection.
    pub fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn task(&self, id: &str) -> Option<Task> {
        self.tasks.get(id)
    }

    /// Creates a `Todo` task with a generated id.
    pub fn create_task(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
    ) -> TaskId {
        let mut task = Task::new(title);
        task.description = description;
        let id = task.id.clone();
        self.add_task(task);
        id
    }

    /// Appends a caller-built task.
    pub fn add_task(&mut self, task: Task) {
        info!(
            "event=task_add module=board status=ok task_id={} column={}",
            task.id, task.status
        );
        self.tasks.add(task);
        self.bump();
    }

    /// Moves a task directly (keyboard/menu path).
    pub fn move_task(&mut self, id: &str, status: TaskStatus) -> bool {
        let moved = self.tasks.update_status(id, status);
        self.record_move("task_move", id, status, moved);
        moved
    }

    /// Starts a drag gesture for `id`.
    pub fn start_drag<C: TransferChannel + ?Sized>(&self, id: &str, channel: &mut C) {
        self.tasks.begin_drag(id, channel);
    }

    /// Finishes a drag gesture over the column for `status`.
    pub fn drop_on_column<C: TransferChannel + ?Sized>(
        &mut self,
        channel: &C,
        status: TaskStatus,
    ) -> bool {
        let dragged = channel.read(TASK_ID_TRANSFER_KEY).unwrap_or_default();
        let moved = self.tasks.complete_drop(channel, status);
        self.record_move("task_drop", &dragged, status, moved);
        moved
    }

    /// Snapshot of every column in display order.
    pub fn columns(&self) -> Vec<ColumnView> {
        board_columns()
            .iter()
            .map(|column| ColumnView::from_collection(*column, &self.tasks))
            .collect()
    }

    /// Snapshot of the column rendering `status`.
    pub fn column(&self, status: TaskStatus) -> ColumnView {
        ColumnView::from_collection(column_for(status), &self.tasks)
    }

    fn record_move(&mut self, event: &str, id: &str, status: TaskStatus, moved: bool) {
        if moved {
            self.bump();
            info!(
                "event={} module=board status=ok task_id={} to={} revision={}",
                event, id, status, self.revision
            );
        } else {
            debug!(
                "event={} module=board status=rejected task_id={} to={}",
                event, id, status
            );
        }
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
