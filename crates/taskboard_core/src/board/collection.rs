//! In-memory task collection and drag/drop status transitions.
//!
//! # Responsibility
//! - Own the authoritative ordered task list for one board session.
//! - Provide the only sanctioned read/mutate paths for that list.
//!
//! # Invariants
//! - Reads return owned snapshots; callers never alias internal storage.
//! - Insertion order is preserved by every read.
//! - Status changes happen only through `update_status`/`complete_drop`.
//! - Unknown ids, no-op moves and missing drag payloads return `false`;
//!   nothing in this module errors or panics.
//! - Duplicate ids are tolerated; lookups resolve to the first match.

use crate::dnd::transfer::{TransferChannel, TASK_ID_TRANSFER_KEY};
use crate::model::task::{Task, TaskStatus};
use log::{debug, warn};

/// Ordered, exclusively owned set of board tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from seed records, keeping their order.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut collection = Self::new();
        for task in tasks {
            collection.add(task);
        }
        collection
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns a snapshot of every task in insertion order.
    pub fn all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Returns a snapshot of tasks in `status`, in insertion order.
    pub fn by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.status == status)
            .cloned()
            .collect()
    }

    /// Number of tasks currently in `status`.
    pub fn count_by_status(&self, status: TaskStatus) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status == status)
            .count()
    }

    /// Returns a snapshot of the first task with `id`.
    pub fn get(&self, id: &str) -> Option<Task> {
        self.position(id).map(|index| self.tasks[index].clone())
    }

    /// Appends a task. The caller owns id assignment.
    pub fn add(&mut self, task: Task) {
        if self.position(task.id.as_str()).is_some() {
            warn!(
                "event=task_add module=board status=duplicate_id task_id={}",
                task.id
            );
        }
        self.tasks.push(task);
    }

    /// Moves the task with `id` to `new_status`.
    ///
    /// Returns `true` only when a status actually changed. Moving a task onto
    /// its current column is reported as `false` so callers skip refreshes.
    pub fn update_status(&mut self, id: &str, new_status: TaskStatus) -> bool {
        let Some(index) = self.position(id) else {
            debug!(
                "event=task_status_update module=board status=not_found task_id={} to={}",
                id, new_status
            );
            return false;
        };

        let task = &mut self.tasks[index];
        if task.status == new_status {
            debug!(
                "event=task_status_update module=board status=noop task_id={} to={}",
                id, new_status
            );
            return false;
        }

        let from = task.status;
        task.status = new_status;
        debug!(
            "event=task_status_update module=board status=ok task_id={} from={} to={}",
            id, from, new_status
        );
        true
    }

    /// Stashes `id` in the drag payload. Existence is not checked; the drag
    /// origin already holds a task reference.
    pub fn begin_drag<C: TransferChannel + ?Sized>(&self, id: &str, channel: &mut C) {
        channel.write(TASK_ID_TRANSFER_KEY, id);
    }

    /// Reads the dragged id back out and applies the move.
    ///
    /// A missing or blank payload means the drop did not come from a board
    /// drag and is ignored. Any other payload is matched against ids exactly.
    pub fn complete_drop<C: TransferChannel + ?Sized>(
        &mut self,
        channel: &C,
        target_status: TaskStatus,
    ) -> bool {
        let Some(raw_id) = channel.read(TASK_ID_TRANSFER_KEY) else {
            debug!(
                "event=task_drop module=board status=no_payload to={}",
                target_status
            );
            return false;
        };

        if raw_id.trim().is_empty() {
            debug!(
                "event=task_drop module=board status=no_payload to={}",
                target_status
            );
            return false;
        }

        self.update_status(&raw_id, target_status)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id.as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::TaskCollection;
    use crate::model::task::{Task, TaskStatus};

    #[test]
    fn from_tasks_keeps_seed_order() {
        let collection = TaskCollection::from_tasks([
            Task::with_id("a", "A", TaskStatus::Done).unwrap(),
            Task::with_id("b", "B", TaskStatus::Todo).unwrap(),
        ]);
        let ids: Vec<_> = collection
            .all()
            .into_iter()
            .map(|task| task.id.to_string())
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn get_returns_first_match_for_duplicate_ids() {
        let mut collection = TaskCollection::new();
        collection.add(Task::with_id("dup", "first", TaskStatus::Todo).unwrap());
        collection.add(Task::with_id("dup", "second", TaskStatus::Done).unwrap());

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get("dup").unwrap().title, "first");
    }
}
