//! Ephemeral transfer channel used between drag start and drop.

use std::collections::BTreeMap;

/// Well-known key the dragged task id is stored under.
pub const TASK_ID_TRANSFER_KEY: &str = "taskId";

/// Minimal capability the board needs from a platform drag payload.
pub trait TransferChannel {
    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str);

    /// Returns the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;
}

/// In-process transfer channel.
///
/// Stands in for the platform object in hosts that route gestures through
/// Rust (FFI session, CLI) and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransfer {
    entries: BTreeMap<String, String>,
}

impl MemoryTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every stored value; called once a gesture ends.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TransferChannel for MemoryTransfer {
    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
