//! Core domain logic for the task board.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod config;
pub mod dnd;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;

pub use board::collection::TaskCollection;
pub use board::column::{board_columns, column_for, BoardColumn, ColumnView};
pub use config::{ConfigError, CoreConfig};
pub use dnd::transfer::{MemoryTransfer, TransferChannel, TASK_ID_TRANSFER_KEY};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::task::{Task, TaskId, TaskStatus, TaskValidationError};
pub use seed::{fixture_tasks, load_seed_file, parse_seed, SeedError};
pub use service::board_service::BoardService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
