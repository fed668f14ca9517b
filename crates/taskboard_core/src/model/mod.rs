//! Board domain model.
//!
//! # Responsibility
//! - Define the task record shared by every column projection.
//! - Keep the status set closed so column logic is exhaustively checked.
//!
//! # Invariants
//! - Every task is identified by a non-blank `TaskId`.
//! - A task status is always one of `TaskStatus::ALL`.

pub mod task;
