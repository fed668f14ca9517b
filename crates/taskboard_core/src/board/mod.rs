//! Board state: the task collection and its column projections.
//!
//! # Responsibility
//! - Hold the in-memory task list for one UI session.
//! - Derive column views from it on demand.
//!
//! # Invariants
//! - Columns never store tasks; they are filtered from the collection.
//! - Every task appears in exactly one column.

pub mod collection;
pub mod column;
