//! Drag-and-drop transfer abstractions.
//!
//! # Responsibility
//! - Model the host platform's ephemeral drag payload as a narrow key-value
//!   channel.
//!
//! # Invariants
//! - A channel carries data for one gesture only; it is never board state.

pub mod transfer;
