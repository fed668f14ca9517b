//! Core use-case services.
//!
//! # Responsibility
//! - Wrap board state in the entry points UI/FFI layers call.
//! - Keep hosts decoupled from collection internals.

pub mod board_service;
