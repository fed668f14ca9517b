//! FRB-facing crate for the board UI.

pub mod api;
