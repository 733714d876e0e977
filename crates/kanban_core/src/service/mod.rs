//! Board use-case services.
//!
//! # Responsibility
//! - Expose the board commands (column/task create, delete, rename, edit).
//! - Keep callers decoupled from store mutation details.

pub mod board_service;
