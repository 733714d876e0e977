//! Core domain logic for the kanban board.
//! This crate is the single source of truth for board invariants.

pub mod config;
pub mod dnd;
pub mod logging;
pub mod model;
pub mod service;
pub mod session;
pub mod store;

pub use config::BoardConfig;
pub use dnd::controller::{DragController, DragState};
pub use dnd::event::{DragEnd, DragOver, DragPayload, DragStart};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::column::Column;
pub use model::id::{ColumnId, IdGenerator, RandomIdGenerator, SequentialIdGenerator, TaskId};
pub use model::task::Task;
pub use model::EntityValidationError;
pub use service::board_service::BoardService;
pub use session::BoardSession;
pub use store::board_store::{BoardSnapshot, BoardStore};
pub use store::observer::{BoardChange, BoardObserver, ChangeKind};
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
