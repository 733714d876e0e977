//! Store change notifications for rendering layers.

use crate::model::id::{ColumnId, TaskId};

/// What one committed mutation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    ColumnAdded(ColumnId),
    /// Column removal together with its cascade-deleted tasks.
    ColumnRemoved {
        column: ColumnId,
        removed_tasks: usize,
    },
    ColumnRenamed(ColumnId),
    ColumnsReordered,
    TaskAdded(TaskId),
    TaskRemoved(TaskId),
    TaskEdited(TaskId),
    /// Task sequence order changed without any parent change.
    TasksReordered,
    /// Task changed owning column (and possibly position).
    ///
    /// Per-column task lists for both `from` and `to` must be recomputed.
    TaskMoved {
        task: TaskId,
        from: ColumnId,
        to: ColumnId,
    },
}

/// Notification published after each committed store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardChange {
    /// Store version after the mutation.
    pub version: u64,
    pub kind: ChangeKind,
}

/// Receiver of store change notifications.
///
/// Called synchronously inside the mutating call, once the new state has
/// been committed and `change.version` reflects it.
pub trait BoardObserver {
    fn on_board_changed(&self, change: &BoardChange);
}
