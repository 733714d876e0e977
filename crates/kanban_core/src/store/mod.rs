//! In-memory entity store for one board session.
//!
//! # Responsibility
//! - Own the ordered column and task sequences.
//! - Publish one change notification per committed mutation.
//!
//! # Invariants
//! - Column ids are unique; task ids are unique.
//! - Every task references a column present in the store.
//! - Sequence order is significant and only changes through whole-sequence
//!   replacement, so observers never see a half-applied move.

pub mod board_store;
pub mod observer;

use crate::model::id::{ColumnId, TaskId};
use crate::model::EntityValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while seeding a store from caller-provided entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    InvalidEntity(EntityValidationError),
    DuplicateColumnId(ColumnId),
    DuplicateTaskId(TaskId),
    OrphanTask {
        task_id: TaskId,
        column_id: ColumnId,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEntity(err) => write!(f, "{err}"),
            Self::DuplicateColumnId(id) => write!(f, "duplicate column id: {id}"),
            Self::DuplicateTaskId(id) => write!(f, "duplicate task id: {id}"),
            Self::OrphanTask { task_id, column_id } => write!(
                f,
                "task {task_id} references missing column {column_id}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEntity(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EntityValidationError> for StoreError {
    fn from(value: EntityValidationError) -> Self {
        Self::InvalidEntity(value)
    }
}
