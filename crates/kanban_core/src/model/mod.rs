//! Board domain model.
//!
//! # Responsibility
//! - Define canonical column/task records shared by store, commands and drag flow.
//! - Provide identifier types and generation strategies.
//!
//! # Invariants
//! - Every entity is identified by a stable, non-nil UUID.
//! - Ids are never reused within one session.

pub mod column;
pub mod id;
pub mod task;

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Validation errors for column/task construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityValidationError {
    /// Nil UUID is reserved and never identifies a live entity.
    NilId,
    /// Task parent column id is nil.
    NilColumnId { task_id: Uuid },
}

impl Display for EntityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "entity id must not be nil"),
            Self::NilColumnId { task_id } => {
                write!(f, "task {task_id} must reference a non-nil column id")
            }
        }
    }
}

impl Error for EntityValidationError {}
