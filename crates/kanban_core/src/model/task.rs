//! Task domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `column_id` points at a live column whenever the store is observed.

use crate::model::id::{ColumnId, TaskId};
use crate::model::EntityValidationError;
use serde::{Deserialize, Serialize};

/// Work item belonging to exactly one column at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Immutable after creation.
    pub id: TaskId,
    /// Owning column. Serialized as `columnId` to match the rendering boundary.
    #[serde(rename = "columnId")]
    pub column_id: ColumnId,
    /// Task body text.
    pub content: String,
}

impl Task {
    /// Creates a task with caller-provided ids.
    ///
    /// # Errors
    /// - `EntityValidationError::NilId` when `id` is nil.
    /// - `EntityValidationError::NilColumnId` when `column_id` is nil.
    pub fn with_id(
        id: TaskId,
        column_id: ColumnId,
        content: impl Into<String>,
    ) -> Result<Self, EntityValidationError> {
        let task = Self {
            id,
            column_id,
            content: content.into(),
        };
        task.validate()?;
        Ok(task)
    }

    /// Validates identity invariants.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        if self.id.is_nil() {
            return Err(EntityValidationError::NilId);
        }
        if self.column_id.is_nil() {
            return Err(EntityValidationError::NilColumnId { task_id: self.id });
        }
        Ok(())
    }

    /// Returns whether this task currently belongs to `column_id`.
    pub fn belongs_to(&self, column_id: ColumnId) -> bool {
        self.column_id == column_id
    }
}
