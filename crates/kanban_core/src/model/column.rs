//! Column domain model.

use crate::model::id::ColumnId;
use crate::model::EntityValidationError;
use serde::{Deserialize, Serialize};

/// Named, ordered group owning zero or more tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Immutable after creation.
    pub id: ColumnId,
    /// User-facing label.
    pub title: String,
}

impl Column {
    /// Creates a column with a caller-provided id.
    ///
    /// # Errors
    /// - Returns `EntityValidationError::NilId` for the nil UUID.
    pub fn with_id(
        id: ColumnId,
        title: impl Into<String>,
    ) -> Result<Self, EntityValidationError> {
        let column = Self {
            id,
            title: title.into(),
        };
        column.validate()?;
        Ok(column)
    }

    /// Validates identity invariants.
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        if self.id.is_nil() {
            return Err(EntityValidationError::NilId);
        }
        Ok(())
    }
}
