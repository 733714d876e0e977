//! Drag notifications consumed by the interaction controller.

use crate::model::id::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind-tagged reference to a draggable entity or drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id")]
pub enum DragPayload {
    Column(ColumnId),
    Task(TaskId),
}

impl DragPayload {
    /// Raw id regardless of kind.
    pub fn id(&self) -> Uuid {
        match self {
            Self::Column(id) | Self::Task(id) => *id,
        }
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }

    pub fn is_task(&self) -> bool {
        matches!(self, Self::Task(_))
    }
}

/// Pointer lifted an entity past the sensor's activation threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragStart {
    pub active: DragPayload,
}

/// Pointer moved while dragging. `over` is `None` outside any drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOver {
    pub active: DragPayload,
    pub over: Option<DragPayload>,
}

/// Pointer released. `over` is `None` when dropped outside any target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub active: DragPayload,
    pub over: Option<DragPayload>,
}

impl DragOver {
    pub fn new(active: DragPayload, over: Option<DragPayload>) -> Self {
        Self { active, over }
    }
}

impl DragEnd {
    pub fn new(active: DragPayload, over: Option<DragPayload>) -> Self {
        Self { active, over }
    }
}
