//! Drag interaction state machine.
//!
//! # Responsibility
//! - Track which entity is lifted (`Idle`, column or task).
//! - Route hover/drop notifications to the reorder step for that state.
//!
//! # Invariants
//! - At most one entity is active at a time.
//! - Task moves commit on every hover; drop only resets state.
//! - Column moves commit on drop only; hover is ignored.
//! - Dropping outside any target cancels without mutation.

use crate::dnd::event::{DragEnd, DragOver, DragPayload, DragStart};
use crate::dnd::reorder;
use crate::model::id::{ColumnId, TaskId};
use crate::store::board_store::BoardStore;
use log::{debug, info, warn};

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingColumn(ColumnId),
    DraggingTask(TaskId),
}

impl DragState {
    /// Payload of the lifted entity, if any.
    pub fn active(&self) -> Option<DragPayload> {
        match *self {
            Self::Idle => None,
            Self::DraggingColumn(id) => Some(DragPayload::Column(id)),
            Self::DraggingTask(id) => Some(DragPayload::Task(id)),
        }
    }
}

/// Consumes drag notifications and commits reorders into a store.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    pub fn active_column_id(&self) -> Option<ColumnId> {
        match self.state {
            DragState::DraggingColumn(id) => Some(id),
            _ => None,
        }
    }

    pub fn active_task_id(&self) -> Option<TaskId> {
        match self.state {
            DragState::DraggingTask(id) => Some(id),
            _ => None,
        }
    }

    /// Lifts the entity named by `event`.
    ///
    /// Stays `Idle` when the entity no longer exists in `store`.
    pub fn drag_start(&mut self, store: &BoardStore, event: DragStart) {
        if self.is_dragging() {
            warn!("event=drag_start module=dnd status=replaced reason=drag_in_progress");
        }

        self.state = match event.active {
            DragPayload::Column(id) if store.contains_column(id) => DragState::DraggingColumn(id),
            DragPayload::Task(id) if store.contains_task(id) => DragState::DraggingTask(id),
            _ => {
                debug!("event=drag_start module=dnd status=noop reason=not_found");
                DragState::Idle
            }
        };

        if self.is_dragging() {
            debug!(
                "event=drag_start module=dnd status=ok kind={}",
                kind_label(event.active)
            );
        }
    }

    /// Hover step. Returns `true` when the store was mutated.
    pub fn drag_over(&mut self, store: &mut BoardStore, event: DragOver) -> bool {
        let DragState::DraggingTask(active_id) = self.state else {
            return false;
        };
        if event.active != DragPayload::Task(active_id) {
            debug!("event=drag_over module=dnd status=noop reason=active_mismatch");
            return false;
        }
        let Some(over) = event.over else {
            return false;
        };

        match reorder::task_over(store.tasks(), store.columns(), event.active, over) {
            Some(tasks) => {
                store.replace_tasks(tasks, active_id);
                true
            }
            None => false,
        }
    }

    /// Drop step. Always returns to `Idle`; returns `true` when the store was
    /// mutated.
    pub fn drag_end(&mut self, store: &mut BoardStore, event: DragEnd) -> bool {
        let previous = std::mem::take(&mut self.state);

        let Some(active) = previous.active() else {
            debug!("event=drag_end module=dnd status=noop reason=idle");
            return false;
        };
        if event.active != active {
            debug!("event=drag_end module=dnd status=noop reason=active_mismatch");
            return false;
        }
        let Some(over) = event.over else {
            debug!("event=drag_end module=dnd status=cancelled");
            return false;
        };

        match previous {
            DragState::DraggingColumn(_) => {
                match reorder::column_drop(store.columns(), active, over) {
                    Some(columns) => {
                        store.replace_columns(columns);
                        info!("event=column_reorder module=dnd status=ok");
                        true
                    }
                    None => false,
                }
            }
            // Task moves were committed during hover.
            DragState::DraggingTask(_) | DragState::Idle => false,
        }
    }
}

fn kind_label(payload: DragPayload) -> &'static str {
    match payload {
        DragPayload::Column(_) => "column",
        DragPayload::Task(_) => "task",
    }
}
