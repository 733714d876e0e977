//! Column/task relocation and reparenting.
//!
//! # Responsibility
//! - Decide where a dragged entity lands for one `(active, over)` pair.
//! - Return the complete new sequence so callers commit it in one step.
//!
//! # Invariants
//! - Functions are pure: inputs are never mutated.
//! - `None` means no-op; `Some` holds exactly the input ids, one relocated.
//! - A task's parent is reassigned before relocation, inside the same result.

use crate::dnd::event::DragPayload;
use crate::model::column::Column;
use crate::model::id::{ColumnId, TaskId};
use crate::model::task::Task;
use log::debug;

/// Moves the element at `from` to `to`, shifting the elements in between.
///
/// Out-of-range indices leave the sequence unchanged.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from >= moved.len() || to >= moved.len() {
        return moved;
    }
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// Relocates column `active` to the position currently held by `over`.
pub fn move_column(columns: &[Column], active: ColumnId, over: ColumnId) -> Option<Vec<Column>> {
    if active == over {
        return None;
    }
    let from = columns.iter().position(|column| column.id == active)?;
    let to = columns.iter().position(|column| column.id == over)?;
    Some(array_move(columns, from, to))
}

/// Moves task `active` into `over`'s column and onto `over`'s position.
pub fn move_task_over_task(tasks: &[Task], active: TaskId, over: TaskId) -> Option<Vec<Task>> {
    if active == over {
        return None;
    }
    let from = tasks.iter().position(|task| task.id == active)?;
    let to = tasks.iter().position(|task| task.id == over)?;

    let mut reparented = tasks.to_vec();
    reparented[from].column_id = tasks[to].column_id;
    Some(array_move(&reparented, from, to))
}

/// Reparents task `active` into `column` without changing its position.
///
/// Returns `None` when the column is unknown or already owns the task.
pub fn move_task_over_column(
    tasks: &[Task],
    columns: &[Column],
    active: TaskId,
    column: ColumnId,
) -> Option<Vec<Task>> {
    if !columns.iter().any(|candidate| candidate.id == column) {
        return None;
    }
    let index = tasks.iter().position(|task| task.id == active)?;
    if tasks[index].belongs_to(column) {
        return None;
    }

    let mut reparented = tasks.to_vec();
    reparented[index].column_id = column;
    Some(reparented)
}

/// Hover step for a task drag. Only task-over-task and task-over-column
/// pairings move anything.
pub fn task_over(
    tasks: &[Task],
    columns: &[Column],
    active: DragPayload,
    over: DragPayload,
) -> Option<Vec<Task>> {
    if active.id() == over.id() {
        return None;
    }

    let result = match (active, over) {
        (DragPayload::Task(active), DragPayload::Task(over)) => {
            move_task_over_task(tasks, active, over)
        }
        (DragPayload::Task(active), DragPayload::Column(column)) => {
            move_task_over_column(tasks, columns, active, column)
        }
        (DragPayload::Column(_), _) => {
            debug!("event=task_over module=dnd status=noop reason=active_not_task");
            return None;
        }
    };

    if result.is_none() {
        debug!("event=task_over module=dnd status=noop reason=unresolved_or_unchanged");
    }
    result
}

/// Drop step for a column drag. Only column-over-column pairings move.
pub fn column_drop(
    columns: &[Column],
    active: DragPayload,
    over: DragPayload,
) -> Option<Vec<Column>> {
    match (active, over) {
        (DragPayload::Column(active), DragPayload::Column(over)) => {
            let result = move_column(columns, active, over);
            if result.is_none() && active != over {
                debug!("event=column_drop module=dnd status=noop reason=not_found");
            }
            result
        }
        _ => {
            debug!("event=column_drop module=dnd status=noop reason=unsupported_pair");
            None
        }
    }
}
