//! Board entity store.
//!
//! # Responsibility
//! - Hold the ordered column/task sequences and the store version.
//! - Apply commands and committed reorders as single logical steps.
//!
//! # Invariants
//! - Column removal drops the column's tasks in the same step.
//! - `version` increases by exactly one per committed mutation; no-ops leave
//!   it untouched.

use crate::model::column::Column;
use crate::model::id::{ColumnId, IdGenerator, TaskId};
use crate::model::task::Task;
use crate::store::observer::{BoardChange, BoardObserver, ChangeKind};
use crate::store::{StoreError, StoreResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use uuid::Uuid;

const MAX_ID_ATTEMPTS: usize = 16;

/// Serializable read model of the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub version: u64,
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
}

/// Single source of truth for one board session.
#[derive(Default)]
pub struct BoardStore {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    version: u64,
    observers: Vec<Arc<dyn BoardObserver>>,
}

impl Debug for BoardStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardStore")
            .field("columns", &self.columns)
            .field("tasks", &self.tasks)
            .field("version", &self.version)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl BoardStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store from existing entities, preserving their order.
    ///
    /// # Errors
    /// - `InvalidEntity` when any entity carries a nil id.
    /// - `DuplicateColumnId` / `DuplicateTaskId` on id reuse.
    /// - `OrphanTask` when a task references a column not in `columns`.
    pub fn from_parts(columns: Vec<Column>, tasks: Vec<Task>) -> StoreResult<Self> {
        let mut column_ids = HashSet::with_capacity(columns.len());
        for column in &columns {
            column.validate()?;
            if !column_ids.insert(column.id) {
                return Err(StoreError::DuplicateColumnId(column.id));
            }
        }

        let mut task_ids = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            task.validate()?;
            if !task_ids.insert(task.id) {
                return Err(StoreError::DuplicateTaskId(task.id));
            }
            if !column_ids.contains(&task.column_id) {
                return Err(StoreError::OrphanTask {
                    task_id: task.id,
                    column_id: task.column_id,
                });
            }
        }

        Ok(Self {
            columns,
            tasks,
            ..Self::default()
        })
    }

    /// Registers an observer notified after every committed mutation.
    pub fn subscribe(&mut self, observer: Arc<dyn BoardObserver>) {
        self.observers.push(observer);
    }

    /// Ordered column sequence (left to right).
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Ordered task sequence across all columns.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks owned by one column, in board order.
    pub fn tasks_in(&self, column_id: ColumnId) -> impl Iterator<Item = &Task> + '_ {
        self.tasks
            .iter()
            .filter(move |task| task.belongs_to(column_id))
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains_column(&self, id: ColumnId) -> bool {
        self.column(id).is_some()
    }

    pub fn contains_task(&self, id: TaskId) -> bool {
        self.task(id).is_some()
    }

    /// Monotonic mutation counter, `0` for a freshly created store.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Clones the current board into a serializable read model.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            version: self.version,
            columns: self.columns.clone(),
            tasks: self.tasks.clone(),
        }
    }

    /// Draws an id that no live column or task currently uses.
    pub(crate) fn allocate_id(&self, ids: &mut dyn IdGenerator) -> Uuid {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = ids.generate();
            if !self.is_id_taken(candidate) {
                return candidate;
            }
            debug!("event=id_collision module=store status=retry");
        }

        warn!(
            "event=id_collision module=store status=fallback attempts={}",
            MAX_ID_ATTEMPTS
        );
        loop {
            let candidate = Uuid::new_v4();
            if !self.is_id_taken(candidate) {
                return candidate;
            }
        }
    }

    fn is_id_taken(&self, id: Uuid) -> bool {
        id.is_nil() || self.contains_column(id) || self.contains_task(id)
    }

    pub(crate) fn push_column(&mut self, column: Column) {
        let id = column.id;
        self.columns.push(column);
        self.commit(ChangeKind::ColumnAdded(id));
    }

    pub(crate) fn rename_column(&mut self, id: ColumnId, title: String) -> bool {
        let Some(column) = self.columns.iter_mut().find(|column| column.id == id) else {
            return false;
        };
        column.title = title;
        self.commit(ChangeKind::ColumnRenamed(id));
        true
    }

    /// Removes one column and all of its tasks in the same step.
    ///
    /// Returns the number of cascade-deleted tasks, or `None` when absent.
    pub(crate) fn remove_column(&mut self, id: ColumnId) -> Option<usize> {
        let index = self.columns.iter().position(|column| column.id == id)?;

        let before = self.tasks.len();
        self.columns.remove(index);
        self.tasks.retain(|task| !task.belongs_to(id));
        let removed_tasks = before - self.tasks.len();

        self.commit(ChangeKind::ColumnRemoved {
            column: id,
            removed_tasks,
        });
        Some(removed_tasks)
    }

    /// Appends a task; rejected when its parent column is missing.
    pub(crate) fn push_task(&mut self, task: Task) -> bool {
        if !self.contains_column(task.column_id) {
            return false;
        }
        let id = task.id;
        self.tasks.push(task);
        self.commit(ChangeKind::TaskAdded(id));
        true
    }

    pub(crate) fn remove_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            return false;
        };
        self.tasks.remove(index);
        self.commit(ChangeKind::TaskRemoved(id));
        true
    }

    pub(crate) fn edit_task(&mut self, id: TaskId, content: String) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.content = content;
        self.commit(ChangeKind::TaskEdited(id));
        true
    }

    /// Commits a reordered column sequence.
    pub(crate) fn replace_columns(&mut self, columns: Vec<Column>) {
        debug_assert_eq!(columns.len(), self.columns.len());
        self.columns = columns;
        self.commit(ChangeKind::ColumnsReordered);
    }

    /// Commits a reordered/reparented task sequence produced for `moved`.
    pub(crate) fn replace_tasks(&mut self, tasks: Vec<Task>, moved: TaskId) {
        debug_assert_eq!(tasks.len(), self.tasks.len());
        let from = self.task(moved).map(|task| task.column_id);
        let to = tasks
            .iter()
            .find(|task| task.id == moved)
            .map(|task| task.column_id);

        self.tasks = tasks;
        let kind = match (from, to) {
            (Some(from), Some(to)) if from != to => ChangeKind::TaskMoved {
                task: moved,
                from,
                to,
            },
            _ => ChangeKind::TasksReordered,
        };
        self.commit(kind);
    }

    fn commit(&mut self, kind: ChangeKind) {
        self.version += 1;
        let change = BoardChange {
            version: self.version,
            kind,
        };
        for observer in &self.observers {
            observer.on_board_changed(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BoardStore;
    use crate::model::column::Column;
    use crate::model::id::IdGenerator;
    use crate::model::task::Task;
    use uuid::Uuid;

    struct StuckGenerator(Uuid);

    impl IdGenerator for StuckGenerator {
        fn generate(&mut self) -> Uuid {
            self.0
        }
    }

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn allocate_id_falls_back_when_generator_keeps_colliding() {
        let column = Column::with_id(id(1), "A").unwrap();
        let store = BoardStore::from_parts(vec![column], Vec::new()).unwrap();

        let allocated = store.allocate_id(&mut StuckGenerator(id(1)));
        assert_ne!(allocated, id(1));
        assert!(!allocated.is_nil());
    }

    #[test]
    fn allocate_id_never_returns_nil() {
        let store = BoardStore::new();
        let allocated = store.allocate_id(&mut StuckGenerator(Uuid::nil()));
        assert!(!allocated.is_nil());
    }

    #[test]
    fn remove_column_cascades_in_one_version_step() {
        let a = Column::with_id(id(1), "A").unwrap();
        let b = Column::with_id(id(2), "B").unwrap();
        let tasks = vec![
            Task::with_id(id(10), id(1), "t1").unwrap(),
            Task::with_id(id(11), id(2), "t2").unwrap(),
            Task::with_id(id(12), id(2), "t3").unwrap(),
        ];
        let mut store = BoardStore::from_parts(vec![a, b], tasks).unwrap();

        assert_eq!(store.remove_column(id(2)), Some(2));
        assert_eq!(store.version(), 1);
        assert_eq!(store.tasks().len(), 1);
        assert!(store.tasks().iter().all(|task| store.contains_column(task.column_id)));
    }

    #[test]
    fn push_task_rejects_missing_parent() {
        let mut store = BoardStore::new();
        let task = Task::with_id(id(10), id(1), "orphan").unwrap();
        assert!(!store.push_task(task));
        assert_eq!(store.version(), 0);
        assert!(store.tasks().is_empty());
    }
}
