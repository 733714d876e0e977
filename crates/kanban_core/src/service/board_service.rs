//! Board command service.
//!
//! # Responsibility
//! - Provide total, synchronous command entry points for thin UI controls.
//! - Allocate ids and default labels for new entities.
//!
//! # Invariants
//! - Commands never fail: an unknown id is a logged no-op.
//! - A task is only created under an existing column.
//! - Deleting a column removes its tasks in the same store step.

use crate::config::BoardConfig;
use crate::model::column::Column;
use crate::model::id::{ColumnId, IdGenerator, RandomIdGenerator, TaskId};
use crate::model::task::Task;
use crate::store::board_store::BoardStore;
use log::{debug, info};

/// Use-case service owning the board store.
#[derive(Debug)]
pub struct BoardService<G: IdGenerator = RandomIdGenerator> {
    store: BoardStore,
    ids: G,
    config: BoardConfig,
}

impl BoardService<RandomIdGenerator> {
    /// Creates a service over an empty board with random ids.
    pub fn new(config: BoardConfig) -> Self {
        Self::with_generator(config, RandomIdGenerator)
    }
}

impl<G: IdGenerator> BoardService<G> {
    /// Creates a service over an empty board with the given id source.
    pub fn with_generator(config: BoardConfig, ids: G) -> Self {
        Self::from_store(BoardStore::new(), config, ids)
    }

    /// Wraps an already seeded store.
    pub fn from_store(store: BoardStore, config: BoardConfig, ids: G) -> Self {
        Self { store, ids, config }
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut BoardStore {
        &mut self.store
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Appends a new column titled after the current column count.
    pub fn create_column(&mut self) -> ColumnId {
        let id = self.store.allocate_id(&mut self.ids);
        let title = self.config.column_title(self.store.columns().len());
        self.store.push_column(Column { id, title });
        info!(
            "event=column_create module=service status=ok columns={}",
            self.store.columns().len()
        );
        id
    }

    /// Removes a column and every task it owns.
    ///
    /// Returns `false` when the column does not exist.
    pub fn delete_column(&mut self, id: ColumnId) -> bool {
        match self.store.remove_column(id) {
            Some(removed_tasks) => {
                info!(
                    "event=column_delete module=service status=ok removed_tasks={}",
                    removed_tasks
                );
                true
            }
            None => {
                debug!("event=column_delete module=service status=noop reason=not_found");
                false
            }
        }
    }

    /// Replaces one column title.
    pub fn rename_column(&mut self, id: ColumnId, title: impl Into<String>) -> bool {
        let renamed = self.store.rename_column(id, title.into());
        if !renamed {
            debug!("event=column_rename module=service status=noop reason=not_found");
        }
        renamed
    }

    /// Appends a new task to `column_id`.
    ///
    /// Returns `None` when the column does not exist.
    pub fn create_task(&mut self, column_id: ColumnId) -> Option<TaskId> {
        if !self.store.contains_column(column_id) {
            debug!("event=task_create module=service status=noop reason=column_not_found");
            return None;
        }

        let id = self.store.allocate_id(&mut self.ids);
        let content = self.config.task_content(self.store.tasks().len());
        let pushed = self.store.push_task(Task {
            id,
            column_id,
            content,
        });
        debug_assert!(pushed, "parent column was checked above");
        info!(
            "event=task_create module=service status=ok tasks={}",
            self.store.tasks().len()
        );
        Some(id)
    }

    /// Removes one task.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let removed = self.store.remove_task(id);
        if removed {
            info!("event=task_delete module=service status=ok");
        } else {
            debug!("event=task_delete module=service status=noop reason=not_found");
        }
        removed
    }

    /// Replaces one task body.
    pub fn edit_task(&mut self, id: TaskId, content: impl Into<String>) -> bool {
        let edited = self.store.edit_task(id, content.into());
        if !edited {
            debug!("event=task_edit module=service status=noop reason=not_found");
        }
        edited
    }
}
