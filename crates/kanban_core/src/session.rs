//! One interactive board session.
//!
//! # Responsibility
//! - Bundle the board commands and the drag controller over one store.
//! - Expose the read view a renderer needs: ordered columns, ordered tasks,
//!   and the currently lifted entity.
//!
//! # Invariants
//! - Commands and drag steps run one at a time against the same store.

use crate::config::BoardConfig;
use crate::dnd::controller::{DragController, DragState};
use crate::dnd::event::{DragEnd, DragOver, DragStart};
use crate::model::column::Column;
use crate::model::id::{ColumnId, IdGenerator, RandomIdGenerator, TaskId};
use crate::model::task::Task;
use crate::service::board_service::BoardService;
use crate::store::board_store::{BoardSnapshot, BoardStore};
use crate::store::observer::BoardObserver;
use std::sync::Arc;

/// Board session owned by a single interactive user.
#[derive(Debug)]
pub struct BoardSession<G: IdGenerator = RandomIdGenerator> {
    service: BoardService<G>,
    drag: DragController,
}

impl BoardSession<RandomIdGenerator> {
    /// Starts an empty session with random ids.
    pub fn new(config: BoardConfig) -> Self {
        Self::from_service(BoardService::new(config))
    }
}

impl<G: IdGenerator> BoardSession<G> {
    /// Starts an empty session with the given id source.
    pub fn with_generator(config: BoardConfig, ids: G) -> Self {
        Self::from_service(BoardService::with_generator(config, ids))
    }

    /// Starts a session over a seeded store.
    pub fn from_store(store: BoardStore, config: BoardConfig, ids: G) -> Self {
        Self::from_service(BoardService::from_store(store, config, ids))
    }

    fn from_service(service: BoardService<G>) -> Self {
        Self {
            service,
            drag: DragController::new(),
        }
    }

    pub fn store(&self) -> &BoardStore {
        self.service.store()
    }

    pub fn subscribe(&mut self, observer: Arc<dyn BoardObserver>) {
        self.service.store_mut().subscribe(observer);
    }

    pub fn columns(&self) -> &[Column] {
        self.store().columns()
    }

    pub fn tasks(&self) -> &[Task] {
        self.store().tasks()
    }

    /// Tasks of one column in board order.
    pub fn tasks_in(&self, column_id: ColumnId) -> Vec<&Task> {
        self.store().tasks_in(column_id).collect()
    }

    pub fn version(&self) -> u64 {
        self.store().version()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.store().snapshot()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Column currently lifted, resolved against the live store.
    pub fn active_column(&self) -> Option<&Column> {
        self.drag
            .active_column_id()
            .and_then(|id| self.store().column(id))
    }

    /// Task currently lifted, resolved against the live store.
    pub fn active_task(&self) -> Option<&Task> {
        self.drag
            .active_task_id()
            .and_then(|id| self.store().task(id))
    }

    pub fn create_column(&mut self) -> ColumnId {
        self.service.create_column()
    }

    pub fn delete_column(&mut self, id: ColumnId) -> bool {
        self.service.delete_column(id)
    }

    pub fn rename_column(&mut self, id: ColumnId, title: impl Into<String>) -> bool {
        self.service.rename_column(id, title)
    }

    pub fn create_task(&mut self, column_id: ColumnId) -> Option<TaskId> {
        self.service.create_task(column_id)
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        self.service.delete_task(id)
    }

    pub fn edit_task(&mut self, id: TaskId, content: impl Into<String>) -> bool {
        self.service.edit_task(id, content)
    }

    pub fn on_drag_start(&mut self, event: DragStart) {
        self.drag.drag_start(self.service.store(), event);
    }

    pub fn on_drag_over(&mut self, event: DragOver) -> bool {
        self.drag.drag_over(self.service.store_mut(), event)
    }

    pub fn on_drag_end(&mut self, event: DragEnd) -> bool {
        self.drag.drag_end(self.service.store_mut(), event)
    }
}
