use kanban_core::{
    BoardChange, BoardConfig, BoardObserver, BoardSession, ChangeKind, ColumnId, DragEnd,
    DragOver, DragPayload, DragStart, DragState, SequentialIdGenerator, TaskId,
};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct Recorder {
    changes: Mutex<Vec<BoardChange>>,
}

impl BoardObserver for Recorder {
    fn on_board_changed(&self, change: &BoardChange) {
        self.changes.lock().unwrap().push(*change);
    }
}

fn setup() -> BoardSession<SequentialIdGenerator> {
    BoardSession::with_generator(BoardConfig::default(), SequentialIdGenerator::new())
}

fn column_ids(session: &BoardSession<SequentialIdGenerator>) -> Vec<ColumnId> {
    session.columns().iter().map(|column| column.id).collect()
}

fn task_ids(session: &BoardSession<SequentialIdGenerator>) -> Vec<TaskId> {
    session.tasks().iter().map(|task| task.id).collect()
}

fn col(id: ColumnId) -> DragPayload {
    DragPayload::Column(id)
}

fn task(id: TaskId) -> DragPayload {
    DragPayload::Task(id)
}

#[test]
fn dropping_last_column_on_first_moves_it_to_front() {
    let mut session = setup();
    let a = session.create_column();
    let b = session.create_column();
    let c = session.create_column();

    session.on_drag_start(DragStart { active: col(c) });
    assert_eq!(session.drag_state(), DragState::DraggingColumn(c));
    assert_eq!(session.active_column().unwrap().id, c);

    assert!(session.on_drag_end(DragEnd::new(col(c), Some(col(a)))));
    assert_eq!(column_ids(&session), vec![c, a, b]);
    assert_eq!(session.drag_state(), DragState::Idle);
    assert!(session.active_column().is_none());
}

#[test]
fn column_move_forward_shifts_intervening_columns_back() {
    let mut session = setup();
    let a = session.create_column();
    let b = session.create_column();
    let c = session.create_column();

    session.on_drag_start(DragStart { active: col(a) });
    session.on_drag_end(DragEnd::new(col(a), Some(col(c))));

    assert_eq!(column_ids(&session), vec![b, c, a]);
}

#[test]
fn column_hover_does_not_reorder_before_drop() {
    let mut session = setup();
    let a = session.create_column();
    let b = session.create_column();
    let before = session.snapshot();

    session.on_drag_start(DragStart { active: col(b) });
    assert!(!session.on_drag_over(DragOver::new(col(b), Some(col(a)))));

    assert_eq!(session.snapshot(), before);
    assert_eq!(session.drag_state(), DragState::DraggingColumn(b));
}

#[test]
fn task_over_task_in_other_column_reparents_and_relocates() {
    let mut session = setup();
    let a = session.create_column();
    let b = session.create_column();
    let t1 = session.create_task(a).unwrap();
    let t2 = session.create_task(a).unwrap();
    let t3 = session.create_task(b).unwrap();

    session.on_drag_start(DragStart { active: task(t1) });
    assert!(session.on_drag_over(DragOver::new(task(t1), Some(task(t3)))));

    assert_eq!(task_ids(&session), vec![t2, t3, t1]);
    assert_eq!(session.store().task(t1).unwrap().column_id, b);
    assert_eq!(session.store().task(t2).unwrap().column_id, a);
    assert_eq!(session.store().task(t3).unwrap().column_id, b);
    assert_eq!(session.active_task().unwrap().column_id, b);

    let in_b: Vec<TaskId> = session.tasks_in(b).iter().map(|t| t.id).collect();
    assert_eq!(in_b, vec![t3, t1]);
}

#[test]
fn task_over_task_in_same_column_reorders_only() {
    let mut session = setup();
    let a = session.create_column();
    let t1 = session.create_task(a).unwrap();
    let t2 = session.create_task(a).unwrap();
    let t3 = session.create_task(a).unwrap();

    session.on_drag_start(DragStart { active: task(t3) });
    session.on_drag_over(DragOver::new(task(t3), Some(task(t1))));

    assert_eq!(task_ids(&session), vec![t3, t1, t2]);
    assert!(session.tasks().iter().all(|t| t.column_id == a));
}

#[test]
fn task_over_column_reparents_without_moving_others() {
    let mut session = setup();
    let a = session.create_column();
    let b = session.create_column();
    let t1 = session.create_task(a).unwrap();
    let t2 = session.create_task(a).unwrap();
    let before = task_ids(&session);

    session.on_drag_start(DragStart { active: task(t1) });
    assert!(session.on_drag_over(DragOver::new(task(t1), Some(col(b)))));

    assert_eq!(task_ids(&session), before);
    assert_eq!(session.tasks().len(), 2);
    assert_eq!(session.store().task(t1).unwrap().column_id, b);
    assert_eq!(session.store().task(t2).unwrap().column_id, a);
}

#[test]
fn task_over_column_publishes_membership_change() {
    let mut session = setup();
    let a = session.create_column();
    let b = session.create_column();
    let t1 = session.create_task(a).unwrap();
    let recorder = Arc::new(Recorder::default());
    session.subscribe(recorder.clone());

    session.on_drag_start(DragStart { active: task(t1) });
    session.on_drag_over(DragOver::new(task(t1), Some(col(b))));
    // Repeated hover samples over the same column change nothing.
    session.on_drag_over(DragOver::new(task(t1), Some(col(b))));
    session.on_drag_end(DragEnd::new(task(t1), Some(col(b))));

    let changes = recorder.changes.lock().unwrap().clone();
    assert_eq!(changes.len(), 1);
    assert_eq!(
        changes[0].kind,
        ChangeKind::TaskMoved {
            task: t1,
            from: a,
            to: b,
        }
    );
}

#[test]
fn task_drop_commits_nothing_beyond_hover() {
    let mut session = setup();
    let a = session.create_column();
    let b = session.create_column();
    let t1 = session.create_task(a).unwrap();
    let t2 = session.create_task(b).unwrap();

    session.on_drag_start(DragStart { active: task(t1) });
    session.on_drag_over(DragOver::new(task(t1), Some(task(t2))));
    let after_hover = session.snapshot();

    assert!(!session.on_drag_end(DragEnd::new(task(t1), Some(task(t2)))));
    assert_eq!(session.snapshot(), after_hover);
    assert_eq!(session.drag_state(), DragState::Idle);
}

#[test]
fn dropping_on_itself_leaves_store_unchanged() {
    let mut session = setup();
    let a = session.create_column();
    session.create_column();
    let t1 = session.create_task(a).unwrap();
    let before = session.snapshot();

    session.on_drag_start(DragStart { active: col(a) });
    session.on_drag_end(DragEnd::new(col(a), Some(col(a))));

    session.on_drag_start(DragStart { active: task(t1) });
    session.on_drag_over(DragOver::new(task(t1), Some(task(t1))));
    session.on_drag_end(DragEnd::new(task(t1), Some(task(t1))));

    assert_eq!(session.snapshot(), before);
}

#[test]
fn drop_outside_any_target_cancels() {
    let mut session = setup();
    let a = session.create_column();
    session.create_column();
    let before = session.snapshot();

    session.on_drag_start(DragStart { active: col(a) });
    assert!(!session.on_drag_end(DragEnd::new(col(a), None)));

    assert_eq!(session.snapshot(), before);
    assert_eq!(session.drag_state(), DragState::Idle);
}

#[test]
fn hover_outside_any_target_is_ignored() {
    let mut session = setup();
    let a = session.create_column();
    let t1 = session.create_task(a).unwrap();
    let before = session.snapshot();

    session.on_drag_start(DragStart { active: task(t1) });
    assert!(!session.on_drag_over(DragOver::new(task(t1), None)));

    assert_eq!(session.snapshot(), before);
    assert_eq!(session.drag_state(), DragState::DraggingTask(t1));
}

#[test]
fn deleting_dragged_task_column_mid_drag_degrades_to_noop() {
    let mut session = setup();
    let a = session.create_column();
    let b = session.create_column();
    let t1 = session.create_task(a).unwrap();
    let t2 = session.create_task(b).unwrap();

    session.on_drag_start(DragStart { active: task(t1) });
    assert!(session.delete_column(a));
    let after_delete = session.snapshot();

    assert!(session.active_task().is_none());
    assert!(!session.on_drag_over(DragOver::new(task(t1), Some(task(t2)))));
    assert!(!session.on_drag_over(DragOver::new(task(t1), Some(col(b)))));
    assert!(!session.on_drag_end(DragEnd::new(task(t1), Some(col(b)))));

    assert_eq!(session.snapshot(), after_delete);
    assert_eq!(session.drag_state(), DragState::Idle);
}

#[test]
fn dropping_column_onto_deleted_column_is_noop() {
    let mut session = setup();
    let a = session.create_column();
    let b = session.create_column();

    session.on_drag_start(DragStart { active: col(a) });
    session.delete_column(b);
    let before = session.snapshot();

    assert!(!session.on_drag_end(DragEnd::new(col(a), Some(col(b)))));
    assert_eq!(session.snapshot(), before);
}

#[test]
fn drag_start_for_unknown_entity_stays_idle() {
    let mut session = setup();
    session.create_column();

    session.on_drag_start(DragStart {
        active: task(Uuid::from_u128(404)),
    });
    assert_eq!(session.drag_state(), DragState::Idle);
    assert!(!session.on_drag_end(DragEnd::new(task(Uuid::from_u128(404)), None)));
}

#[test]
fn column_dropped_on_task_is_noop() {
    let mut session = setup();
    let a = session.create_column();
    let b = session.create_column();
    let t1 = session.create_task(b).unwrap();
    let before = session.snapshot();

    session.on_drag_start(DragStart { active: col(a) });
    assert!(!session.on_drag_end(DragEnd::new(col(a), Some(task(t1)))));

    assert_eq!(session.snapshot(), before);
}

#[test]
fn notifications_for_other_entity_are_ignored() {
    let mut session = setup();
    let a = session.create_column();
    let b = session.create_column();
    let t1 = session.create_task(a).unwrap();
    let t2 = session.create_task(b).unwrap();
    let before = session.snapshot();

    session.on_drag_start(DragStart { active: task(t1) });
    assert!(!session.on_drag_over(DragOver::new(task(t2), Some(col(a)))));
    assert_eq!(session.snapshot(), before);

    session.on_drag_end(DragEnd::new(task(t1), None));
    assert!(!session.on_drag_over(DragOver::new(task(t1), Some(col(b)))));
    assert_eq!(session.snapshot(), before);
}

#[test]
fn only_one_entity_is_active_at_a_time() {
    let mut session = setup();
    let a = session.create_column();
    let t1 = session.create_task(a).unwrap();

    session.on_drag_start(DragStart { active: col(a) });
    session.on_drag_start(DragStart { active: task(t1) });

    assert_eq!(session.drag_state(), DragState::DraggingTask(t1));
    assert!(session.active_column().is_none());
    assert_eq!(session.active_task().unwrap().id, t1);
}

#[test]
fn moves_preserve_id_multisets() {
    let mut session = setup();
    let columns: Vec<ColumnId> = (0..4).map(|_| session.create_column()).collect();
    let mut tasks = Vec::new();
    for column in &columns {
        for _ in 0..3 {
            tasks.push(session.create_task(*column).unwrap());
        }
    }

    session.on_drag_start(DragStart {
        active: col(columns[3]),
    });
    session.on_drag_end(DragEnd::new(col(columns[3]), Some(col(columns[1]))));

    session.on_drag_start(DragStart {
        active: task(tasks[0]),
    });
    session.on_drag_over(DragOver::new(task(tasks[0]), Some(task(tasks[7]))));
    session.on_drag_over(DragOver::new(task(tasks[0]), Some(task(tasks[11]))));
    session.on_drag_over(DragOver::new(task(tasks[0]), Some(col(columns[2]))));
    session.on_drag_end(DragEnd::new(task(tasks[0]), Some(col(columns[2]))));

    let mut column_after = column_ids(&session);
    let mut task_after = task_ids(&session);
    column_after.sort();
    task_after.sort();
    let mut column_before = columns.clone();
    let mut task_before = tasks.clone();
    column_before.sort();
    task_before.sort();

    assert_eq!(column_after, column_before);
    assert_eq!(task_after, task_before);
    assert_eq!(session.store().task(tasks[0]).unwrap().column_id, columns[2]);
    for task in session.tasks() {
        assert!(session.store().contains_column(task.column_id));
    }
}
