//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `kanban_core` linkage with a short scripted board session.
//! - Keep output deterministic for quick local sanity checks.

use kanban_core::{
    BoardConfig, BoardSession, DragEnd, DragOver, DragPayload, DragStart, SequentialIdGenerator,
};

fn main() {
    let mut session =
        BoardSession::with_generator(BoardConfig::default(), SequentialIdGenerator::new());

    let todo = session.create_column();
    let doing = session.create_column();
    session.rename_column(todo, "Todo");
    session.rename_column(doing, "Doing");

    let first = session.create_task(todo);
    session.create_task(todo);

    // Lift the first task, hover over the second column, drop there.
    if let Some(task) = first {
        let active = DragPayload::Task(task);
        session.on_drag_start(DragStart { active });
        session.on_drag_over(DragOver::new(active, Some(DragPayload::Column(doing))));
        session.on_drag_end(DragEnd::new(active, Some(DragPayload::Column(doing))));
    }

    // Swap the columns by dropping the second onto the first.
    let active = DragPayload::Column(doing);
    session.on_drag_start(DragStart { active });
    session.on_drag_end(DragEnd::new(active, Some(DragPayload::Column(todo))));

    println!("kanban_core version={}", kanban_core::core_version());
    println!("board version={}", session.version());
    for column in session.columns() {
        let tasks: Vec<&str> = session
            .tasks_in(column.id)
            .into_iter()
            .map(|task| task.content.as_str())
            .collect();
        println!("{}: {}", column.title, tasks.join(", "));
    }
}
