use taskboard_core::{
    board_columns, fixture_tasks, BoardService, MemoryTransfer, Task, TaskStatus,
};

fn column_ids(service: &BoardService, status: TaskStatus) -> Vec<String> {
    service
        .column(status)
        .tasks
        .into_iter()
        .map(|task| task.id.to_string())
        .collect()
}

#[test]
fn seeded_service_starts_at_revision_zero() {
    let service = BoardService::from_seed(fixture_tasks());
    assert_eq!(service.revision(), 0);
    assert_eq!(service.tasks().len(), fixture_tasks().len());
}

#[test]
fn columns_follow_board_order_and_titles() {
    let service = BoardService::from_seed(fixture_tasks());
    let columns = service.columns();

    assert_eq!(columns.len(), board_columns().len());
    for (view, column) in columns.iter().zip(board_columns()) {
        assert_eq!(view.status, column.status);
        assert_eq!(view.title, column.title);
        assert!(view.tasks.iter().all(|task| task.status == column.status));
    }
    assert_eq!(columns[0].title, "To Do");
    assert_eq!(columns[1].title, "In Progress");
    assert_eq!(columns[2].title, "Done");
}

#[test]
fn revision_bumps_only_on_visible_changes() {
    let mut service = BoardService::from_seed([
        Task::with_id("t1", "one", TaskStatus::Todo).unwrap(),
    ]);

    assert!(!service.move_task("t1", TaskStatus::Todo));
    assert!(!service.move_task("missing", TaskStatus::Done));
    assert_eq!(service.revision(), 0);

    assert!(service.move_task("t1", TaskStatus::InProgress));
    assert_eq!(service.revision(), 1);

    service.create_task("two", None);
    assert_eq!(service.revision(), 2);
}

#[test]
fn drag_protocol_moves_task_and_bumps_revision() {
    let mut service = BoardService::from_seed([
        Task::with_id("t2", "two", TaskStatus::Todo).unwrap(),
    ]);
    let mut channel = MemoryTransfer::new();

    service.start_drag("t2", &mut channel);
    assert!(service.drop_on_column(&channel, TaskStatus::Done));
    assert_eq!(column_ids(&service, TaskStatus::Done), ["t2"]);
    assert!(column_ids(&service, TaskStatus::Todo).is_empty());
    assert_eq!(service.revision(), 1);

    assert!(!service.drop_on_column(&channel, TaskStatus::Done));
    assert_eq!(service.revision(), 1);
}

#[test]
fn drop_without_drag_leaves_service_untouched() {
    let mut service = BoardService::from_seed(fixture_tasks());
    let before = service.columns();

    assert!(!service.drop_on_column(&MemoryTransfer::new(), TaskStatus::Done));
    assert_eq!(service.columns(), before);
    assert_eq!(service.revision(), 0);
}

#[test]
fn created_tasks_append_to_todo_column() {
    let mut service = BoardService::from_seed(fixture_tasks());
    let before = column_ids(&service, TaskStatus::Todo);

    let id = service.create_task("new card", Some("details".to_string()));
    let after = column_ids(&service, TaskStatus::Todo);

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last().map(String::as_str), Some(id.as_str()));
    assert_eq!(
        service.task(id.as_str()).unwrap().description.as_deref(),
        Some("details")
    );
}

#[test]
fn add_task_keeps_caller_status() {
    let mut service = BoardService::default();
    service.add_task(Task::with_id("x", "imported", TaskStatus::Done).unwrap());

    assert_eq!(column_ids(&service, TaskStatus::Done), ["x"]);
    assert_eq!(service.revision(), 1);
}
