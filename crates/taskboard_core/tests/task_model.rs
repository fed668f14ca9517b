use taskboard_core::{Task, TaskId, TaskStatus, TaskValidationError};

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("hello");

    assert!(!task.id.as_str().is_empty());
    assert_eq!(task.title, "hello");
    assert_eq!(task.description, None);
    assert_eq!(task.status, TaskStatus::Todo);
}

#[test]
fn with_id_rejects_blank_id() {
    let err = Task::with_id("  ", "invalid", TaskStatus::Done).unwrap_err();
    assert_eq!(err, TaskValidationError::BlankId);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task::with_id("t1", "ship board", TaskStatus::InProgress)
        .unwrap()
        .described("columns and drag");

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "t1");
    assert_eq!(json["title"], "ship board");
    assert_eq!(json["description"], "columns and drag");
    assert_eq!(json["status"], "in_progress");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn missing_description_is_omitted_and_defaulted() {
    let task = Task::with_id("t2", "no body", TaskStatus::Todo).unwrap();
    let json = serde_json::to_value(&task).unwrap();
    assert!(json.get("description").is_none());

    let decoded: Task = serde_json::from_value(serde_json::json!({
        "id": "t2",
        "title": "no body",
        "status": "todo"
    }))
    .unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_rejects_blank_id_and_unknown_status() {
    let blank_id = serde_json::json!({ "id": " ", "title": "x", "status": "todo" });
    let err = serde_json::from_value::<Task>(blank_id).unwrap_err();
    assert!(err.to_string().contains("task id must not be blank"), "{err}");

    let bad_status = serde_json::json!({ "id": "t3", "title": "x", "status": "archived" });
    assert!(serde_json::from_value::<Task>(bad_status).is_err());
}

#[test]
fn status_parsing_accepts_ui_spellings() {
    for (raw, expected) in [
        ("todo", TaskStatus::Todo),
        ("To Do", TaskStatus::Todo),
        ("to-do", TaskStatus::Todo),
        ("in_progress", TaskStatus::InProgress),
        ("InProgress", TaskStatus::InProgress),
        ("in-progress", TaskStatus::InProgress),
        (" DONE ", TaskStatus::Done),
    ] {
        assert_eq!(raw.parse::<TaskStatus>(), Ok(expected), "input `{raw}`");
    }

    assert_eq!(
        "archived".parse::<TaskStatus>(),
        Err(TaskValidationError::UnknownStatus("archived".to_string()))
    );
}

#[test]
fn status_labels_match_column_titles() {
    assert_eq!(TaskStatus::Todo.label(), "To Do");
    assert_eq!(TaskStatus::InProgress.label(), "In Progress");
    assert_eq!(TaskStatus::Done.label(), "Done");
}

#[test]
fn task_id_round_trips_through_string() {
    let id = TaskId::parse("abc").unwrap();
    let raw: String = id.clone().into();
    assert_eq!(raw, "abc");
    assert_eq!(TaskId::try_from(raw).unwrap(), id);
}
