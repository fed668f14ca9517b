//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskboard_core` linkage and print the seeded board.
//! - Optionally run one move through the drag protocol:
//!   `taskboard move <task-id> <status>`.

use std::process::ExitCode;
use taskboard_core::{
    fixture_tasks, init_logging_from_config, load_seed_file, BoardService, CoreConfig,
    MemoryTransfer, TaskStatus,
};

fn main() -> ExitCode {
    println!("taskboard_core ping={}", taskboard_core::ping());
    println!("taskboard_core version={}", taskboard_core::core_version());

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), String> {
    let config = CoreConfig::from_env().map_err(|err| err.to_string())?;
    init_logging_from_config(&config)?;

    let tasks = match config.seed_path.as_deref() {
        Some(path) => load_seed_file(path).map_err(|err| err.to_string())?,
        None => fixture_tasks(),
    };
    let mut board = BoardService::from_seed(tasks);

    match args.as_slice() {
        [] => {}
        [command, task_id, status] if command == "move" => {
            let status: TaskStatus = status.parse().map_err(|err| format!("{err}"))?;
            let mut channel = MemoryTransfer::new();
            board.start_drag(task_id, &mut channel);
            if !board.drop_on_column(&channel, status) {
                print_board(&board);
                return Err(format!("task `{task_id}` was not moved to {status}"));
            }
        }
        _ => return Err("usage: taskboard [move <task-id> <status>]".to_string()),
    }

    print_board(&board);
    Ok(())
}

fn print_board(board: &BoardService) {
    println!("revision={}", board.revision());
    for column in board.columns() {
        println!("== {} ({})", column.title, column.tasks.len());
        for task in column.tasks {
            println!("  [{}] {}", task.id, task.title);
        }
    }
}
