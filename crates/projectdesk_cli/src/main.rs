//! Minimal command-line front end for `projectdesk_core`.
//!
//! # Responsibility
//! - Exercise the state store end to end against a SQLite-backed file.
//! - Keep output deterministic for quick local sanity checks.

use projectdesk_core::{
    open_store_db, AppStore, NewProject, NewTask, Priority, SqliteStorage, StorageError,
};
use std::env;
use std::process;
use uuid::Uuid;

const USAGE: &str = "usage: projectdesk_cli <db-path> <command> [args]

commands:
  dashboard                 show headline counters and recent projects
  projects                  list all projects
  tasks                     list all tasks
  add-project <name...>     create a project
  add-task <name...>        create a task
  toggle <task-id>          flip a task's completion state
  rm-task <task-id>         remove a task";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 {
        eprintln!("{USAGE}");
        process::exit(2);
    }

    if let Err(err) = run(&args[0], &args[1], &args[2..]) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(db_path: &str, command: &str, args: &[String]) -> Result<(), StorageError> {
    let conn = open_store_db(db_path)?;
    let mut store = AppStore::open(SqliteStorage::new(conn))?;

    match command {
        "dashboard" => {
            let counts = store.dashboard_counts();
            println!("projects: {}", counts.total_projects);
            println!("open tasks: {}", counts.open_tasks);
            println!("completed tasks: {}", counts.completed_tasks);
            for project in store.recent_projects(3) {
                println!("recent: {} ({:?})", project.name, project.status);
            }
        }
        "projects" => {
            for project in store.projects() {
                println!(
                    "{} {:?} {}% {}",
                    project.id, project.status, project.progress, project.name
                );
            }
        }
        "tasks" => {
            for task in store.tasks() {
                let mark = if task.completed { "x" } else { " " };
                println!("[{mark}] {} {}", task.id, task.name);
            }
        }
        "add-project" => {
            let input = NewProject {
                name: args.join(" "),
                description: String::new(),
                priority: Priority::Medium,
                due_date: None,
            };
            match store.add_project(input) {
                Ok(id) => println!("created project {id}"),
                Err(err) => eprintln!("rejected: {err}"),
            }
        }
        "add-task" => {
            let input = NewTask {
                name: args.join(" "),
                description: String::new(),
                priority: Priority::Medium,
                due_date: None,
            };
            match store.add_task(input) {
                Ok(id) => println!("created task {id}"),
                Err(err) => eprintln!("rejected: {err}"),
            }
        }
        "toggle" => {
            if let Some(id) = parse_id(args) {
                if store.toggle_task_completion(id) {
                    println!("toggled {id}");
                } else {
                    println!("no task with id {id}");
                }
            } else {
                eprintln!("toggle needs a task id");
            }
        }
        "rm-task" => {
            if let Some(id) = parse_id(args) {
                if store.remove_task(id) {
                    println!("removed {id}");
                } else {
                    println!("no task with id {id}");
                }
            } else {
                eprintln!("rm-task needs a task id");
            }
        }
        _ => {
            eprintln!("unknown command `{command}`\n{USAGE}");
            process::exit(2);
        }
    }

    Ok(())
}

fn parse_id(args: &[String]) -> Option<Uuid> {
    args.first().and_then(|raw| Uuid::parse_str(raw).ok())
}
