use projectdesk_core::{AppStore, MemoryStorage, NewProject, NewTask, Priority};

fn project_input(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: String::new(),
        priority: Priority::Low,
        due_date: None,
    }
}

fn task_input(name: &str) -> NewTask {
    NewTask {
        name: name.to_string(),
        description: String::new(),
        priority: Priority::Low,
        due_date: None,
    }
}

#[test]
fn counts_match_filtered_lists_after_any_sequence() {
    let mut store = AppStore::open(MemoryStorage::new()).unwrap();

    let mut task_ids = Vec::new();
    for i in 0..6 {
        task_ids.push(store.add_task(task_input(&format!("task {i}"))).unwrap());
    }
    store.add_project(project_input("alpha")).unwrap();
    store.add_project(project_input("beta")).unwrap();

    store.toggle_task_completion(task_ids[0]);
    store.toggle_task_completion(task_ids[2]);
    store.toggle_task_completion(task_ids[4]);
    store.toggle_task_completion(task_ids[2]); // back to open

    let counts = store.dashboard_counts();
    let completed = store.tasks().iter().filter(|t| t.completed).count();
    let open = store.tasks().iter().filter(|t| !t.completed).count();

    assert_eq!(counts.total_projects, store.projects().len());
    assert_eq!(counts.completed_tasks, completed);
    assert_eq!(counts.open_tasks, open);
    assert_eq!(counts.completed_tasks, 2);
    assert_eq!(counts.open_tasks, 4);
}

#[test]
fn counts_are_computed_fresh_on_every_call() {
    let mut store = AppStore::open(MemoryStorage::new()).unwrap();
    let id = store.add_task(task_input("only")).unwrap();

    assert_eq!(store.dashboard_counts().open_tasks, 1);
    store.toggle_task_completion(id);
    assert_eq!(store.dashboard_counts().open_tasks, 0);
    assert_eq!(store.dashboard_counts().completed_tasks, 1);
}

#[test]
fn recent_projects_takes_a_prefix_in_insertion_order() {
    let mut store = AppStore::open(MemoryStorage::new()).unwrap();
    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(store.add_project(project_input(&format!("p{i}"))).unwrap());
    }

    let recent: Vec<_> = store.recent_projects(3).iter().map(|p| p.id).collect();
    assert_eq!(recent, ids[..3].to_vec());

    // Asking for more than exists returns everything.
    assert_eq!(store.recent_projects(10).len(), 5);
    assert!(store.recent_projects(0).is_empty());
}
