use projectdesk_core::{
    AppStore, MemoryStorage, NewProject, NewTask, NewTeamMember, Priority, Snapshot, StateStorage,
    STATE_KEY,
};

fn populated_store() -> AppStore<MemoryStorage> {
    let mut store = AppStore::open(MemoryStorage::new()).unwrap();
    store
        .add_project(NewProject {
            name: "Website Redesign".to_string(),
            description: "Refresh the marketing site".to_string(),
            priority: Priority::High,
            due_date: Some("2024-06-01".to_string()),
        })
        .unwrap();
    let task = store
        .add_task(NewTask {
            name: "Write spec".to_string(),
            description: String::new(),
            priority: Priority::Medium,
            due_date: None,
        })
        .unwrap();
    store.toggle_task_completion(task);
    store
        .add_member(NewTeamMember {
            name: "Alex".to_string(),
            role: Some("design".to_string()),
        })
        .unwrap();
    store
}

#[test]
fn save_then_load_reproduces_equivalent_state() {
    let store = populated_store();
    let projects = store.projects().to_vec();
    let tasks = store.tasks().to_vec();
    let team = store.team().to_vec();

    let reopened = AppStore::open(store.into_storage()).unwrap();

    assert_eq!(reopened.projects(), projects.as_slice());
    assert_eq!(reopened.tasks(), tasks.as_slice());
    assert_eq!(reopened.team(), team.as_slice());
}

#[test]
fn absent_storage_yields_empty_state() {
    let store = AppStore::open(MemoryStorage::new()).unwrap();
    assert!(store.projects().is_empty());
    assert!(store.tasks().is_empty());
    assert!(store.team().is_empty());
}

#[test]
fn corrupt_blob_is_treated_as_absent() {
    let mut storage = MemoryStorage::new();
    storage.set(STATE_KEY, "{not json at all").unwrap();

    let store = AppStore::open(storage).unwrap();
    assert!(store.projects().is_empty());
    assert!(store.tasks().is_empty());
    assert!(store.team().is_empty());
}

#[test]
fn legacy_flat_blob_still_yields_its_lists() {
    // The superseded flat layout mixed transient UI fields into the
    // persisted object and had no `team` list. Unknown fields are ignored
    // and missing lists default to empty.
    let mut storage = MemoryStorage::new();
    storage
        .set(
            STATE_KEY,
            r#"{"projects":[],"tasks":[],"currentPage":"dashboard","sidebarCollapsed":false}"#,
        )
        .unwrap();

    let store = AppStore::open(storage).unwrap();
    assert!(store.projects().is_empty());
    assert!(store.tasks().is_empty());
    assert!(store.team().is_empty());
}

#[test]
fn snapshot_json_uses_camel_case_entity_keys() {
    let store = populated_store();
    let storage = store.into_storage();
    let raw = storage.get(STATE_KEY).unwrap().unwrap();

    assert!(raw.contains("\"createdAt\""));
    assert!(raw.contains("\"dueDate\""));
    assert!(raw.contains("\"projects\""));
    assert!(raw.contains("\"team\""));

    let parsed = Snapshot::from_json(&raw).unwrap();
    assert_eq!(parsed.projects.len(), 1);
    assert_eq!(parsed.tasks.len(), 1);
    assert_eq!(parsed.team.len(), 1);
    assert!(parsed.tasks[0].completed);
}
