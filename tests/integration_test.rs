use taskdeck::{App, MarkDone, Storage, TaskStore};
use tempfile::TempDir;

#[test]
fn test_full_session_round_trip() {
    let dir = TempDir::new().unwrap();

    let mut app = App::startup(dir.path()).unwrap();
    app.store
        .create("Buy milk".to_string(), "2% lowfat".to_string());
    app.store.create("Walk dog".to_string(), String::new());
    app.store.create("Water plants".to_string(), String::new());
    app.store.mark_done(1).unwrap();
    app.store.remove(2).unwrap();
    app.shutdown().unwrap();

    // Fresh process: state comes back in the same order
    let app = App::startup(dir.path()).unwrap();
    let ids: Vec<i32> = app.store.list().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(app.store.list()[0].done);
    assert!(!app.store.list()[1].done);
    assert_eq!(app.store.next_id(), 4);
}

#[test]
fn test_removed_ids_stay_retired_across_runs() {
    let dir = TempDir::new().unwrap();

    let mut app = App::startup(dir.path()).unwrap();
    app.store.create("first".to_string(), String::new());
    app.store.create("second".to_string(), String::new());
    app.store.remove(1).unwrap();
    app.store.remove(2).unwrap();
    app.shutdown().unwrap();

    let mut app = App::startup(dir.path()).unwrap();
    assert_eq!(app.store.count(), 0);
    let task = app.store.create("third".to_string(), String::new());
    assert_eq!(task.id, 3);
}

#[test]
fn test_mark_done_outcomes() {
    let mut store = TaskStore::new();
    store.create("chore".to_string(), String::new());

    assert_eq!(store.mark_done(1), Ok(MarkDone::Completed));
    assert_eq!(store.mark_done(1), Ok(MarkDone::AlreadyDone));
    assert!(store.find_by_id(1).unwrap().done);
}

#[test]
fn test_two_gateways_same_directory() {
    let dir = TempDir::new().unwrap();

    let mut store = TaskStore::new();
    store.create("shared".to_string(), String::new());
    Storage::new(dir.path()).save(&store).unwrap();

    let loaded = Storage::new(dir.path()).load().unwrap();
    assert_eq!(loaded.list(), store.list());
    assert_eq!(loaded.next_id(), store.next_id());
}
