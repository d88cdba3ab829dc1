//! Store round-trip tests: tasks written by one store load back
//! identically in the next.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use taskboard::io::store_io::{JsonFileStorage, TaskStorage};
use taskboard::model::task::{Category, seed_tasks};
use taskboard::ops::store::{TaskDraft, TaskPatch, TaskStore};

fn storage_in(dir: &TempDir) -> JsonFileStorage {
    JsonFileStorage::new(dir.path().join("tasks.json"))
}

#[test]
fn saved_tasks_reload_identically() {
    let tmp = TempDir::new().unwrap();

    let tasks = seed_tasks();
    storage_in(&tmp).save(&tasks).unwrap();

    let reloaded = storage_in(&tmp).load().unwrap();
    assert_eq!(reloaded, tasks);
}

#[test]
fn a_full_session_survives_a_reload() {
    let tmp = TempDir::new().unwrap();

    let mut store = TaskStore::load(Box::new(storage_in(&tmp)));
    let id = store
        .create(TaskDraft {
            title: "Write the report".into(),
            time: "16:30".into(),
            category: Category::Work,
            important: true,
        })
        .unwrap()
        .unwrap();
    store.toggle_in_progress(&id).unwrap();
    store
        .update(
            "3",
            TaskPatch {
                title: Some("Buy groceries for the week".into()),
                time: None,
                category: None,
                important: None,
            },
        )
        .unwrap();
    store.delete("4").unwrap();

    let expected = store.tasks().to_vec();
    let reopened = TaskStore::load(Box::new(storage_in(&tmp)));
    assert_eq!(reopened.tasks(), expected.as_slice());

    let task = reopened.get(&id).unwrap();
    assert!(task.in_progress);
    assert!(task.important);
    assert_eq!(task.time, "16:30");
}

#[test]
fn wire_format_is_camel_case() {
    let tmp = TempDir::new().unwrap();
    storage_in(&tmp).save(&seed_tasks()).unwrap();

    let raw = std::fs::read_to_string(tmp.path().join("tasks.json")).unwrap();
    assert!(raw.contains("\"inProgress\""));
    assert!(raw.contains("\"createdAt\""));
    assert!(!raw.contains("\"in_progress\""));

    // Hyphenated category name survives the trip
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[3]["category"], "Self-improvement");
}
