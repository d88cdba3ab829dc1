use crate::io::store_io::{StorageError, TaskStorage};
use crate::model::task::{Category, TIME_UNSET, Task, now_millis, seed_tasks};

/// Field values for creating a task
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub time: String,
    pub category: Category,
    pub important: bool,
}

/// Field changes applied by `update`; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub time: Option<String>,
    pub category: Option<Category>,
    pub important: Option<bool>,
}

/// The authoritative ordered task list for one session.
///
/// Owns the in-memory list and an injected persistence collaborator;
/// every operation that changes state re-serializes the full list through
/// it. Unknown ids are no-ops, never errors.
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Box<dyn TaskStorage>,
}

impl TaskStore {
    /// Load the stored list, falling back to the seed set when nothing
    /// usable is stored.
    pub fn load(storage: Box<dyn TaskStorage>) -> Self {
        let tasks = storage.load().unwrap_or_else(seed_tasks);
        TaskStore { tasks, storage }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create a task from the draft: fresh unique id, flags cleared,
    /// inserted at the front (most-recent-first). A blank trimmed title is
    /// a silent no-op; returns the new task's id otherwise.
    pub fn create(&mut self, draft: TaskDraft) -> Result<Option<String>, StorageError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Ok(None);
        }
        let time = match draft.time.trim() {
            "" => TIME_UNSET.to_string(),
            t => t.to_string(),
        };
        let id = self.fresh_id();
        self.tasks.insert(
            0,
            Task {
                id: id.clone(),
                title: title.to_string(),
                time,
                category: draft.category,
                completed: false,
                in_progress: false,
                important: draft.important,
                created_at: now_millis(),
            },
        );
        self.persist()?;
        Ok(Some(id))
    }

    /// Apply field changes to the task matching `id`. A blank patched
    /// title is ignored (titles stay non-empty). Persists only when a
    /// field actually changed.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> Result<bool, StorageError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };

        let mut changed = false;
        if let Some(title) = patch.title {
            let title = title.trim();
            if !title.is_empty() && title != task.title {
                task.title = title.to_string();
                changed = true;
            }
        }
        if let Some(time) = patch.time
            && time != task.time
        {
            task.time = time;
            changed = true;
        }
        if let Some(category) = patch.category
            && category != task.category
        {
            task.category = category;
            changed = true;
        }
        if let Some(important) = patch.important
            && important != task.important
        {
            task.important = important;
            changed = true;
        }

        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Remove the task matching `id`. Confirmation is the caller's
    /// concern; the store just deletes.
    pub fn delete(&mut self, id: &str) -> Result<bool, StorageError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Flip `completed`; entering the completed state clears `in_progress`.
    pub fn toggle_completed(&mut self, id: &str) -> Result<bool, StorageError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.completed = !task.completed;
        if task.completed {
            task.in_progress = false;
        }
        self.persist()?;
        Ok(true)
    }

    /// Flip `in_progress`; entering the in-progress state clears `completed`.
    pub fn toggle_in_progress(&mut self, id: &str) -> Result<bool, StorageError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.in_progress = !task.in_progress;
        if task.in_progress {
            task.completed = false;
        }
        self.persist()?;
        Ok(true)
    }

    /// Flip `important`, independently of the other flags.
    pub fn toggle_important(&mut self, id: &str) -> Result<bool, StorageError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.important = !task.important;
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.save(&self.tasks)
    }

    /// Epoch-millis id, suffixed on collision so uniqueness holds even for
    /// creates within the same millisecond.
    fn fresh_id(&self) -> String {
        let base = now_millis().to_string();
        if self.get(&base).is_none() {
            return base;
        }
        let mut n = 1usize;
        loop {
            let id = format!("{base}-{n}");
            if self.get(&id).is_none() {
                return id;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory storage that records every save
    struct MemoryStorage {
        initial: Option<Vec<Task>>,
        saves: Rc<RefCell<Vec<Vec<Task>>>>,
    }

    impl TaskStorage for MemoryStorage {
        fn load(&self) -> Option<Vec<Task>> {
            self.initial.clone()
        }

        fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
            self.saves.borrow_mut().push(tasks.to_vec());
            Ok(())
        }
    }

    fn seeded_store() -> (TaskStore, Rc<RefCell<Vec<Vec<Task>>>>) {
        let saves = Rc::new(RefCell::new(Vec::new()));
        let storage = MemoryStorage {
            initial: None,
            saves: saves.clone(),
        };
        (TaskStore::load(Box::new(storage)), saves)
    }

    #[test]
    fn empty_storage_falls_back_to_seed() {
        let (store, saves) = seeded_store();
        assert_eq!(store.len(), 5);
        // Loading alone writes nothing
        assert!(saves.borrow().is_empty());
    }

    #[test]
    fn create_inserts_at_front() {
        let (mut store, saves) = seeded_store();
        let id = store
            .create(TaskDraft {
                title: "Buy milk".into(),
                time: String::new(),
                category: Category::Life,
                important: false,
            })
            .unwrap()
            .expect("non-blank title creates");

        assert_eq!(store.len(), 6);
        let task = &store.tasks()[0];
        assert_eq!(task.id, id);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.time, TIME_UNSET);
        assert_eq!(task.category, Category::Life);
        assert!(!task.completed);
        assert!(!task.in_progress);
        assert_eq!(saves.borrow().len(), 1);
    }

    #[test]
    fn create_trims_title_and_time() {
        let (mut store, _) = seeded_store();
        store
            .create(TaskDraft {
                title: "  Walk the dog  ".into(),
                time: " 18:30 ".into(),
                category: Category::Life,
                important: true,
            })
            .unwrap()
            .unwrap();
        assert_eq!(store.tasks()[0].title, "Walk the dog");
        assert_eq!(store.tasks()[0].time, "18:30");
        assert!(store.tasks()[0].important);
    }

    #[test]
    fn blank_title_create_is_a_silent_no_op() {
        let (mut store, saves) = seeded_store();
        for title in ["", "   ", "\t\n"] {
            let created = store
                .create(TaskDraft {
                    title: title.into(),
                    ..TaskDraft::default()
                })
                .unwrap();
            assert!(created.is_none());
        }
        assert_eq!(store.len(), 5);
        assert!(saves.borrow().is_empty());
    }

    #[test]
    fn created_ids_stay_unique_within_one_millisecond() {
        let (mut store, _) = seeded_store();
        let mut ids = Vec::new();
        for i in 0..10 {
            let id = store
                .create(TaskDraft {
                    title: format!("task {i}"),
                    ..TaskDraft::default()
                })
                .unwrap()
                .unwrap();
            ids.push(id);
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn update_patches_only_given_fields() {
        let (mut store, _) = seeded_store();
        let changed = store
            .update(
                "3",
                TaskPatch {
                    title: Some("Buy groceries and batteries".into()),
                    important: Some(true),
                    ..TaskPatch::default()
                },
            )
            .unwrap();
        assert!(changed);

        let task = store.get("3").unwrap();
        assert_eq!(task.title, "Buy groceries and batteries");
        assert!(task.important);
        // Untouched fields keep their values
        assert_eq!(task.time, "14:00");
        assert_eq!(task.category, Category::Life);
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let (mut store, saves) = seeded_store();
        let changed = store
            .update(
                "999",
                TaskPatch {
                    title: Some("ghost".into()),
                    ..TaskPatch::default()
                },
            )
            .unwrap();
        assert!(!changed);
        assert!(saves.borrow().is_empty());
    }

    #[test]
    fn update_with_identical_values_does_not_save() {
        let (mut store, saves) = seeded_store();
        let changed = store
            .update(
                "3",
                TaskPatch {
                    title: Some("Buy groceries".into()),
                    time: Some("14:00".into()),
                    category: Some(Category::Life),
                    important: Some(false),
                },
            )
            .unwrap();
        assert!(!changed);
        assert!(saves.borrow().is_empty());
    }

    #[test]
    fn update_ignores_blank_title() {
        let (mut store, _) = seeded_store();
        let changed = store
            .update(
                "3",
                TaskPatch {
                    title: Some("   ".into()),
                    ..TaskPatch::default()
                },
            )
            .unwrap();
        assert!(!changed);
        assert_eq!(store.get("3").unwrap().title, "Buy groceries");
    }

    #[test]
    fn delete_removes_the_task() {
        let (mut store, saves) = seeded_store();
        assert!(store.delete("2").unwrap());
        assert_eq!(store.len(), 4);
        assert!(store.get("2").is_none());
        assert_eq!(saves.borrow().len(), 1);
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let (mut store, saves) = seeded_store();
        assert!(!store.delete("999").unwrap());
        assert_eq!(store.len(), 5);
        assert!(saves.borrow().is_empty());
    }

    #[test]
    fn completing_clears_in_progress() {
        let (mut store, _) = seeded_store();
        // Seed task "2" is in progress
        assert!(store.get("2").unwrap().in_progress);
        store.toggle_completed("2").unwrap();
        let task = store.get("2").unwrap();
        assert!(task.completed);
        assert!(!task.in_progress);
    }

    #[test]
    fn starting_a_completed_task_reopens_it() {
        let (mut store, _) = seeded_store();
        // Seed task "1" is completed
        assert!(store.get("1").unwrap().completed);
        store.toggle_in_progress("1").unwrap();
        let task = store.get("1").unwrap();
        assert!(!task.completed);
        assert!(task.in_progress);
    }

    #[test]
    fn flags_never_both_true() {
        let (mut store, _) = seeded_store();
        for _ in 0..4 {
            store.toggle_completed("3").unwrap();
            store.toggle_in_progress("3").unwrap();
            let task = store.get("3").unwrap();
            assert!(!(task.completed && task.in_progress));
        }
    }

    #[test]
    fn important_is_orthogonal() {
        let (mut store, _) = seeded_store();
        let before = store.get("1").unwrap().clone();
        store.toggle_important("1").unwrap();
        let after = store.get("1").unwrap();
        assert!(after.important);
        assert_eq!(after.completed, before.completed);
        assert_eq!(after.in_progress, before.in_progress);
    }

    #[test]
    fn every_effective_mutation_saves_the_full_list() {
        let (mut store, saves) = seeded_store();
        store
            .create(TaskDraft {
                title: "one".into(),
                ..TaskDraft::default()
            })
            .unwrap();
        store.toggle_completed("1").unwrap();
        store.toggle_important("1").unwrap();
        store.delete("5").unwrap();

        let saves = saves.borrow();
        assert_eq!(saves.len(), 4);
        // Each save carries the whole list, not a delta
        assert_eq!(saves.last().unwrap().len(), store.len());
    }

    #[test]
    fn stored_tasks_win_over_seed() {
        let saves = Rc::new(RefCell::new(Vec::new()));
        let mut stored = seed_tasks();
        stored.truncate(2);
        let storage = MemoryStorage {
            initial: Some(stored),
            saves: saves.clone(),
        };
        let store = TaskStore::load(Box::new(storage));
        assert_eq!(store.len(), 2);
    }
}
