use crate::io::store_io::StorageError;
use crate::model::task::{Category, Task};
use crate::ops::store::{TaskDraft, TaskPatch, TaskStore};

/// What a commit will do with the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the task with this id
    Edit(String),
}

/// Transient draft state for the add/edit dialog.
///
/// One draft exists at a time; the owner holds it in an `Option` (None =
/// form closed), drops it on cancel, and drops it after a successful
/// commit. Commit is the only path into the store.
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub mode: FormMode,
    pub title: String,
    pub time: String,
    pub category: Category,
    pub important: bool,
}

impl TaskForm {
    /// Open in creation mode with default fields
    pub fn create() -> Self {
        TaskForm {
            mode: FormMode::Create,
            title: String::new(),
            time: String::new(),
            category: Category::default(),
            important: false,
        }
    }

    /// Open in editing mode, pre-filled from an existing task
    pub fn edit(task: &Task) -> Self {
        TaskForm {
            mode: FormMode::Edit(task.id.clone()),
            title: task.title.clone(),
            time: task.time.clone(),
            category: task.category,
            important: task.important,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Whether a commit would do anything (save stays disabled otherwise)
    pub fn can_commit(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Apply the draft to the store: `update` in editing mode, `create`
    /// otherwise. Returns false without touching the store when the
    /// trimmed title is blank; the caller keeps the form open in that
    /// case and closes it on true.
    pub fn commit(&self, store: &mut TaskStore) -> Result<bool, StorageError> {
        if !self.can_commit() {
            return Ok(false);
        }
        match &self.mode {
            FormMode::Create => {
                store.create(TaskDraft {
                    title: self.title.clone(),
                    time: self.time.clone(),
                    category: self.category,
                    important: self.important,
                })?;
            }
            FormMode::Edit(id) => {
                store.update(
                    id,
                    TaskPatch {
                        title: Some(self.title.clone()),
                        time: Some(self.time.clone()),
                        category: Some(self.category),
                        important: Some(self.important),
                    },
                )?;
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store_io::TaskStorage;
    use crate::model::task::TIME_UNSET;

    struct NullStorage;

    impl TaskStorage for NullStorage {
        fn load(&self) -> Option<Vec<Task>> {
            None
        }
        fn save(&self, _tasks: &[Task]) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn store() -> TaskStore {
        TaskStore::load(Box::new(NullStorage))
    }

    #[test]
    fn create_mode_opens_with_defaults() {
        let form = TaskForm::create();
        assert_eq!(form.mode, FormMode::Create);
        assert!(form.title.is_empty());
        assert!(form.time.is_empty());
        assert_eq!(form.category, Category::Work);
        assert!(!form.important);
        assert!(!form.can_commit());
    }

    #[test]
    fn edit_mode_prefills_from_the_task() {
        let store = store();
        let task = store.get("5").unwrap();
        let form = TaskForm::edit(task);
        assert_eq!(form.mode, FormMode::Edit("5".into()));
        assert_eq!(form.title, "Finish project proposal");
        assert_eq!(form.time, "due tomorrow");
        assert_eq!(form.category, Category::Work);
        assert!(form.important);
    }

    #[test]
    fn commit_in_create_mode_adds_a_task() {
        let mut store = store();
        let mut form = TaskForm::create();
        form.title = "Buy milk".into();
        form.category = Category::Life;

        assert!(form.commit(&mut store).unwrap());
        assert_eq!(store.len(), 6);
        assert_eq!(store.tasks()[0].title, "Buy milk");
        assert_eq!(store.tasks()[0].time, TIME_UNSET);
    }

    #[test]
    fn commit_in_edit_mode_patches_the_task() {
        let mut store = store();
        let mut form = TaskForm::edit(store.get("3").unwrap());
        form.title = "Buy groceries for the week".into();
        form.important = true;

        assert!(form.commit(&mut store).unwrap());
        assert_eq!(store.len(), 5);
        let task = store.get("3").unwrap();
        assert_eq!(task.title, "Buy groceries for the week");
        assert!(task.important);
        // Flags untouched by the form stay as they were
        assert!(!task.completed);
    }

    #[test]
    fn blank_title_refuses_to_commit() {
        let mut store = store();
        let mut form = TaskForm::create();
        form.title = "   ".into();

        assert!(!form.commit(&mut store).unwrap());
        assert_eq!(store.len(), 5);

        let mut edit = TaskForm::edit(store.get("3").unwrap());
        edit.title = "".into();
        assert!(!edit.commit(&mut store).unwrap());
        assert_eq!(store.get("3").unwrap().title, "Buy groceries");
    }

    #[test]
    fn editing_a_deleted_task_commits_as_a_no_op() {
        let mut store = store();
        let form = TaskForm::edit(store.get("4").unwrap());
        store.delete("4").unwrap();

        // Commit succeeds (form closes) but nothing reappears
        assert!(form.commit(&mut store).unwrap());
        assert_eq!(store.len(), 4);
        assert!(store.get("4").is_none());
    }
}
