use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::Task;

/// Error type for task persistence
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize tasks: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Persistence collaborator for the task store.
///
/// The store is constructed with one of these and re-serializes the whole
/// list through it after every effective mutation. Exactly one writer
/// exists per session, so there is no locking.
pub trait TaskStorage {
    /// Load the stored task list. `None` when nothing usable is stored;
    /// the caller falls back to the seed set.
    fn load(&self) -> Option<Vec<Task>>;

    /// Write the full task list.
    fn save(&self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// File-backed storage: a single `tasks.json` document holding the
/// JSON-serialized task array.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move an unparseable file aside so the next save does not destroy it.
    fn preserve_corrupt(&self) {
        let mut corrupt: OsString = self.path.as_os_str().to_owned();
        corrupt.push(".corrupt");
        if let Err(e) = fs::rename(&self.path, &corrupt) {
            eprintln!(
                "warning: could not preserve corrupt task file {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

impl TaskStorage for JsonFileStorage {
    fn load(&self) -> Option<Vec<Task>> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(tasks) => Some(tasks),
            Err(e) => {
                eprintln!(
                    "warning: {} is not a valid task list ({}); starting from defaults",
                    self.path.display(),
                    e
                );
                self.preserve_corrupt();
                None
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(tasks)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StorageError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }
        atomic_write(&self.path, content.as_bytes()).map_err(|e| StorageError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Write a file atomically: write to a temp file in the same directory,
/// then rename over the target.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
