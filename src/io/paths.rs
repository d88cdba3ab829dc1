use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// File name of the persisted task list
pub const TASKS_FILE: &str = "tasks.json";
/// File name of the optional board configuration
pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the board data directory: an explicit `--data-dir` override
/// wins, otherwise the platform data directory for this application.
pub fn data_dir(override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    ProjectDirs::from("", "", "taskboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn tasks_path(data_dir: &Path) -> PathBuf {
    data_dir.join(TASKS_FILE)
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}
