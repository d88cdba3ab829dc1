use std::fs;
use std::path::Path;

use crate::io::paths::config_path;
use crate::model::config::BoardConfig;

/// Load the board config from the data directory, falling back to
/// defaults when the file is missing or malformed. A malformed config is
/// reported on stderr but never treated as fatal.
pub fn load_config(data_dir: &Path) -> BoardConfig {
    let path = config_path(data_dir);
    let Ok(text) = fs::read_to_string(&path) else {
        return BoardConfig::default();
    };
    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: ignoring malformed {}: {}", path.display(), e);
            BoardConfig::default()
        }
    }
}
