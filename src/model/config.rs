use std::collections::HashMap;

use serde::Deserialize;

/// Optional board configuration (`config.toml` in the data directory)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot, e.g. `accent = "#FF6B6B"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
