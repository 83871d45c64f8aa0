use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration (as opposed to the user-editable `settings.json`).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    /// Directory holding `users.json` and `settings.json`; the per-user
    /// config directory when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            data_dir: None,
        }
    }
}
