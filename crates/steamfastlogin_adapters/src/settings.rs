use std::path::{Path, PathBuf};

use async_trait::async_trait;
use steamfastlogin_core::entities::SettingsMap;
use steamfastlogin_core::ports::SettingsRepository;
use steamfastlogin_core::Error;
use tokio::fs;
use tracing::{debug, instrument};

use crate::paths::{ensure_config_dir, SETTINGS_FILE};

/// `settings.json`: a flat object of string keys to string values.
pub struct FileSettingsRepository {
    settings_path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            settings_path: config_dir.join(SETTINGS_FILE),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }
}

#[async_trait]
impl SettingsRepository for FileSettingsRepository {
    #[instrument(skip(self))]
    async fn load_settings(&self) -> Result<SettingsMap, Error> {
        if !fs::try_exists(&self.settings_path).await.unwrap_or(false) {
            debug!("settings file not found, returning empty settings");
            return Ok(SettingsMap::new());
        }

        let content = fs::read_to_string(&self.settings_path).await?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Storage(format!("failed to parse settings file: {}", e)))
    }

    #[instrument(skip(self, settings))]
    async fn save_settings(&self, settings: &SettingsMap) -> Result<(), Error> {
        if let Some(parent) = self.settings_path.parent() {
            ensure_config_dir(parent).await?;
        }

        debug!("saving settings to {:?}", self.settings_path);

        let content = serde_json::to_string(settings)
            .map_err(|e| Error::Storage(format!("failed to serialize settings: {}", e)))?;
        fs::write(&self.settings_path, content).await?;
        Ok(())
    }
}
