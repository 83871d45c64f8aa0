use std::sync::Arc;

use tracing::{debug, instrument};

use crate::entities::{SettingsMap, STEAM_PATH_KEY};
use crate::error::Error;
use crate::ports::SettingsRepository;

pub struct SettingsStore<S>
where
    S: SettingsRepository,
{
    repository: Arc<S>,
}

impl<S> SettingsStore<S>
where
    S: SettingsRepository,
{
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// A copy of the whole mapping.
    pub async fn get(&self) -> Result<SettingsMap, Error> {
        self.repository.load_settings().await
    }

    /// Replaces the mapping wholesale.
    #[instrument(skip(self, settings), fields(keys = settings.len()))]
    pub async fn set(&self, settings: SettingsMap) -> Result<(), Error> {
        debug!("saving settings");
        self.repository.save_settings(&settings).await
    }

    /// Configured Steam executable, `""` when never set.
    pub async fn steam_path(&self) -> Result<String, Error> {
        Ok(self
            .get()
            .await?
            .get(STEAM_PATH_KEY)
            .cloned()
            .unwrap_or_default())
    }
}
