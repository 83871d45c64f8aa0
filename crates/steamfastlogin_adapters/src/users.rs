use std::path::{Path, PathBuf};

use async_trait::async_trait;
use steamfastlogin_core::entities::Username;
use steamfastlogin_core::ports::UserListRepository;
use steamfastlogin_core::Error;
use tokio::fs;
use tracing::{debug, instrument};

use crate::paths::{ensure_config_dir, USERS_FILE};

/// `users.json`: a JSON array of usernames in insertion order.
pub struct FileUserListRepository {
    store_path: PathBuf,
}

impl FileUserListRepository {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            store_path: config_dir.join(USERS_FILE),
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}

#[async_trait]
impl UserListRepository for FileUserListRepository {
    #[instrument(skip(self))]
    async fn load_users(&self) -> Result<Vec<Username>, Error> {
        if !fs::try_exists(&self.store_path).await.unwrap_or(false) {
            debug!("users file not found, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.store_path).await?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Storage(format!("failed to parse users file: {}", e)))
    }

    #[instrument(skip(self, users), fields(count = users.len()))]
    async fn save_users(&self, users: &[Username]) -> Result<(), Error> {
        if let Some(parent) = self.store_path.parent() {
            ensure_config_dir(parent).await?;
        }

        let content = serde_json::to_string(users)
            .map_err(|e| Error::Storage(format!("failed to serialize users: {}", e)))?;
        fs::write(&self.store_path, content).await?;
        Ok(())
    }
}
