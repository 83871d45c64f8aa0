use async_trait::async_trait;

use crate::entities::{SettingsMap, Username};
use crate::error::Error;

/// Secure password storage (OS keyring), one entry per username.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Store or overwrite the password for a user
    async fn store_password(&self, username: &Username, password: &str) -> Result<(), Error>;

    /// Retrieve the stored password, `None` when there is no entry
    async fn get_password(&self, username: &Username) -> Result<Option<String>, Error>;

    /// Delete the stored password. Deleting a missing entry succeeds.
    async fn delete_password(&self, username: &Username) -> Result<(), Error>;
}

/// Persistence for the ordered list of usernames (no secrets).
#[async_trait]
pub trait UserListRepository: Send + Sync {
    /// Load the list in file order; a missing file is an empty list
    async fn load_users(&self) -> Result<Vec<Username>, Error>;

    /// Overwrite the stored list
    async fn save_users(&self, users: &[Username]) -> Result<(), Error>;
}

/// Persistence for the flat settings mapping.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load the mapping; a missing file is an empty mapping
    async fn load_settings(&self) -> Result<SettingsMap, Error>;

    /// Overwrite the stored mapping
    async fn save_settings(&self, settings: &SettingsMap) -> Result<(), Error>;
}

/// Fire-and-forget process spawning.
///
/// Implementations start the process and return as soon as it is spawned;
/// the child is never awaited.
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    async fn spawn_detached(&self, command: &str, args: &[String]) -> Result<(), Error>;
}

/// Messages and confirmations shown by the presentation layer.
pub trait UserInteraction: Send + Sync {
    fn show_information(&self, title: &str, message: &str);

    fn show_warning(&self, title: &str, message: &str);

    fn show_error(&self, title: &str, message: &str);

    /// Yes/no question; `true` means yes
    fn ask_question(&self, title: &str, message: &str) -> bool;
}
