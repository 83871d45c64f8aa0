use async_trait::async_trait;
use keyring::Entry;
use steamfastlogin_core::entities::Username;
use steamfastlogin_core::ports::CredentialStore;
use steamfastlogin_core::Error;
use tracing::{debug, instrument};

/// Keyring service name every password is filed under.
pub const KEYRING_NAMESPACE: &str = "steamfastlogin";

/// Keyring-based credential store (Secret Service / Keychain / Credential
/// Manager depending on the platform). The keyring account is the username.
pub struct KeyringCredentialStore {
    service: String,
}

impl KeyringCredentialStore {
    pub fn new() -> Self {
        Self::with_service(KEYRING_NAMESPACE)
    }

    /// Store entries under a different service name, e.g. to keep test
    /// entries apart from real ones.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn get_entry(&self, username: &Username) -> Result<Entry, Error> {
        Entry::new(&self.service, username.as_str())
            .map_err(|e| Error::CredentialStorage(format!("failed to create keyring entry: {}", e)))
    }
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for KeyringCredentialStore {
    #[instrument(skip(self, password), fields(user = %username))]
    async fn store_password(&self, username: &Username, password: &str) -> Result<(), Error> {
        let entry = self.get_entry(username)?;

        // Keyring backends block on D-Bus / system calls
        let password = password.to_string();
        tokio::task::spawn_blocking(move || {
            entry
                .set_password(&password)
                .map_err(|e| Error::CredentialStorage(format!("failed to store password: {}", e)))
        })
        .await
        .map_err(|e| Error::CredentialStorage(format!("task join error: {}", e)))?
    }

    #[instrument(skip(self), fields(user = %username))]
    async fn get_password(&self, username: &Username) -> Result<Option<String>, Error> {
        let entry = self.get_entry(username)?;

        tokio::task::spawn_blocking(move || match entry.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(Error::CredentialStorage(format!(
                "failed to get password: {}",
                e
            ))),
        })
        .await
        .map_err(|e| Error::CredentialStorage(format!("task join error: {}", e)))?
    }

    #[instrument(skip(self), fields(user = %username))]
    async fn delete_password(&self, username: &Username) -> Result<(), Error> {
        let entry = self.get_entry(username)?;

        tokio::task::spawn_blocking(move || match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => {
                debug!("no keyring entry to delete");
                Ok(())
            }
            Err(e) => Err(Error::CredentialStorage(format!(
                "failed to delete password: {}",
                e
            ))),
        })
        .await
        .map_err(|e| Error::CredentialStorage(format!("task join error: {}", e)))?
    }
}
