use std::sync::Arc;

use tracing::{debug, instrument};

use crate::entities::Username;
use crate::error::Error;
use crate::ports::{CredentialStore, UserListRepository};

/// Handle to a saved account. Only the name is held; the password is read
/// from the credential store on demand.
pub struct User<C> {
    name: Username,
    credentials: Arc<C>,
}

impl<C> User<C>
where
    C: CredentialStore,
{
    pub fn new(name: Username, credentials: Arc<C>) -> Self {
        Self { name, credentials }
    }

    pub fn name(&self) -> &Username {
        &self.name
    }

    pub async fn password(&self) -> Result<Option<String>, Error> {
        self.credentials.get_password(&self.name).await
    }

    pub async fn set_password(&self, password: &str) -> Result<(), Error> {
        self.credentials.store_password(&self.name, password).await
    }

    pub async fn delete_password(&self) -> Result<(), Error> {
        self.credentials.delete_password(&self.name).await
    }
}

/// Ordered, duplicate-free list of saved usernames, kept in step with the
/// credential store.
///
/// The list file and the keyring are updated one after the other; a crash in
/// between can leave a name without a password or an orphaned password.
pub struct UserDirectory<R, C>
where
    R: UserListRepository,
    C: CredentialStore,
{
    repository: Arc<R>,
    credentials: Arc<C>,
}

impl<R, C> UserDirectory<R, C>
where
    R: UserListRepository,
    C: CredentialStore,
{
    pub fn new(repository: Arc<R>, credentials: Arc<C>) -> Self {
        Self {
            repository,
            credentials,
        }
    }

    /// Usernames in file order.
    pub async fn list(&self) -> Result<Vec<Username>, Error> {
        self.repository.load_users().await
    }

    pub async fn contains(&self, name: &Username) -> Result<bool, Error> {
        Ok(self.list().await?.contains(name))
    }

    /// Stores the password and appends the name.
    ///
    /// Fails with [`Error::UserAlreadyExists`] if the name is already listed.
    #[instrument(skip(self, password), fields(user = %name))]
    pub async fn add(&self, name: &Username, password: &str) -> Result<(), Error> {
        let mut users = self.list().await?;
        if users.contains(name) {
            return Err(Error::UserAlreadyExists(name.to_string()));
        }

        self.get(name).set_password(password).await?;
        users.push(name.clone());
        self.repository.save_users(&users).await?;

        debug!(count = users.len(), "user added");
        Ok(())
    }

    /// Deletes the password and drops the name. Returns `false` when the name
    /// was not listed; nothing is touched in that case.
    #[instrument(skip(self), fields(user = %name))]
    pub async fn remove(&self, name: &Username) -> Result<bool, Error> {
        let mut users = self.list().await?;
        let Some(index) = users.iter().position(|u| u == name) else {
            debug!("user not listed, nothing to remove");
            return Ok(false);
        };

        self.get(name).delete_password().await?;
        users.remove(index);
        self.repository.save_users(&users).await?;

        debug!(count = users.len(), "user removed");
        Ok(true)
    }

    /// Handle for `name`. Does not check that the name is listed.
    pub fn get(&self, name: &Username) -> User<C> {
        User::new(name.clone(), Arc::clone(&self.credentials))
    }
}
