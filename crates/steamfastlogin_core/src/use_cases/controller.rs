use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::entities::{SettingsMap, Username};
use crate::error::Error;
use crate::launch_args::{build_login_args, build_shutdown_args, resolve_steam_command};
use crate::ports::{
    CredentialStore, ProcessLauncher, SettingsRepository, UserInteraction, UserListRepository,
};
use crate::use_cases::{SettingsStore, UserDirectory};

const ERROR_TITLE: &str = "Error";

/// Business logic behind the presentation layer's actions.
///
/// Every operation reports failures through [`UserInteraction::show_error`]
/// and returns a plain success flag, so callers only decide how to refresh
/// their view.
pub struct Controller<R, C, S, L, U>
where
    R: UserListRepository,
    C: CredentialStore,
    S: SettingsRepository,
    L: ProcessLauncher,
    U: UserInteraction,
{
    users: UserDirectory<R, C>,
    settings: SettingsStore<S>,
    launcher: Arc<L>,
    ui: Arc<U>,
}

impl<R, C, S, L, U> Controller<R, C, S, L, U>
where
    R: UserListRepository,
    C: CredentialStore,
    S: SettingsRepository,
    L: ProcessLauncher,
    U: UserInteraction,
{
    pub fn new(
        users: UserDirectory<R, C>,
        settings: SettingsStore<S>,
        launcher: Arc<L>,
        ui: Arc<U>,
    ) -> Self {
        Self {
            users,
            settings,
            launcher,
            ui,
        }
    }

    pub fn users(&self) -> &UserDirectory<R, C> {
        &self.users
    }

    pub fn settings_store(&self) -> &SettingsStore<S> {
        &self.settings
    }

    /// Starts Steam logged in as `name`. The spawned client is not waited on.
    #[instrument(skip(self), fields(user = %name))]
    pub async fn login(&self, name: &Username) -> bool {
        match self.try_login(name).await {
            Ok(()) => true,
            Err(e) => self.report(e),
        }
    }

    /// Asks for confirmation, then tells Steam to shut down.
    #[instrument(skip(self))]
    pub async fn close_steam(&self) -> bool {
        if !self
            .ui
            .ask_question("Close Steam", "Are you sure you want to close Steam?")
        {
            return false;
        }

        match self.settings.get().await {
            Ok(settings) => {
                let command = resolve_steam_command(&settings);
                info!(command = %command, "shutting down steam");
                self.launch(&command, &build_shutdown_args()).await;
                true
            }
            Err(e) => self.report(e),
        }
    }

    #[instrument(skip(self, password))]
    pub async fn add_user(&self, name: &str, password: &str) -> bool {
        let result = match Username::parse(name) {
            Ok(name) => self.users.add(&name, password).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => true,
            Err(e) => self.report(e),
        }
    }

    /// Removes `name` after confirmation. Returns whether a user was removed.
    #[instrument(skip(self), fields(user = %name))]
    pub async fn remove_user(&self, name: &Username) -> bool {
        let question = format!("Are you sure you want to remove user '{}'?", name);
        if !self.ui.ask_question("Remove User", &question) {
            return false;
        }

        match self.users.remove(name).await {
            Ok(removed) => removed,
            Err(e) => self.report(e),
        }
    }

    /// Current settings, or `None` after reporting a load failure.
    pub async fn settings(&self) -> Option<SettingsMap> {
        match self.settings.get().await {
            Ok(settings) => Some(settings),
            Err(e) => {
                self.report(e);
                None
            }
        }
    }

    pub async fn save_settings(&self, settings: SettingsMap) -> bool {
        match self.settings.set(settings).await {
            Ok(()) => true,
            Err(e) => self.report(e),
        }
    }

    async fn try_login(&self, name: &Username) -> Result<(), Error> {
        let user = self.users.get(name);
        let password = user
            .password()
            .await?
            .ok_or_else(|| Error::PasswordNotFound(name.to_string()))?;

        let command = resolve_steam_command(&self.settings.get().await?);
        info!(command = %command, "launching steam");
        self.launch(&command, &build_login_args(name, &password))
            .await;
        Ok(())
    }

    async fn launch(&self, command: &str, args: &[String]) {
        // Launch failures are not surfaced to the user
        if let Err(e) = self.launcher.spawn_detached(command, args).await {
            warn!(error = %e, command = %command, "steam did not start");
        }
    }

    fn report(&self, e: Error) -> bool {
        error!(error = %e, "operation failed");
        self.ui.show_error(ERROR_TITLE, &e.to_string());
        false
    }
}
