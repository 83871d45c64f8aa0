use std::sync::Arc;

use tracing::{debug, error};

use crate::entities::{NewUserForm, SettingsMap, Username};
use crate::ports::{
    CredentialStore, ProcessLauncher, SettingsRepository, UserInteraction, UserListRepository,
};
use crate::use_cases::Controller;

const NO_SELECTION: &str = "No user selected";

/// Maps presentation actions (which act on "the selected user" or a
/// submitted form) onto the [`Controller`].
pub struct AppController<R, C, S, L, U>
where
    R: UserListRepository,
    C: CredentialStore,
    S: SettingsRepository,
    L: ProcessLauncher,
    U: UserInteraction,
{
    controller: Controller<R, C, S, L, U>,
    ui: Arc<U>,
}

impl<R, C, S, L, U> AppController<R, C, S, L, U>
where
    R: UserListRepository,
    C: CredentialStore,
    S: SettingsRepository,
    L: ProcessLauncher,
    U: UserInteraction,
{
    pub fn new(controller: Controller<R, C, S, L, U>, ui: Arc<U>) -> Self {
        Self { controller, ui }
    }

    pub fn controller(&self) -> &Controller<R, C, S, L, U> {
        &self.controller
    }

    /// Usernames to populate the list with, or `None` after reporting a
    /// load failure.
    pub async fn users(&self) -> Option<Vec<Username>> {
        match self.controller.users().list().await {
            Ok(users) => Some(users),
            Err(e) => {
                error!(error = %e, "failed to load users");
                self.ui.show_error("Error", &e.to_string());
                None
            }
        }
    }

    pub async fn login(&self, selection: Option<&str>) -> bool {
        match Self::selected(selection) {
            Some(name) => self.controller.login(&name).await,
            None => {
                self.ui.show_warning("Login", NO_SELECTION);
                false
            }
        }
    }

    pub async fn add(&self, form: &NewUserForm) -> bool {
        if !form.is_complete() {
            self.ui
                .show_error("New User", "Must enter username and password");
            return false;
        }
        self.controller.add_user(&form.username, &form.password).await
    }

    pub async fn remove(&self, selection: Option<&str>) -> bool {
        match Self::selected(selection) {
            Some(name) => self.controller.remove_user(&name).await,
            None => {
                self.ui.show_warning("Remove User", NO_SELECTION);
                false
            }
        }
    }

    /// Values used to prefill the settings form.
    pub async fn open_settings(&self) -> Option<SettingsMap> {
        self.controller.settings().await
    }

    /// Writes the form's fields over the current settings. Keys the form does
    /// not know about are preserved.
    pub async fn submit_settings(&self, form: SettingsMap) -> bool {
        let Some(mut settings) = self.controller.settings().await else {
            return false;
        };
        debug!(fields = form.len(), "settings form submitted");
        settings.extend(form);
        self.controller.save_settings(settings).await
    }

    pub async fn close_steam(&self) -> bool {
        self.controller.close_steam().await
    }

    fn selected(selection: Option<&str>) -> Option<Username> {
        selection.and_then(|s| Username::parse(s).ok())
    }
}
