mod app_controller;
mod controller;
mod settings_store;
mod user_directory;

#[cfg(test)]
pub(crate) mod testing;

pub use app_controller::AppController;
pub use controller::Controller;
pub use settings_store::SettingsStore;
pub use user_directory::{User, UserDirectory};
