use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use steamfastlogin_core::Error;
use tokio::fs::DirBuilder;

pub const APP_NAME: &str = "steam-fast-login";
pub const USERS_FILE: &str = "users.json";
pub const SETTINGS_FILE: &str = "settings.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Per-user config directory, e.g. `~/.config/steam-fast-login` on Linux.
pub fn config_dir() -> Result<PathBuf, Error> {
    project_dirs()
        .map(|d| d.config_dir().to_path_buf())
        .ok_or(Error::HomeDirectoryNotFound)
}

/// Where rolling log files go; falls back to `./logs`.
pub fn log_dir() -> PathBuf {
    project_dirs()
        .map(|d| d.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Creates `dir` (and parents) if needed. On Unix new directories get mode
/// `0o750`.
pub async fn ensure_config_dir(dir: &Path) -> Result<(), Error> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o750);
    builder.create(dir).await?;
    Ok(())
}
