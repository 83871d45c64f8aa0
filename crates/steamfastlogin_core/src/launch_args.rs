use crate::entities::{SettingsMap, Username, STEAM_PATH_KEY};

/// Command used when no Steam path has been configured; resolved through `PATH`.
pub const DEFAULT_STEAM_COMMAND: &str = "steam";

/// Picks the executable to run: the configured path if it is non-empty,
/// otherwise [`DEFAULT_STEAM_COMMAND`].
pub fn resolve_steam_command(settings: &SettingsMap) -> String {
    match settings.get(STEAM_PATH_KEY) {
        Some(path) if !path.is_empty() => path.clone(),
        _ => DEFAULT_STEAM_COMMAND.to_string(),
    }
}

/// Arguments that make a running or fresh Steam client log in as `username`.
pub fn build_login_args(username: &Username, password: &str) -> Vec<String> {
    vec![
        "-login".to_string(),
        username.as_str().to_string(),
        password.to_string(),
    ]
}

/// Arguments that ask a running Steam client to exit.
pub fn build_shutdown_args() -> Vec<String> {
    vec!["-shutdown".to_string()]
}
