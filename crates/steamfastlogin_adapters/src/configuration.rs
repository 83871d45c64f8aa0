use std::path::PathBuf;

use config::{Config, Environment, File};
use steamfastlogin_core::config::AppConfig;

use crate::paths;

pub const ENV_PREFIX: &str = "STEAMFASTLOGIN";

/// Layered application config: defaults, system `config.toml`, local
/// `config/config.toml`, then `STEAMFASTLOGIN__*` environment variables.
pub fn get_configuration_with_paths(
    current_dir_path: Option<PathBuf>,
    system_config_dir_path: Option<PathBuf>,
) -> Result<AppConfig, config::ConfigError> {
    let config_directory = current_dir_path.unwrap_or_else(|| {
        std::env::current_dir()
            .map(|p| p.join("config"))
            .unwrap_or_else(|_| PathBuf::from("config"))
    });

    let system_config_dir = match system_config_dir_path {
        Some(path) => path,
        None => paths::config_dir().unwrap_or_else(|_| PathBuf::from("config")),
    };

    let settings = Config::builder()
        .set_default("log_level", "warn")?
        .add_source(File::from(system_config_dir.join("config.toml")).required(false))
        .add_source(File::from(config_directory.join("config.toml")).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    settings.try_deserialize::<AppConfig>()
}

pub fn get_configuration() -> Result<AppConfig, config::ConfigError> {
    get_configuration_with_paths(None, None)
}
