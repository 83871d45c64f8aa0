mod interaction;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use steamfastlogin_adapters::paths::{self, SETTINGS_FILE, USERS_FILE};
use steamfastlogin_adapters::{
    configuration, telemetry, FileSettingsRepository, FileUserListRepository,
    KeyringCredentialStore, SteamProcessLauncher,
};
use steamfastlogin_core::entities::{NewUserForm, SettingsMap, STEAM_PATH_KEY};
use steamfastlogin_core::error::Error;
use steamfastlogin_core::launch_args::resolve_steam_command;
use steamfastlogin_core::use_cases::{AppController, Controller, SettingsStore, UserDirectory};
use tracing::{debug, warn};

use crate::interaction::TerminalInteraction;

type App = AppController<
    FileUserListRepository,
    KeyringCredentialStore,
    FileSettingsRepository,
    SteamProcessLauncher,
    TerminalInteraction,
>;

#[derive(Parser)]
#[command(author, version, about = "Switch between saved Steam accounts", long_about = None)]
struct Cli {
    /// Answer yes to every confirmation
    #[arg(short, long, global = true, default_value = "false")]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List saved users
    Users,

    /// Save a new user; the password goes to the system keyring
    Add {
        /// Steam account name (prompted for if omitted)
        username: Option<String>,
    },

    /// Remove a saved user and its stored password
    Remove {
        /// Steam account name (pick from the list if omitted)
        username: Option<String>,
    },

    /// Start Steam logged in as a saved user
    Login {
        /// Steam account name (pick from the list if omitted)
        username: Option<String>,
    },

    /// Ask the running Steam client to shut down
    Close,

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },

    /// Show where users, settings and logs are stored
    Paths,
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Print all settings
    Show,

    /// Set a single key, keeping the others
    Set { key: String, value: String },

    /// Set the Steam executable (prompted for if omitted)
    SteamPath { path: Option<String> },
}

fn data_dir(configured: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match configured {
        Some(dir) => Ok(dir),
        None => Ok(paths::config_dir()?),
    }
}

fn build_app(data_dir: PathBuf, assume_yes: bool) -> App {
    let ui = Arc::new(TerminalInteraction::new(assume_yes));
    let users = UserDirectory::new(
        Arc::new(FileUserListRepository::new(data_dir.clone())),
        Arc::new(KeyringCredentialStore::new()),
    );
    let settings = SettingsStore::new(Arc::new(FileSettingsRepository::new(data_dir)));
    let controller = Controller::new(
        users,
        settings,
        Arc::new(SteamProcessLauncher::new()),
        Arc::clone(&ui),
    );
    AppController::new(controller, ui)
}

/// Stand-in for the list widget's current selection. The outer `None` means
/// the user list could not be loaded and the failure was already shown.
async fn select_user(
    app: &App,
    given: Option<String>,
) -> anyhow::Result<Option<Option<String>>> {
    if given.is_some() {
        return Ok(Some(given));
    }

    let Some(users) = app.users().await else {
        return Ok(None);
    };
    let names: Vec<String> = users.iter().map(|u| u.to_string()).collect();
    if names.is_empty() {
        return Ok(Some(None));
    }

    let index = Select::new()
        .with_prompt("Select user")
        .items(&names)
        .default(0)
        .interact_opt()?;
    Ok(Some(index.map(|i| names[i].clone())))
}

fn password_marker(password: &Result<Option<String>, Error>) -> &'static str {
    match password {
        Ok(Some(_)) => "",
        Ok(None) => " [no password saved]",
        Err(_) => " [password unavailable]",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let config = configuration::get_configuration().context("configuration loading failed")?;
    let _guard = telemetry::init_subscriber("steamfastlogin", &config.log_level)?;

    let cli = Cli::parse();
    let data_dir = data_dir(config.data_dir)?;
    debug!(data_dir = %data_dir.display(), "using data directory");

    let app = build_app(data_dir.clone(), cli.yes);

    let ok = match cli.command {
        Commands::Users => match app.users().await {
            None => false,
            Some(users) if users.is_empty() => {
                println!("No users saved.");
                println!("Use 'steamfastlogin add <username>' to add one.");
                true
            }
            Some(users) => {
                for user in &users {
                    let password = app.controller().users().get(user).password().await;
                    if let Err(e) = &password {
                        warn!(user = %user, error = %e, "failed to read stored password");
                    }
                    println!("  {}{}", user, password_marker(&password));
                }
                true
            }
        },

        Commands::Add { username } => {
            let username = match username {
                Some(u) => u,
                None => Input::new().with_prompt("Username").interact_text()?,
            };
            let password = rpassword::prompt_password("Password: ")?;

            let added = app.add(&NewUserForm::new(username.clone(), password)).await;
            if added {
                println!("User '{}' added.", username);
            }
            added
        }

        Commands::Remove { username } => match select_user(&app, username).await? {
            Some(selection) => {
                let removed = app.remove(selection.as_deref()).await;
                if removed {
                    println!("User '{}' removed.", selection.unwrap_or_default());
                }
                removed
            }
            None => false,
        },

        Commands::Login { username } => match select_user(&app, username).await? {
            Some(selection) => app.login(selection.as_deref()).await,
            None => false,
        },

        Commands::Close => app.close_steam().await,

        Commands::Settings { command } => match command {
            SettingsCommands::Show => match app.open_settings().await {
                Some(settings) => {
                    if settings.is_empty() {
                        println!("No settings saved.");
                    }
                    for (key, value) in &settings {
                        println!("{} = {}", key, value);
                    }
                    println!("Steam command: {}", resolve_steam_command(&settings));
                    true
                }
                None => false,
            },
            SettingsCommands::Set { key, value } => {
                let mut form = SettingsMap::new();
                form.insert(key, value);
                app.submit_settings(form).await
            }
            SettingsCommands::SteamPath { path } => {
                let path = match path {
                    Some(p) => p,
                    None => {
                        let current = app
                            .open_settings()
                            .await
                            .and_then(|s| s.get(STEAM_PATH_KEY).cloned())
                            .unwrap_or_default();
                        Input::new()
                            .with_prompt("Path to Steam")
                            .with_initial_text(current)
                            .allow_empty(true)
                            .interact_text()?
                    }
                };
                let mut form = SettingsMap::new();
                form.insert(STEAM_PATH_KEY.to_string(), path);
                app.submit_settings(form).await
            }
        },

        Commands::Paths => {
            println!("Config directory: {}", data_dir.display());
            println!("Users file:       {}", data_dir.join(USERS_FILE).display());
            println!("Settings file:    {}", data_dir.join(SETTINGS_FILE).display());
            println!("Log directory:    {}", paths::log_dir().display());
            true
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
