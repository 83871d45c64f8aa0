pub mod configuration;
pub mod credentials;
pub mod paths;
pub mod process;
pub mod settings;
pub mod telemetry;
pub mod users;

// Re-exports for convenience
pub use credentials::KeyringCredentialStore;
pub use process::SteamProcessLauncher;
pub use settings::FileSettingsRepository;
pub use users::FileUserListRepository;
