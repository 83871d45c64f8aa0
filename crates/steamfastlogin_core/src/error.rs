use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("User {0} has already been added")]
    UserAlreadyExists(String),

    #[error("invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("credential storage error: {0}")]
    CredentialStorage(String),

    #[error("no stored password for user '{0}'")]
    PasswordNotFound(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("failed to launch {command}: {reason}")]
    Launch { command: String, reason: String },

    #[error("failed to detect home directory")]
    HomeDirectoryNotFound,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
