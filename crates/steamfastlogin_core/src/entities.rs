use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Key under which the Steam executable path is stored in the settings file.
pub const STEAM_PATH_KEY: &str = "steam_path";

/// Flat string-to-string mapping persisted in `settings.json`.
///
/// The store is schema-less: keys other than [`STEAM_PATH_KEY`] are kept
/// as-is so older and newer versions can share a file.
pub type SettingsMap = BTreeMap<String, String>;

/// A Steam account name as stored in the user list.
///
/// Uniqueness is by exact string comparison. Empty or whitespace-only names
/// are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn parse(name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidUsername(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> Self {
        name.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data submitted from the "New User" form.
#[derive(Debug, Clone, Default)]
pub struct NewUserForm {
    pub username: String,
    pub password: String,
}

impl NewUserForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields must be filled in before the form can be submitted.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}
