//! In-memory port implementations for use case tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::entities::{SettingsMap, Username};
use crate::error::Error;
use crate::ports::{
    CredentialStore, ProcessLauncher, SettingsRepository, UserInteraction, UserListRepository,
};

#[derive(Default)]
pub struct MemoryCredentialStore {
    pub passwords: Mutex<HashMap<String, String>>,
    pub fail_writes: bool,
}

impl MemoryCredentialStore {
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn password_of(&self, name: &str) -> Option<String> {
        self.passwords.lock().unwrap().get(name).cloned()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn store_password(&self, username: &Username, password: &str) -> Result<(), Error> {
        if self.fail_writes {
            return Err(Error::CredentialStorage("keyring locked".to_string()));
        }
        self.passwords
            .lock()
            .unwrap()
            .insert(username.to_string(), password.to_string());
        Ok(())
    }

    async fn get_password(&self, username: &Username) -> Result<Option<String>, Error> {
        Ok(self.password_of(username.as_str()))
    }

    async fn delete_password(&self, username: &Username) -> Result<(), Error> {
        if self.fail_writes {
            return Err(Error::CredentialStorage("keyring locked".to_string()));
        }
        self.passwords.lock().unwrap().remove(username.as_str());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryUserList {
    pub users: Mutex<Vec<Username>>,
    pub saves: Mutex<usize>,
    pub fail_load: bool,
    pub fail_save: bool,
}

impl MemoryUserList {
    pub fn with_users(names: &[&str]) -> Self {
        let users = names.iter().map(|n| Username::parse(*n).unwrap()).collect();
        Self {
            users: Mutex::new(users),
            ..Default::default()
        }
    }

    pub fn unreadable() -> Self {
        Self {
            fail_load: true,
            ..Default::default()
        }
    }

    pub fn read_only(names: &[&str]) -> Self {
        Self {
            fail_save: true,
            ..Self::with_users(names)
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.to_string())
            .collect()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl UserListRepository for MemoryUserList {
    async fn load_users(&self) -> Result<Vec<Username>, Error> {
        if self.fail_load {
            return Err(Error::Storage("failed to parse users file".to_string()));
        }
        Ok(self.users.lock().unwrap().clone())
    }

    async fn save_users(&self, users: &[Username]) -> Result<(), Error> {
        if self.fail_save {
            return Err(Error::Storage("users file is read-only".to_string()));
        }
        *self.users.lock().unwrap() = users.to_vec();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemorySettings {
    pub settings: Mutex<SettingsMap>,
    pub fail_load: bool,
    pub fail_save: bool,
}

impl MemorySettings {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        let settings = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            settings: Mutex::new(settings),
            ..Default::default()
        }
    }

    pub fn unreadable() -> Self {
        Self {
            fail_load: true,
            ..Default::default()
        }
    }

    pub fn read_only() -> Self {
        Self {
            fail_save: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl SettingsRepository for MemorySettings {
    async fn load_settings(&self) -> Result<SettingsMap, Error> {
        if self.fail_load {
            return Err(Error::Storage("failed to parse settings file".to_string()));
        }
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn save_settings(&self, settings: &SettingsMap) -> Result<(), Error> {
        if self.fail_save {
            return Err(Error::Storage("settings file is read-only".to_string()));
        }
        *self.settings.lock().unwrap() = settings.clone();
        Ok(())
    }
}

/// Records every spawn instead of starting a process.
#[derive(Default)]
pub struct RecordingLauncher {
    pub spawned: Mutex<Vec<(String, Vec<String>)>>,
    pub fail: bool,
}

impl RecordingLauncher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.spawned.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessLauncher for RecordingLauncher {
    async fn spawn_detached(&self, command: &str, args: &[String]) -> Result<(), Error> {
        self.spawned
            .lock()
            .unwrap()
            .push((command.to_string(), args.to_vec()));
        if self.fail {
            return Err(Error::Launch {
                command: command.to_string(),
                reason: "No such file or directory".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Information(String, String),
    Warning(String, String),
    Error(String, String),
    Question(String, String),
}

/// Answers questions from a queue (defaulting to yes) and records messages.
#[derive(Default)]
pub struct ScriptedInteraction {
    pub answers: Mutex<VecDeque<bool>>,
    pub shown: Mutex<Vec<Shown>>,
}

impl ScriptedInteraction {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            shown: Mutex::new(Vec::new()),
        }
    }

    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter_map(|s| match s {
                Shown::Error(_, msg) => Some(msg),
                _ => None,
            })
            .collect()
    }
}

impl UserInteraction for ScriptedInteraction {
    fn show_information(&self, title: &str, message: &str) {
        self.shown
            .lock()
            .unwrap()
            .push(Shown::Information(title.to_string(), message.to_string()));
    }

    fn show_warning(&self, title: &str, message: &str) {
        self.shown
            .lock()
            .unwrap()
            .push(Shown::Warning(title.to_string(), message.to_string()));
    }

    fn show_error(&self, title: &str, message: &str) {
        self.shown
            .lock()
            .unwrap()
            .push(Shown::Error(title.to_string(), message.to_string()));
    }

    fn ask_question(&self, title: &str, message: &str) -> bool {
        self.shown
            .lock()
            .unwrap()
            .push(Shown::Question(title.to_string(), message.to_string()));
        self.answers.lock().unwrap().pop_front().unwrap_or(true)
    }
}
