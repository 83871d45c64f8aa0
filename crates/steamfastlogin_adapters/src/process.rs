#[cfg(unix)]
use std::os::unix::process::CommandExt;
use std::process::Stdio;

use async_trait::async_trait;
use steamfastlogin_core::error::Error;
use steamfastlogin_core::ports::ProcessLauncher;
use tokio::process::Command;
use tracing::{debug, info};

/// Spawns Steam and lets it run on its own.
///
/// Standard streams are detached so the client does not write into the
/// terminal, and the child handle is dropped without waiting. On Unix the
/// child gets its own process group, so a Ctrl-C aimed at the CLI does not
/// reach Steam.
#[derive(Default)]
pub struct SteamProcessLauncher;

impl SteamProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

fn build_command(command: &str, args: &[String]) -> Command {
    let mut std_cmd = std::process::Command::new(command);
    std_cmd
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    #[cfg(unix)]
    std_cmd.process_group(0);

    let mut cmd = Command::from(std_cmd);
    cmd.kill_on_drop(false);
    cmd
}

#[async_trait]
impl ProcessLauncher for SteamProcessLauncher {
    // Arguments may carry a password and are never logged
    async fn spawn_detached(&self, command: &str, args: &[String]) -> Result<(), Error> {
        info!(command = %command, arg_count = args.len(), "spawning process");

        let child = build_command(command, args)
            .spawn()
            .map_err(|e| Error::Launch {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        debug!(pid = ?child.id(), "process started");
        Ok(())
    }
}
