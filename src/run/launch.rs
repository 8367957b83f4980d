use std::ffi::{OsStr, OsString};
use std::io::{self, ErrorKind};
use std::process::{ExitStatus, Stdio};

use crate::{command as CommandTool, signal::pass_control_to_child};

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("command not found: {}", .0.to_string_lossy())]
    NotFound(OsString),
    #[error("failed to launch {}: {source}", command.to_string_lossy())]
    Spawn {
        command: OsString,
        #[source]
        source: io::Error,
    },
}

/// Run `exe` with the current environment and our stdio, waiting for it to finish.
pub(super) fn command(exe: &OsStr, args: &[OsString]) -> Result<ExitStatus, LaunchError> {
    let mut command = CommandTool::create_command(exe);
    command
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    tracing::debug!(command = ?exe, args = ?args, "launching child");
    pass_control_to_child();

    let status = command.status().map_err(|source| match source.kind() {
        ErrorKind::NotFound => LaunchError::NotFound(exe.to_os_string()),
        _ => LaunchError::Spawn {
            command: exe.to_os_string(),
            source,
        },
    })?;

    tracing::debug!(%status, "child exited");
    Ok(status)
}
