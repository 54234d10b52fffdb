//! Runs the user's action through the system shell.
//!
//! The command line is passed verbatim to `sh -c` (or `cmd /C`), so it is
//! trusted input: quoting, pipes and redirections all behave as they would
//! when typed at a prompt.

use crate::error::{Result, ThrottlerError};
use std::ffi::OsStr;
use std::process::{Command, ExitStatus};

fn shell_command(command: &OsStr) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }

    #[cfg(not(target_os = "windows"))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

/// Run `command` and block until it finishes.
///
/// The child inherits stdin, stdout and stderr. Its exit status is returned
/// for logging only.
pub fn run_action(command: &OsStr) -> Result<ExitStatus> {
    log::debug!("Running action: {}", command.to_string_lossy());

    let status = shell_command(command)
        .status()
        .map_err(ThrottlerError::Action)?;

    if status.success() {
        log::debug!("Action finished: {}", status);
    } else {
        log::warn!("Action '{}' exited with {}", command.to_string_lossy(), status);
    }

    Ok(status)
}
