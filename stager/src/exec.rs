//! Host-process helpers: shell execution and directory materialization.
//!
//! These two operations are the only places the core touches the real
//! filesystem and shell, so they are kept in one narrow module that
//! callers and tests can substitute.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Executes `command` through the host shell and captures its standard
/// output.
///
/// A single synchronous invocation with no retry and no timeout. The
/// output is returned exactly as produced, trailing newline included.
///
/// # Errors
///
/// Returns [`Error::CommandFailed`] on a non-zero exit status or when
/// the shell cannot be launched; a missing executable surfaces the same
/// way as an ordinary failure. The error carries the command line and
/// the exit status plus any captured stderr.
///
/// # Examples
///
/// ```
/// use stager::exec::run_command;
///
/// let output = run_command("echo Hello").unwrap();
/// assert_eq!(output, "Hello\n");
/// assert!(run_command("fff_garbage").is_err());
/// ```
pub fn run_command(command: &str) -> Result<String> {
    log::debug!("running command: {command}");

    let output = shell(command).output().map_err(|e| Error::CommandFailed {
        command: command.to_string(),
        detail: format!("failed to launch: {e}"),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let mut detail = output.status.to_string();
        if !stderr.trim().is_empty() {
            detail.push_str(": ");
            detail.push_str(stderr.trim());
        }
        return Err(Error::CommandFailed {
            command: command.to_string(),
            detail,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(unix)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

/// Creates `path` and every missing ancestor directory.
///
/// Idempotent: an already-existing path is a no-op.
///
/// # Errors
///
/// Returns [`Error::Io`] if a directory cannot be created.
///
/// # Examples
///
/// ```no_run
/// use stager::exec::ensure_dirs;
/// use std::path::Path;
///
/// ensure_dirs(Path::new("build/stage/bin")).unwrap();
/// ```
pub fn ensure_dirs(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}
