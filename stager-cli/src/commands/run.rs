//! Command to run a shell command with strict failure semantics.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use stager::exec::run_command;
use std::io::Write;

/// Run a command through the host shell and print its output.
///
/// Any failure (non-zero exit, missing executable, launch error) is
/// fatal, matching the semantics manifest steps rely on.
#[derive(Args)]
pub struct RunCommand {
    /// Command line to execute
    pub command: String,
}

impl RunCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let output = run_command(&self.command)?;
        let mut stdout = std::io::stdout();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
