//! Command to create a directory and all missing ancestors.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use stager::exec::ensure_dirs;
use std::path::PathBuf;

/// Create a directory tree (`mkdir -p` semantics).
#[derive(Args)]
pub struct MkdirsCommand {
    /// Directory to create
    pub path: PathBuf,
}

impl MkdirsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        ensure_dirs(&self.path)?;
        if global.verbose {
            eprintln!("created {}", self.path.display());
        }
        Ok(())
    }
}
