//! Command to list a path and its ancestors.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use stager::path::ancestors;

/// Print a path and its ancestors, one per line, longest first.
#[derive(Args)]
pub struct AncestorsCommand {
    /// Path to enumerate
    pub path: String,
}

impl AncestorsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if self.path.trim_matches('/').is_empty() {
            return Err(CliError::InvalidArguments(
                "path must have at least one component".to_string(),
            ));
        }
        for ancestor in ancestors(&self.path) {
            println!("{ancestor}");
        }
        Ok(())
    }
}
