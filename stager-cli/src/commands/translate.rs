//! Command to convert a path between Windows and cygwin syntax.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use stager::path::{translate, PathSyntax};

/// Convert a path to the requested syntax.
#[derive(Args)]
pub struct TranslateCommand {
    /// Path to translate
    pub path: String,

    /// Target syntax: "windows" or "cygwin"
    #[arg(long, value_name = "SYNTAX")]
    pub to: PathSyntax,
}

impl TranslateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let translated = translate(&self.path, self.to)?;
        println!("{translated}");
        Ok(())
    }
}
