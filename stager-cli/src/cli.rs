//! CLI structure and command definitions.

use crate::commands::{
    AncestorsCommand, CompletionsCommand, MkdirsCommand, RunCommand, TranslateCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for staging-manifest path utilities.
#[derive(Parser)]
#[command(name = "stager")]
#[command(version, about = "Staging-manifest path utilities", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a path between Windows and cygwin syntax
    Translate(TranslateCommand),

    /// List a path and its ancestors, longest first
    Ancestors(AncestorsCommand),

    /// Create a directory and all missing ancestors
    Mkdirs(MkdirsCommand),

    /// Run a shell command, failing loudly on any error
    Run(RunCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
