//! Main entry point for the stager CLI.
//!
//! Command-line access to the staging-manifest path utilities:
//! - `translate`: convert a path between Windows and cygwin syntax
//! - `ancestors`: list a path and its ancestors, longest first
//! - `mkdirs`: create a directory and all missing ancestors
//! - `run`: run a shell command with strict failure semantics
//! - `completions`: generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let _logger = stager::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        cli::Command::Translate(cmd) => cmd.execute(&global),
        cli::Command::Ancestors(cmd) => cmd.execute(&global),
        cli::Command::Mkdirs(cmd) => cmd.execute(&global),
        cli::Command::Run(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
