//! CLI command implementations.

pub mod ancestors;
pub mod completions;
pub mod mkdirs;
pub mod run;
pub mod translate;

pub use ancestors::AncestorsCommand;
pub use completions::CompletionsCommand;
pub use mkdirs::MkdirsCommand;
pub use run::RunCommand;
pub use translate::TranslateCommand;
