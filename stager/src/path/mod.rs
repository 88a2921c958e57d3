//! Path handling for manifest construction.
//!
//! Everything in this module works on logical, `/`-separated path
//! strings; nothing here touches the filesystem. Three concerns live
//! here:
//!
//! - [`PrefixStack`]: the nested source/destination scope stack that
//!   gives relative paths their current roots.
//! - [`translate`]: conversion between native Windows paths and cygwin
//!   emulation paths, selected by an explicit [`PathSyntax`] mode.
//! - [`ancestors`]: longest-prefix-first enumeration of a path and its
//!   parent directories.
//!
//! # Examples
//!
//! ```
//! use stager::path::PrefixStack;
//!
//! let mut stack = PrefixStack::new("src", "dst");
//! stack.push("bin", "bin");
//! assert_eq!(stack.resolve_src("app"), "src/bin/app");
//! stack.pop_named("bin").unwrap();
//! ```

pub mod ancestors;
pub mod prefix;
pub mod translate;

pub use ancestors::{ancestors, Ancestors};
pub use prefix::PrefixStack;
pub use translate::{translate, PathSyntax};
