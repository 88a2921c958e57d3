#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # stager
//!
//! A library for constructing platform staging manifests: declarative
//! descriptions of which files from a source tree are staged into a
//! destination tree for packaging.
//!
//! The engine resolves relative paths through nested prefix scopes and
//! dispatches the right manifest variant for a (platform, architecture)
//! pair. It only computes path strings; glob expansion, file copying,
//! and installer packaging are downstream consumers.
//!
//! ## Core Types
//!
//! - [`Manifest`] and [`PathMapping`]: the scoping API and its output
//! - [`ManifestVariant`] and the [`manifest`] registry: per-platform dispatch
//! - [`path::PrefixStack`], [`path::translate()`], [`path::ancestors()`]: path machinery
//! - [`BuildConfig`] and [`BuildVersion`]: the immutable build configuration
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use stager::{BuildConfig, BuildVersion, Manifest};
//!
//! let config = BuildConfig::new("default", "darwin", BuildVersion([1, 2, 3, 4]));
//! let mut manifest = Manifest::new("src", "dst", config);
//!
//! if manifest.prefix("level1") {
//!     assert_eq!(manifest.get_src_prefix(), "src/level1");
//!     manifest.path("readme.txt");
//!     manifest.end_prefix_named("level1").unwrap();
//! }
//!
//! let mappings = manifest.into_mappings().unwrap();
//! assert_eq!(mappings[0].src, "src/level1/readme.txt");
//! ```

pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod manifest;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{BuildConfig, BuildVersion};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use manifest::{DerivedVariant, Manifest, ManifestVariant, PathMapping, VariantHandle};
