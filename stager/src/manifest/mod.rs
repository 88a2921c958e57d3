//! Manifest construction and platform variant dispatch.
//!
//! A [`Manifest`] holds the prefix stack and build configuration for
//! one build invocation; a [`ManifestVariant`] drives it through the
//! declarative `prefix`/`path`/`end_prefix` description for one
//! platform. Which variant governs a build is decided ahead of time by
//! [`for_platform`] against the process-wide registry.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use stager::{manifest, BuildConfig, BuildVersion, Manifest};
//!
//! manifest::register("kiosk", None, Arc::new(|m: &mut Manifest| -> stager::Result<()> {
//!     if m.prefix("bin") {
//!         m.path("app");
//!         m.end_prefix_named("bin")?;
//!     }
//!     Ok(())
//! }));
//!
//! let variant = manifest::for_platform("kiosk", None).unwrap();
//! let config = BuildConfig::new("default", "kiosk", BuildVersion([1, 0, 0, 0]));
//! let mut m = Manifest::new("src", "dst", config);
//! variant.construct(&mut m).unwrap();
//!
//! let mappings = m.into_mappings().unwrap();
//! assert_eq!(mappings[0].dst, "dst/bin/app");
//! ```

pub mod context;
pub mod registry;
pub mod variant;

pub use context::{Manifest, PathMapping};
pub use registry::{for_platform, register, RegistryKey};
pub use variant::{DerivedVariant, ManifestVariant, VariantHandle};
