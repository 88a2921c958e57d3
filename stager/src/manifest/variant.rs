//! Manifest variants as behavior values.
//!
//! A variant is whatever can drive a [`Manifest`] through its
//! construction: any `Fn(&mut Manifest) -> Result<()>` closure
//! implements [`ManifestVariant`] directly. Variants that refine
//! another platform's construction compose with [`DerivedVariant`]
//! instead of subclassing.

use std::sync::Arc;

use crate::error::Result;
use crate::manifest::context::Manifest;

/// A shareable handle to a registered variant.
pub type VariantHandle = Arc<dyn ManifestVariant>;

/// A platform/architecture-specific manifest description.
///
/// # Examples
///
/// ```
/// use stager::{BuildConfig, BuildVersion, Manifest, ManifestVariant};
///
/// let variant = |m: &mut Manifest| -> stager::Result<()> {
///     m.prefix("bin");
///     m.path("app");
///     m.end_prefix_named("bin")
/// };
///
/// let config = BuildConfig::new("default", "linux", BuildVersion([1, 0, 0, 0]));
/// let mut manifest = Manifest::new("src", "dst", config);
/// variant.construct(&mut manifest).unwrap();
/// assert_eq!(manifest.mappings().len(), 1);
/// ```
pub trait ManifestVariant: Send + Sync {
    /// Drives the manifest through this variant's construction.
    ///
    /// # Errors
    ///
    /// Any error aborts construction for this variant; scope-usage
    /// errors in particular indicate a bug in the description itself.
    fn construct(&self, manifest: &mut Manifest) -> Result<()>;
}

impl std::fmt::Debug for dyn ManifestVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ManifestVariant")
    }
}

impl<F> ManifestVariant for F
where
    F: Fn(&mut Manifest) -> Result<()> + Send + Sync,
{
    fn construct(&self, manifest: &mut Manifest) -> Result<()> {
        self(manifest)
    }
}

/// A variant that runs a parent variant's construction, then its own
/// extension. Replaces construction-behavior inheritance.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use stager::{BuildConfig, BuildVersion, DerivedVariant, Manifest, ManifestVariant};
///
/// let base: Arc<dyn ManifestVariant> = Arc::new(|m: &mut Manifest| -> stager::Result<()> {
///     m.path("README");
///     Ok(())
/// });
/// let derived = DerivedVariant::new(base, |m: &mut Manifest| -> stager::Result<()> {
///     m.path("LICENSE");
///     Ok(())
/// });
///
/// let config = BuildConfig::new("default", "linux", BuildVersion([1, 0, 0, 0]));
/// let mut manifest = Manifest::new("src", "dst", config);
/// derived.construct(&mut manifest).unwrap();
/// assert_eq!(manifest.mappings().len(), 2);
/// ```
pub struct DerivedVariant<E> {
    parent: VariantHandle,
    extension: E,
}

impl<E> DerivedVariant<E>
where
    E: Fn(&mut Manifest) -> Result<()> + Send + Sync,
{
    /// Creates a variant extending `parent` with `extension`.
    pub fn new(parent: VariantHandle, extension: E) -> Self {
        Self { parent, extension }
    }
}

impl<E> ManifestVariant for DerivedVariant<E>
where
    E: Fn(&mut Manifest) -> Result<()> + Send + Sync,
{
    fn construct(&self, manifest: &mut Manifest) -> Result<()> {
        self.parent.construct(manifest)?;
        (self.extension)(manifest)
    }
}
