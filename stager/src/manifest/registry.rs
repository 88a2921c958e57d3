//! Process-wide manifest-variant registry.
//!
//! Variants register under an explicit two-part key: a platform name
//! (compared case-insensitively) and an optional architecture
//! discriminator (casing preserved). Lookup falls back from the
//! specific `(platform, arch)` key to the bare `platform` key. The
//! registry is append-only for the process lifetime: keys are never
//! removed, though re-registering a key replaces its variant.
//!
//! Registration is expected to happen during a one-time initialization
//! phase; an orchestrator running lookups from other threads must make
//! registration happen-before the first lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, RwLock};

use crate::error::{Error, Result};
use crate::manifest::variant::VariantHandle;

static REGISTRY: LazyLock<RwLock<HashMap<RegistryKey, VariantHandle>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// A registry key: lower-cased platform plus optional architecture.
///
/// # Examples
///
/// ```
/// use stager::manifest::RegistryKey;
///
/// let key = RegistryKey::new("Darwin", Some("Arm64"));
/// assert_eq!(key.to_string(), "darwin_Arm64");
///
/// let bare = RegistryKey::new("linux", None);
/// assert_eq!(bare.to_string(), "linux");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistryKey {
    platform: String,
    arch: Option<String>,
}

impl RegistryKey {
    /// Builds a key, normalizing the platform to lower case. The
    /// architecture keeps its original casing.
    #[must_use]
    pub fn new(platform: &str, arch: Option<&str>) -> Self {
        Self {
            platform: platform.to_lowercase(),
            arch: arch.map(str::to_string),
        }
    }

    /// The normalized platform name.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// The architecture discriminator, if any.
    #[must_use]
    pub fn arch(&self) -> Option<&str> {
        self.arch.as_deref()
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arch {
            Some(arch) => write!(f, "{}_{arch}", self.platform),
            None => write!(f, "{}", self.platform),
        }
    }
}

/// Registers a variant for a platform, optionally narrowed to one
/// architecture.
///
/// Usable standalone at any point before lookup, so entries can be
/// synthesized dynamically (test fixtures, ad-hoc platform aliases)
/// rather than only at declaration sites.
///
/// # Panics
///
/// Panics if the registry lock is poisoned, which only happens after a
/// panic on another thread during the initialization phase.
pub fn register(platform: &str, arch: Option<&str>, variant: VariantHandle) {
    let key = RegistryKey::new(platform, arch);
    log::debug!("registering manifest variant '{key}'");
    REGISTRY
        .write()
        .expect("manifest registry lock poisoned")
        .insert(key, variant);
}

/// Looks up the variant governing `(platform, arch)`.
///
/// The specific `(platform, arch)` entry wins when present; otherwise
/// the bare `platform` entry is returned. Lookup is reference-stable:
/// the same key always yields a handle to the identical registered
/// variant.
///
/// # Errors
///
/// Returns [`Error::PlatformNotFound`] when neither entry exists.
///
/// # Panics
///
/// Panics if the registry lock is poisoned.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use stager::{manifest, Manifest};
///
/// manifest::register("demo_doc", None, Arc::new(|m: &mut Manifest| -> stager::Result<()> {
///     m.path("README");
///     Ok(())
/// }));
///
/// let variant = manifest::for_platform("Demo_Doc", None).unwrap();
/// assert!(manifest::for_platform("absent_doc", None).is_err());
/// # let _ = variant;
/// ```
pub fn for_platform(platform: &str, arch: Option<&str>) -> Result<VariantHandle> {
    let registry = REGISTRY.read().expect("manifest registry lock poisoned");

    if let Some(arch_name) = arch {
        if let Some(variant) = registry.get(&RegistryKey::new(platform, Some(arch_name))) {
            return Ok(Arc::clone(variant));
        }
    }
    if let Some(variant) = registry.get(&RegistryKey::new(platform, None)) {
        return Ok(Arc::clone(variant));
    }

    Err(Error::PlatformNotFound {
        platform: platform.to_string(),
        arch: arch.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildConfig, BuildVersion};
    use crate::manifest::context::Manifest;
    use crate::manifest::variant::ManifestVariant;

    fn noop() -> VariantHandle {
        Arc::new(|_: &mut Manifest| -> Result<()> { Ok(()) })
    }

    // Each test registers under names unique to it; the registry is
    // process-global and append-only.

    #[test]
    fn test_key_normalizes_platform_only() {
        let key = RegistryKey::new("Windows", Some("X64"));
        assert_eq!(key.platform(), "windows");
        assert_eq!(key.arch(), Some("X64"));
        assert_eq!(key.to_string(), "windows_X64");
    }

    #[test]
    fn test_lookup_unregistered_platform() {
        let err = for_platform("rt_never_registered", None).unwrap_err();
        assert!(err.is_not_found());
        assert!(format!("{err}").contains("rt_never_registered"));
    }

    #[test]
    fn test_register_then_lookup() {
        register("rt_basic", None, noop());
        let variant = for_platform("rt_basic", None).unwrap();
        let again = for_platform("RT_Basic", None).unwrap();
        assert!(Arc::ptr_eq(&variant, &again));
    }

    #[test]
    fn test_arch_specific_shadows_general() {
        let general = noop();
        let specific = noop();
        register("rt_shadow", None, Arc::clone(&general));
        register("rt_shadow", Some("Arch"), Arc::clone(&specific));

        let found = for_platform("rt_shadow", Some("Arch")).unwrap();
        assert!(Arc::ptr_eq(&found, &specific));

        let bare = for_platform("rt_shadow", None).unwrap();
        assert!(Arc::ptr_eq(&bare, &general));
    }

    #[test]
    fn test_unknown_arch_falls_back_to_general() {
        let general = noop();
        register("rt_fallback", None, Arc::clone(&general));
        let found = for_platform("rt_fallback", Some("Sparc")).unwrap();
        assert!(Arc::ptr_eq(&found, &general));
    }

    #[test]
    fn test_arch_casing_is_significant() {
        let general = noop();
        let specific = noop();
        register("rt_casing", None, Arc::clone(&general));
        register("rt_casing", Some("Arch"), Arc::clone(&specific));

        // Only the platform portion is normalized.
        let found = for_platform("rt_casing", Some("arch")).unwrap();
        assert!(Arc::ptr_eq(&found, &general));
    }

    #[test]
    fn test_dynamic_registration_after_failed_lookup() {
        assert!(for_platform("rt_extant", None).is_err());
        register("rt_extant", None, noop());
        assert!(for_platform("rt_extant", None).is_ok());
    }

    #[test]
    fn test_reregistration_replaces() {
        let first = noop();
        let second = noop();
        register("rt_replace", None, Arc::clone(&first));
        register("rt_replace", None, Arc::clone(&second));
        let found = for_platform("rt_replace", None).unwrap();
        assert!(Arc::ptr_eq(&found, &second));
    }

    #[test]
    fn test_registered_variant_constructs() {
        register(
            "rt_construct",
            None,
            Arc::new(|m: &mut Manifest| -> Result<()> {
                m.path("README");
                Ok(())
            }),
        );
        let variant = for_platform("rt_construct", None).unwrap();
        let config = BuildConfig::new("default", "rt_construct", BuildVersion([1, 0, 0, 0]));
        let mut m = Manifest::new("src", "dst", config);
        variant.construct(&mut m).unwrap();
        assert_eq!(m.mappings()[0].src, "src/README");
    }
}
