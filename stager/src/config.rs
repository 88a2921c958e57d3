//! Build configuration for manifest construction.
//!
//! A manifest instance carries one immutable [`BuildConfig`]: the grid
//! (distribution channel) the build targets, the platform name, and a
//! four-part build version. The original configuration mapping is
//! open-ended, so unknown keys are preserved verbatim in [`BuildConfig::extra`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A four-part build version, e.g. `1.2.3.4`.
///
/// # Examples
///
/// ```
/// use stager::BuildVersion;
///
/// let version: BuildVersion = "1.2.3.4".parse().unwrap();
/// assert_eq!(version.parts(), [1, 2, 3, 4]);
/// assert_eq!(version.to_string(), "1.2.3.4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BuildVersion(pub [u32; 4]);

impl BuildVersion {
    /// Returns the four version components in order.
    #[must_use]
    pub const fn parts(&self) -> [u32; 4] {
        self.0
    }
}

impl fmt::Display for BuildVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [major, minor, patch, build] = self.0;
        write!(f, "{major}.{minor}.{patch}.{build}")
    }
}

impl FromStr for BuildVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(Error::Validation {
                field: "version".to_string(),
                message: format!("expected four dot-separated integers, got '{s}'"),
            });
        }
        let mut out = [0u32; 4];
        for (slot, part) in out.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| Error::Validation {
                field: "version".to_string(),
                message: format!("'{part}' is not an integer"),
            })?;
        }
        Ok(Self(out))
    }
}

/// The immutable configuration mapping owned by a manifest instance.
///
/// # Examples
///
/// ```
/// use stager::{BuildConfig, BuildVersion};
///
/// let config = BuildConfig::new("default", "darwin", BuildVersion([1, 2, 3, 4]));
/// assert_eq!(config.platform, "darwin");
/// assert_eq!(config.version.to_string(), "1.2.3.4");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// The grid (distribution channel) this build targets.
    pub grid: String,

    /// The platform this build targets, e.g. `darwin`, `windows`, `linux`.
    pub platform: String,

    /// The four-part build version.
    pub version: BuildVersion,

    /// Any further configuration keys, preserved as given.
    #[serde(flatten, default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl BuildConfig {
    /// Creates a configuration with no extra keys.
    #[must_use]
    pub fn new(
        grid: impl Into<String>,
        platform: impl Into<String>,
        version: BuildVersion,
    ) -> Self {
        Self {
            grid: grid.into(),
            platform: platform.into(),
            version,
            extra: BTreeMap::new(),
        }
    }

    /// Looks up an extra configuration key.
    ///
    /// # Examples
    ///
    /// ```
    /// use stager::{BuildConfig, BuildVersion};
    ///
    /// let config = BuildConfig::new("default", "linux", BuildVersion([1, 0, 0, 0]));
    /// assert!(config.get("artwork_dir").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.extra.get(key)
    }

    /// Parses a configuration from a YAML string and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] on malformed YAML, or
    /// [`Error::Validation`] when required fields are unusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use stager::BuildConfig;
    ///
    /// let config = BuildConfig::from_yaml_str(
    ///     "grid: default\nplatform: darwin\nversion: [1, 2, 3, 4]\n",
    /// ).unwrap();
    /// assert_eq!(config.grid, "default");
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a YAML file and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, plus the same
    /// errors as [`BuildConfig::from_yaml_str`].
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the platform or grid name is empty.
    pub fn validate(&self) -> Result<()> {
        if self.platform.is_empty() {
            return Err(Error::Validation {
                field: "platform".to_string(),
                message: "must be non-empty".to_string(),
            });
        }
        if self.grid.is_empty() {
            return Err(Error::Validation {
                field: "grid".to_string(),
                message: "must be non-empty".to_string(),
            });
        }
        Ok(())
    }
}
