//! Common test utilities for integration tests.

use stager::{BuildConfig, BuildVersion, Manifest};

/// Builder for creating test manifests with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::ManifestFixture;
/// let manifest = ManifestFixture::new()
///     .with_platform("windows")
///     .with_bases("checkout", "stage")
///     .build();
/// ```
#[allow(dead_code)]
pub struct ManifestFixture {
    base_src: String,
    base_dst: String,
    grid: String,
    platform: String,
    version: BuildVersion,
}

#[allow(dead_code)]
impl ManifestFixture {
    /// Creates a new fixture builder with default values.
    pub fn new() -> Self {
        Self {
            base_src: "src".to_string(),
            base_dst: "dst".to_string(),
            grid: "default".to_string(),
            platform: "darwin".to_string(),
            version: BuildVersion([1, 2, 3, 4]),
        }
    }

    /// Sets the base source and destination directories.
    pub fn with_bases(mut self, base_src: &str, base_dst: &str) -> Self {
        self.base_src = base_src.to_string();
        self.base_dst = base_dst.to_string();
        self
    }

    /// Sets the target platform.
    pub fn with_platform(mut self, platform: &str) -> Self {
        self.platform = platform.to_string();
        self
    }

    /// Sets the build version.
    pub fn with_version(mut self, version: [u32; 4]) -> Self {
        self.version = BuildVersion(version);
        self
    }

    /// Builds the manifest.
    pub fn build(self) -> Manifest {
        let config = BuildConfig::new(self.grid, self.platform, self.version);
        Manifest::new(self.base_src, self.base_dst, config)
    }
}

impl Default for ManifestFixture {
    fn default() -> Self {
        Self::new()
    }
}
