//! The manifest orchestrator.
//!
//! A [`Manifest`] is created once per build invocation. A variant's
//! construction body opens nested scopes with [`Manifest::prefix`],
//! records source→destination mappings with [`Manifest::path`], and
//! closes scopes with [`Manifest::end_prefix`]. The manifest only
//! computes path strings; the glob/copy layer consumes the recorded
//! [`PathMapping`]s and performs the actual file materialization.

use std::path::Path;

use crate::config::BuildConfig;
use crate::error::Result;
use crate::exec;
use crate::path::PrefixStack;

/// One recorded staging instruction: copy whatever matches `src` to `dst`.
///
/// Both sides are fully resolved through the prefix stack that was live
/// when the mapping was recorded. `src` may contain wildcards; expansion
/// is the filesystem layer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapping {
    /// Resolved source pattern.
    pub src: String,
    /// Resolved destination pattern.
    pub dst: String,
}

/// A platform staging manifest under construction.
///
/// Owns exactly one prefix stack, the base source/destination
/// directories, and an immutable build configuration.
///
/// # Examples
///
/// ```
/// use stager::{BuildConfig, BuildVersion, Manifest};
///
/// let config = BuildConfig::new("default", "darwin", BuildVersion([1, 2, 3, 4]));
/// let mut manifest = Manifest::new("src", "dst", config);
///
/// if manifest.prefix("bin") {
///     manifest.path("app");
///     manifest.end_prefix_named("bin").unwrap();
/// }
///
/// let mappings = manifest.into_mappings().unwrap();
/// assert_eq!(mappings[0].src, "src/bin/app");
/// assert_eq!(mappings[0].dst, "dst/bin/app");
/// ```
#[derive(Debug)]
pub struct Manifest {
    config: BuildConfig,
    stack: PrefixStack,
    mappings: Vec<PathMapping>,
}

impl Manifest {
    /// Creates a manifest rooted at the given base directories.
    #[must_use]
    pub fn new(
        base_src: impl Into<String>,
        base_dst: impl Into<String>,
        config: BuildConfig,
    ) -> Self {
        Self {
            config,
            stack: PrefixStack::new(base_src, base_dst),
            mappings: Vec::new(),
        }
    }

    /// The immutable build configuration.
    #[must_use]
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Opens a scope named `name` on both axes.
    ///
    /// Always returns `true`, so construction bodies can keep the
    /// conditional-scoping shape `if m.prefix("x") { .. }` that makes
    /// the nesting visible.
    pub fn prefix(&mut self, name: &str) -> bool {
        self.stack.push(name, name);
        true
    }

    /// Opens a scope with explicit per-axis segments.
    ///
    /// An empty string maps into that axis's current root with no added
    /// segment; two empty strings open an anonymous scope.
    ///
    /// # Examples
    ///
    /// ```
    /// use stager::{BuildConfig, BuildVersion, Manifest};
    ///
    /// let config = BuildConfig::new("default", "linux", BuildVersion([1, 0, 0, 0]));
    /// let mut m = Manifest::new("src", "dst", config);
    /// // Stage the contents of src/nested at the destination root.
    /// m.prefix_into("nested", "");
    /// assert_eq!(m.get_src_prefix(), "src/nested");
    /// assert_eq!(m.get_dst_prefix(), "dst");
    /// ```
    pub fn prefix_into(&mut self, src: &str, dst: &str) -> bool {
        self.stack.push(src, dst);
        true
    }

    /// Closes the innermost scope.
    ///
    /// # Errors
    ///
    /// Returns a scope-usage error if no scope is open.
    pub fn end_prefix(&mut self) -> Result<()> {
        self.stack.pop()
    }

    /// Closes the innermost scope, checking it was opened as `name`
    /// (the source-axis segment is compared).
    ///
    /// # Errors
    ///
    /// Returns a scope-usage error on name mismatch or if no scope is
    /// open.
    pub fn end_prefix_named(&mut self, name: &str) -> Result<()> {
        self.stack.pop_named(name)
    }

    /// Records a mapping from `pattern` under the current source prefix
    /// to the same pattern under the current destination prefix.
    pub fn path(&mut self, pattern: &str) {
        self.path_to(pattern, pattern);
    }

    /// Records a mapping from `src` under the current source prefix to
    /// `dst` under the current destination prefix.
    pub fn path_to(&mut self, src: &str, dst: &str) {
        let mapping = PathMapping {
            src: self.stack.resolve_src(src),
            dst: self.stack.resolve_dst(dst),
        };
        log::debug!("recorded mapping {} -> {}", mapping.src, mapping.dst);
        self.mappings.push(mapping);
    }

    /// The current composed source prefix.
    #[must_use]
    pub fn get_src_prefix(&self) -> String {
        self.stack.src_prefix()
    }

    /// The current composed destination prefix.
    #[must_use]
    pub fn get_dst_prefix(&self) -> String {
        self.stack.dst_prefix()
    }

    /// Resolves `relative` against the current source prefix.
    #[must_use]
    pub fn src_path_of(&self, relative: &str) -> String {
        self.stack.resolve_src(relative)
    }

    /// Resolves `relative` against the current destination prefix.
    #[must_use]
    pub fn dst_path_of(&self, relative: &str) -> String {
        self.stack.resolve_dst(relative)
    }

    /// The mappings recorded so far, in recording order.
    #[must_use]
    pub fn mappings(&self) -> &[PathMapping] {
        &self.mappings
    }

    /// Runs a shell command, failing the current step on any error.
    ///
    /// # Errors
    ///
    /// See [`exec::run_command`].
    pub fn run_command(&self, command: &str) -> Result<String> {
        exec::run_command(command)
    }

    /// Creates a directory and all missing ancestors.
    ///
    /// # Errors
    ///
    /// See [`exec::ensure_dirs`].
    pub fn cmakedirs(&self, path: impl AsRef<Path>) -> Result<()> {
        exec::ensure_dirs(path.as_ref())
    }

    /// Consumes the manifest, returning the recorded mappings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnbalancedManifest`] if any prefix scope
    /// is still open: a construction body that does not unwind its
    /// stack is malformed.
    pub fn into_mappings(self) -> Result<Vec<PathMapping>> {
        if !self.stack.is_empty() {
            return Err(crate::Error::UnbalancedManifest {
                depth: self.stack.depth(),
            });
        }
        Ok(self.mappings)
    }
}
