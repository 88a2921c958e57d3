//! Error types for the stager library.
//!
//! One error enum covers the whole engine, using `thiserror` for display
//! and source-chaining. Every error propagates synchronously to the
//! immediate caller; nothing is logged-and-continued inside the core.

use thiserror::Error;

/// Result type alias for operations that may fail with a stager error.
///
/// # Examples
///
/// ```
/// use stager::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("dst/bin".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the stager library.
#[derive(Debug, Error)]
pub enum Error {
    /// A prefix scope was closed with the wrong name, or popped when the
    /// stack was already empty. Always a bug in the manifest description.
    #[error("mismatched prefix scope: expected '{expected}', got '{actual}'")]
    ScopeMismatch {
        /// The name the caller expected to close.
        expected: String,
        /// The name actually on top of the stack, or `"empty stack"`.
        actual: String,
    },

    /// No manifest variant is registered for the requested platform
    /// (and architecture, if one was given).
    #[error("no manifest registered for platform '{platform}'{}", .arch.as_deref().map(|a| format!(" (arch '{a}')")).unwrap_or_default())]
    PlatformNotFound {
        /// The requested platform name, as given by the caller.
        platform: String,
        /// The requested architecture, if any.
        arch: Option<String>,
    },

    /// A shell command exited with a non-zero status or could not be
    /// launched at all. Fatal to the current manifest step.
    #[error("command '{command}' failed: {detail}")]
    CommandFailed {
        /// The command line that was executed.
        command: String,
        /// Exit status or launch diagnostic, plus captured stderr if any.
        detail: String,
    },

    /// A path could not be translated to the requested syntax.
    #[error("cannot translate '{path}' to {target} form: {reason}")]
    PathTranslation {
        /// The input path.
        path: String,
        /// The requested target syntax.
        target: String,
        /// Why the translation is undefined for this input.
        reason: String,
    },

    /// A manifest finished construction with prefix scopes still open.
    #[error("manifest construction left {depth} prefix scope(s) open")]
    UnbalancedManifest {
        /// Number of frames still on the stack.
        depth: usize,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error is a prefix-scope usage error.
    ///
    /// # Examples
    ///
    /// ```
    /// use stager::Error;
    ///
    /// let err = Error::ScopeMismatch {
    ///     expected: "bin".to_string(),
    ///     actual: "lib".to_string(),
    /// };
    /// assert!(err.is_scope_error());
    /// ```
    #[must_use]
    pub fn is_scope_error(&self) -> bool {
        matches!(self, Self::ScopeMismatch { .. })
    }

    /// Check if the error indicates a missing registry entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use stager::Error;
    ///
    /// let err = Error::PlatformNotFound {
    ///     platform: "haiku".to_string(),
    ///     arch: None,
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PlatformNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_mismatch_names_both_sides() {
        let err = Error::ScopeMismatch {
            expected: "dir_1".to_string(),
            actual: "nested".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("dir_1"));
        assert!(display.contains("nested"));
    }

    #[test]
    fn test_scope_underflow_message() {
        let err = Error::ScopeMismatch {
            expected: "dir_1".to_string(),
            actual: "empty stack".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("empty stack"));
    }

    #[test]
    fn test_platform_not_found_without_arch() {
        let err = Error::PlatformNotFound {
            platform: "extant".to_string(),
            arch: None,
        };
        let display = format!("{err}");
        assert!(display.contains("extant"));
        assert!(!display.contains("arch"));
    }

    #[test]
    fn test_platform_not_found_with_arch() {
        let err = Error::PlatformNotFound {
            platform: "demo".to_string(),
            arch: Some("Arm64".to_string()),
        };
        let display = format!("{err}");
        assert!(display.contains("demo"));
        assert!(display.contains("Arm64"));
    }

    #[test]
    fn test_command_failed_carries_command_line() {
        let err = Error::CommandFailed {
            command: "fff_garbage".to_string(),
            detail: "exit status 127".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("fff_garbage"));
        assert!(display.contains("127"));
    }

    #[test]
    fn test_path_translation_error() {
        let err = Error::PathTranslation {
            path: "relative/path".to_string(),
            target: "windows".to_string(),
            reason: "not a drive or /cygdrive/ path".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("relative/path"));
        assert!(display.contains("windows"));
    }

    #[test]
    fn test_unbalanced_manifest_error() {
        let err = Error::UnbalancedManifest { depth: 2 };
        let display = format!("{err}");
        assert!(display.contains('2'));
        assert!(display.contains("open"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_predicates() {
        let scope = Error::ScopeMismatch {
            expected: "a".to_string(),
            actual: "b".to_string(),
        };
        assert!(scope.is_scope_error());
        assert!(!scope.is_not_found());

        let missing = Error::PlatformNotFound {
            platform: "p".to_string(),
            arch: None,
        };
        assert!(missing.is_not_found());
        assert!(!missing.is_scope_error());
    }
}
