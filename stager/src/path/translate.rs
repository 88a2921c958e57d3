//! Translation between native Windows paths and cygwin emulation paths.
//!
//! Windows build steps run partly under a POSIX emulation layer, which
//! addresses drives as `/cygdrive/<letter>/...`. [`translate`] converts a
//! path to the requested syntax. Inputs that are already in the target
//! syntax pass through unchanged; inputs that are neither a drive-letter
//! path nor a `/cygdrive/` path fail rather than guess (relative and UNC
//! paths have no defined translation).

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The emulation-layer drive mount point.
const CYGDRIVE: &str = "/cygdrive/";

/// Target path syntax for [`translate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSyntax {
    /// Native Windows syntax: `C:\Program Files\NSIS`.
    Windows,
    /// Cygwin emulation syntax: `/cygdrive/c/Program Files/NSIS`.
    Cygwin,
}

impl fmt::Display for PathSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Cygwin => write!(f, "cygwin"),
        }
    }
}

impl FromStr for PathSyntax {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "cygwin" => Ok(Self::Cygwin),
            _ => Err(format!("invalid path syntax: {s}")),
        }
    }
}

/// Converts `path` to the requested syntax.
///
/// A path already in the target syntax is returned unchanged, so the
/// translation is idempotent and round-trip safe for canonical inputs.
///
/// # Errors
///
/// Returns [`Error::PathTranslation`] when the input is neither a
/// drive-letter path nor a `/cygdrive/` path.
///
/// # Examples
///
/// ```
/// use stager::path::{translate, PathSyntax};
///
/// let cyg = translate(r"C:\Program Files", PathSyntax::Cygwin).unwrap();
/// assert_eq!(cyg, "/cygdrive/c/Program Files");
///
/// let win = translate("/cygdrive/c/Program Files/NSIS", PathSyntax::Windows).unwrap();
/// assert_eq!(win, r"C:\Program Files\NSIS");
/// ```
pub fn translate(path: &str, target: PathSyntax) -> Result<String> {
    match target {
        PathSyntax::Cygwin => {
            if path.starts_with(CYGDRIVE) {
                return Ok(path.to_string());
            }
            if let Some(drive) = drive_letter(path) {
                let rest = path[2..].replace('\\', "/");
                return Ok(format!("{CYGDRIVE}{}{rest}", drive.to_ascii_lowercase()));
            }
        }
        PathSyntax::Windows => {
            if drive_letter(path).is_some() {
                return Ok(path.to_string());
            }
            if let Some(mounted) = path.strip_prefix(CYGDRIVE) {
                let mut chars = mounted.chars();
                if let Some(drive) = chars.next().filter(char::is_ascii_alphabetic) {
                    let rest = chars.as_str().replace('/', "\\");
                    return Ok(format!("{}:{rest}", drive.to_ascii_uppercase()));
                }
            }
        }
    }
    Err(Error::PathTranslation {
        path: path.to_string(),
        target: target.to_string(),
        reason: "not a drive-letter path or /cygdrive/ path".to_string(),
    })
}

/// Returns the drive letter if `path` starts with `<letter>:`.
fn drive_letter(path: &str) -> Option<char> {
    let mut chars = path.chars();
    let first = chars.next()?;
    (first.is_ascii_alphabetic() && chars.next() == Some(':')).then_some(first)
}
