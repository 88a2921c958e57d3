//! Nested source/destination prefix scoping.
//!
//! A [`PrefixStack`] tracks the current directory context of a manifest
//! as a stack of push/pop frames. Each frame contributes a segment to
//! the composed source prefix and a segment to the composed destination
//! prefix; either segment may be empty, in which case the frame adds
//! nothing on that axis. All composition is logical and `/`-separated,
//! independent of host path conventions, and `.`/`..` segments are left
//! untouched for the filesystem layer to interpret.

use crate::error::{Error, Result};

/// Name reported for the top of an empty stack in scope errors.
const EMPTY_STACK: &str = "empty stack";

/// One pushed scope: a source segment and a destination segment.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    src: String,
    dst: String,
}

/// The nested-scope mechanism giving relative paths their current
/// source/destination roots.
///
/// Owned exclusively by one manifest instance; never shared.
///
/// # Examples
///
/// ```
/// use stager::path::PrefixStack;
///
/// let mut stack = PrefixStack::new("src", "dst");
/// stack.push("level1", "level1");
/// assert_eq!(stack.src_prefix(), "src/level1");
/// assert_eq!(stack.dst_prefix(), "dst/level1");
/// stack.pop().unwrap();
/// assert_eq!(stack.src_prefix(), "src");
/// ```
#[derive(Debug, Clone)]
pub struct PrefixStack {
    base_src: String,
    base_dst: String,
    frames: Vec<Frame>,
}

impl PrefixStack {
    /// Creates a stack rooted at the given base directories.
    #[must_use]
    pub fn new(base_src: impl Into<String>, base_dst: impl Into<String>) -> Self {
        Self {
            base_src: base_src.into(),
            base_dst: base_dst.into(),
            frames: Vec::new(),
        }
    }

    /// Pushes a frame. An empty string on an axis means the frame maps
    /// into that axis's current root with no added segment.
    pub fn push(&mut self, src: impl Into<String>, dst: impl Into<String>) {
        self.frames.push(Frame {
            src: src.into(),
            dst: dst.into(),
        });
    }

    /// Pops the top frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScopeMismatch`] if the stack is empty.
    pub fn pop(&mut self) -> Result<()> {
        match self.frames.pop() {
            Some(_) => Ok(()),
            None => Err(Error::ScopeMismatch {
                expected: "<any>".to_string(),
                actual: EMPTY_STACK.to_string(),
            }),
        }
    }

    /// Pops the top frame, checking its source segment against `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScopeMismatch`] if the stack is empty or the top
    /// frame's source segment differs from `expected`.
    pub fn pop_named(&mut self, expected: &str) -> Result<()> {
        match self.frames.last() {
            None => Err(Error::ScopeMismatch {
                expected: expected.to_string(),
                actual: EMPTY_STACK.to_string(),
            }),
            Some(frame) if frame.src != expected => Err(Error::ScopeMismatch {
                expected: expected.to_string(),
                actual: frame.src.clone(),
            }),
            Some(_) => {
                self.frames.pop();
                Ok(())
            }
        }
    }

    /// Number of frames currently on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Whether the stack has fully unwound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The composed source prefix: the base source directory joined with
    /// every non-empty pushed source segment, in push order. No trailing
    /// slash; with zero frames this is exactly the base directory.
    #[must_use]
    pub fn src_prefix(&self) -> String {
        compose(&self.base_src, self.frames.iter().map(|f| f.src.as_str()))
    }

    /// The composed destination prefix. Same composition rule as
    /// [`PrefixStack::src_prefix`].
    #[must_use]
    pub fn dst_prefix(&self) -> String {
        compose(&self.base_dst, self.frames.iter().map(|f| f.dst.as_str()))
    }

    /// Joins the composed source prefix with a relative path.
    #[must_use]
    pub fn resolve_src(&self, relative: &str) -> String {
        join(&self.src_prefix(), relative)
    }

    /// Joins the composed destination prefix with a relative path.
    #[must_use]
    pub fn resolve_dst(&self, relative: &str) -> String {
        join(&self.dst_prefix(), relative)
    }
}

fn compose<'a>(base: &str, segments: impl Iterator<Item = &'a str>) -> String {
    let mut prefix = base.to_string();
    for segment in segments.filter(|s| !s.is_empty()) {
        prefix.push('/');
        prefix.push_str(segment);
    }
    prefix
}

fn join(prefix: &str, relative: &str) -> String {
    format!("{prefix}/{relative}")
}
