//! Longest-prefix-first ancestor enumeration for `/`-separated paths.

/// Returns an iterator over `path` and its ancestors, longest first.
///
/// A trailing slash is stripped before enumeration. Enumeration stops
/// before yielding an empty string or a bare root, so `"dir/sub/two"`
/// yields `["dir/sub/two", "dir/sub", "dir"]` and `"/a/b"` yields
/// `["/a/b", "/a"]`.
///
/// Each call returns a fresh iterator, so enumeration is restartable:
/// call again for another pass.
///
/// # Examples
///
/// ```
/// use stager::path::ancestors;
///
/// let chain: Vec<&str> = ancestors("dir/sub/two").collect();
/// assert_eq!(chain, ["dir/sub/two", "dir/sub", "dir"]);
/// ```
#[must_use]
pub fn ancestors(path: &str) -> Ancestors<'_> {
    Ancestors {
        remaining: Some(path.trim_end_matches('/')).filter(|p| !p.is_empty() && *p != "/"),
    }
}

/// Iterator returned by [`ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    remaining: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.remaining?;
        self.remaining = current
            .rfind('/')
            .map(|idx| &current[..idx])
            .filter(|parent| !parent.is_empty() && *parent != "/");
        Some(current)
    }
}
