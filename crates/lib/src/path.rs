//! Path types for addressing values inside a node tree.
//!
//! A path is an ordered list of segments. Paths are parsed from strings by
//! trimming leading and trailing separator runs ('.' or '|') and splitting on '.'.
//! Segments that look numeric are not special-cased: whether a segment is a field name,
//! a map key or a list index is decided by the container met while resolving it.
//!
//! # Usage
//!
//! ```rust
//! use treebind::{PathBuf, path};
//!
//! let parsed = PathBuf::parse("|user.profile.name|");
//! assert_eq!(parsed.as_segments(), ["user", "profile", "name"]);
//!
//! let built = PathBuf::new().push("user").push("profile.name");
//! assert_eq!(built, parsed);
//!
//! assert_eq!(path!("user", "profile", "name"), parsed);
//! ```

use std::{fmt, str::FromStr};

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Alternate delimiter accepted at either end of a path string.
pub const PIPE: char = '|';

fn is_boundary(c: char) -> bool {
    c == SEPARATOR || c == PIPE
}

/// Splits a path string into its segments.
///
/// Leading and trailing runs of '.' or '|' are trimmed, the rest is split on '.', and
/// empty segments are dropped. Empty or separator-only input yields no segments.
///
/// ```rust
/// # use treebind::path::split;
/// assert_eq!(split("a.b.c"), vec!["a", "b", "c"]);
/// assert_eq!(split("..a..b.."), vec!["a", "b"]);
/// assert_eq!(split("|a.0|"), vec!["a", "0"]);
/// assert!(split("").is_empty());
/// assert!(split(".|.").is_empty());
/// ```
pub fn split(path: &str) -> Vec<String> {
    path.trim_matches(is_boundary)
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads a segment as a list index.
///
/// Only canonical decimal forms count: ASCII digits with no sign and no leading zero, so
/// `"01"` and `"+1"` never alias element 1.
///
/// ```rust
/// # use treebind::path::as_index;
/// assert_eq!(as_index("0"), Some(0));
/// assert_eq!(as_index("12"), Some(12));
/// assert_eq!(as_index("01"), None);
/// assert_eq!(as_index("+1"), None);
/// assert_eq!(as_index(""), None);
/// ```
pub fn as_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}

/// Normalizes a path string to its canonical dotted form.
///
/// ```rust
/// # use treebind::path::normalize_path;
/// assert_eq!(normalize_path(""), "");
/// assert_eq!(normalize_path(".user"), "user");
/// assert_eq!(normalize_path("user..profile|"), "user.profile");
/// ```
pub fn normalize_path(input: &str) -> String {
    split(input).join(".")
}

/// An owned path: an ordered list of segments.
///
/// Parsed paths never hold empty segments; [`PathBuf::child`] can add one to address an
/// empty map key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathBuf {
    segments: Vec<String>,
}

impl PathBuf {
    /// Creates a new empty path, addressing the root.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parses a path string. Always succeeds; see [`split`].
    pub fn parse(path: &str) -> Self {
        Self {
            segments: split(path),
        }
    }

    /// Appends a path string, normalizing it first.
    ///
    /// `"a.b"` adds two segments; an empty string adds nothing.
    pub fn push(mut self, path: impl AsRef<str>) -> Self {
        self.segments.extend(split(path.as_ref()));
        self
    }

    /// Returns a new path with one raw segment appended.
    ///
    /// The segment is kept verbatim, even if it is empty or contains a '.', so any map
    /// key can still be addressed.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: &PathBuf) -> Self {
        self.segments.extend(other.segments.iter().cloned());
        self
    }

    /// Returns an iterator over the segments as string slices.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the segments.
    pub fn as_segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments in the path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the last segment, or `None` for the root path.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns the path without its last segment, or `None` for the root path.
    pub fn parent(&self) -> Option<PathBuf> {
        self.split_last().map(|(_, parent)| parent)
    }

    /// Splits into the last segment and the parent path.
    pub fn split_last(&self) -> Option<(&str, PathBuf)> {
        let (last, parent) = self.segments.split_last()?;
        Some((
            last.as_str(),
            PathBuf {
                segments: parent.to_vec(),
            },
        ))
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for PathBuf {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<&PathBuf> for PathBuf {
    fn from(path: &PathBuf) -> Self {
        path.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for PathBuf {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut path = PathBuf::new();
        for segment in iter {
            path = path.child(segment);
        }
        path
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Constructs a [`PathBuf`].
///
/// - `path!()` - Empty path
/// - `path!("user.profile.name")` - Parsed from a single string
/// - `path!("user", "profile", "name")` - Joined from several parts
/// - `path!(base, "profile", index)` - Any `ToString` values mixed in
///
/// ```rust
/// # use treebind::path;
/// let index = 2;
/// let path = path!("todos", index, "title");
/// assert_eq!(path.to_string(), "todos.2.title");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::path::PathBuf::new()
    };

    ($single:literal) => {
        $crate::path::PathBuf::parse(&$single.to_string())
    };

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let path = $crate::path::PathBuf::parse(&$first.to_string());
        $(
            let path = path.push($rest.to_string());
        )*
        path
    }};
}
