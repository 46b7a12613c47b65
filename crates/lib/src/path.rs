//! Path types for hierarchical document access.
//!
//! Paths are dot-separated strings addressing a value across one or more
//! nesting levels. The [`Path`]/[`PathBuf`] pair follows the same
//! borrowed/owned pattern as `std::path::Path`/`PathBuf`: `Path` is unsized
//! and always used behind a reference, `PathBuf` owns its storage and can be
//! built incrementally.
//!
//! Plain strings coerce to `&Path`, so document methods taking
//! `impl AsRef<Path>` accept `"user.profile.name"` directly. Empty components
//! (leading, trailing, or consecutive dots) are ignored during traversal, and
//! [`PathBuf`] normalizes them away on construction.

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

/// Normalizes a path string by dropping empty components.
///
/// - `""` stays empty
/// - `".user"` becomes `"user"`
/// - `"user."` becomes `"user"`
/// - `"user..profile"` becomes `"user.profile"`
/// - `"..."` becomes empty
pub fn normalize(input: &str) -> String {
    input
        .split('.')
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// A borrowed dot-separated path.
///
/// This type is unsized and must always be used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

/// An owned, normalized dot-separated path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathBuf {
    inner: String,
}

impl Path {
    /// Wraps a string slice as a path.
    ///
    /// Any string is a usable path: empty components are filtered during
    /// traversal rather than rejected here.
    pub fn new(s: &str) -> &Path {
        // SAFETY: Path is repr(transparent) over str, so the layouts match.
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the non-empty path components.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Returns the number of components in the path.
    pub fn len(&self) -> usize {
        self.components().count()
    }

    /// Returns `true` if the path has no components.
    pub fn is_empty(&self) -> bool {
        self.components().next().is_none()
    }

    /// Returns the last component, or `None` if the path is empty.
    pub fn last(&self) -> Option<&str> {
        self.inner.split('.').filter(|s| !s.is_empty()).next_back()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned, normalized `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::normalize(&self.inner)
    }
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Creates a `PathBuf` by normalizing the input string.
    pub fn normalize(path: &str) -> Self {
        Self {
            inner: normalize(path),
        }
    }

    /// Appends a path fragment, normalizing it first.
    ///
    /// ```
    /// # use strata::PathBuf;
    /// let path = PathBuf::new().push("user").push("profile.name");
    /// assert_eq!(path.as_str(), "user.profile.name");
    /// ```
    pub fn push(mut self, fragment: impl AsRef<str>) -> Self {
        let normalized = normalize(fragment.as_ref());
        if normalized.is_empty() {
            return self;
        }

        if self.inner.is_empty() {
            self.inner = normalized;
        } else {
            self.inner.push('.');
            self.inner.push_str(&normalized);
        }
        self
    }

    /// Returns the parent path, or `None` if this path has at most one
    /// component.
    pub fn parent(&self) -> Option<PathBuf> {
        self.inner.rfind('.').map(|last_dot| PathBuf {
            inner: self.inner[..last_dot].to_string(),
        })
    }
}

impl Default for PathBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(&self.inner)
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.deref()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.deref()
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.deref(), f)
    }
}
