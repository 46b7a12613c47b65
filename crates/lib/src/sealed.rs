//! The read-only document facade.
//!
//! [`SealedDocument`] is structurally identical to [`Document`] and exposes
//! the same read surface, but every write entry point fails with a
//! [`DocError`] identifying the attempted key or path. Sealing is a
//! behavioral constraint, not a structural one: a sealed document can be
//! unsealed by value into a fresh mutable [`Document`].

use std::fmt;

use crate::{Document, Result, errors::DocError, path::Path, value::Value};

/// A read-only document.
///
/// Built by wrapping a [`Document`] (see [`Document::seal`]). Write attempts
/// are rejected before any traversal, so they can never materialize slots or
/// intermediate documents as side effects.
///
/// ```
/// # use strata::Document;
/// let sealed = Document::new().with("x", 1).seal();
///
/// assert_eq!(sealed.get_as::<i64>("x"), Some(1));
/// assert!(sealed.set("x", 2).is_err());
/// assert_eq!(sealed.get_as::<i64>("x"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SealedDocument {
    inner: Document,
}

impl SealedDocument {
    /// Constructs a sealed document from a plain JSON object.
    ///
    /// Classification follows [`Document::from_json`].
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(Self {
            inner: Document::from_json(value)?,
        })
    }

    /// Returns true if this document has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of direct keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the document contains the given direct key.
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.inner.contains_key(key)
    }

    /// Gets a value by direct key; absent keys resolve to `None`.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Gets a value by direct key with automatic type conversion.
    pub fn get_as<'a, T>(&'a self, key: impl AsRef<str>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = DocError>,
    {
        self.inner.get_as(key)
    }

    /// Gets a value at a dot-separated path; see [`Document::get_path`].
    pub fn get_path(&self, path: impl AsRef<Path>) -> Option<&Value> {
        self.inner.get_path(path)
    }

    /// Gets a value at a path with automatic type conversion.
    pub fn get_path_as<'a, T>(&'a self, path: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = DocError>,
    {
        self.inner.get_path_as(path)
    }

    /// Rejects the key write.
    ///
    /// Always fails with [`DocError::SealedKey`] naming the key; no mutation
    /// occurs.
    pub fn set(&self, key: impl AsRef<str>, _value: impl Into<Value>) -> Result<()> {
        Err(DocError::SealedKey {
            key: key.as_ref().to_string(),
        })
    }

    /// Rejects the path write.
    ///
    /// Always fails with [`DocError::SealedPath`] naming the path, before
    /// any traversal: no slots or intermediate documents are ever created.
    pub fn set_path(&self, path: impl AsRef<Path>, _value: impl Into<Value>) -> Result<()> {
        Err(DocError::SealedPath {
            path: path.as_ref().as_str().to_string(),
        })
    }

    /// Returns a restartable iterator over `(key, value)` pairs in insertion
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.inner.iter()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.inner.keys()
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.inner.values()
    }

    /// Converts the document to its plain JSON mirror; see
    /// [`Document::to_json`].
    pub fn to_json(&self) -> serde_json::Value {
        self.inner.to_json()
    }

    /// Unseals by value, yielding a mutable document.
    ///
    /// Consuming `self` keeps the sealed original unobservable afterwards,
    /// so the immutability contract is never violated in place.
    pub fn unseal(self) -> Document {
        self.inner
    }

    pub(crate) fn as_document(&self) -> &Document {
        &self.inner
    }
}

impl From<Document> for SealedDocument {
    fn from(inner: Document) -> Self {
        Self { inner }
    }
}

impl<'a> IntoIterator for &'a SealedDocument {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.inner).into_iter()
    }
}

impl fmt::Display for SealedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
