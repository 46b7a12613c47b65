//! The mutable document container.
//!
//! [`Document`] is an insertion-ordered mapping from string keys to
//! [`Value`]s, where nested associative data is represented as nested
//! documents and sequence-like data is kept as opaque leaves. Values are
//! addressable either by direct key or by a dot-separated [`Path`] that may
//! traverse multiple nesting levels, with missing intermediate documents
//! auto-created on write.
//!
//! # Usage
//!
//! ```
//! use strata::{Document, Merge};
//!
//! let mut doc = Document::new();
//! doc.set("name", "Alice");
//! doc.set_path("user.profile.bio", "Software developer").unwrap();
//!
//! let mut other = Document::new();
//! other.set("name", "Bob");
//! other.set("city", "New York");
//!
//! let merged = doc.merge(&other);
//! assert_eq!(merged.get_as::<&str>("name"), Some("Bob"));
//! ```

use std::fmt;

use indexmap::IndexMap;
use tracing::trace;

use crate::{
    Result, errors::DocError, path::Path, sealed::SealedDocument, value::Value,
};

/// An ordered, recursive key-value document.
///
/// Keys are unique within one document and iteration observes insertion
/// order. Nested documents are exclusively owned by their parent: children
/// are created fresh at construction or auto-vivification time and never
/// aliased, so the tree is acyclic by construction.
///
/// # Core operations
///
/// - **Key access**: [`get`](Self::get), [`set`](Self::set),
///   [`get_as`](Self::get_as)
/// - **Path access**: [`get_path`](Self::get_path),
///   [`set_path`](Self::set_path) with dot notation
/// - **Merging**: the [`Merge`](crate::Merge) capability
/// - **Serialization**: [`to_json`](Self::to_json) mirrors the tree as a
///   plain ordered JSON object
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Document {
    entries: IndexMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Constructs a document from a plain JSON object, classifying nested
    /// structures.
    ///
    /// Every object-valued entry is classified: objects whose keys form the
    /// contiguous numeric range `0..N-1` are treated as sequences and stored
    /// as opaque [`Value::List`] leaves (in numeric key order); all other
    /// objects become nested documents, recursively. Empty objects are
    /// sequence leaves. Arrays and the contents of sequence leaves are
    /// preserved verbatim, never classified.
    ///
    /// Construction is total over any object input; a non-object root is the
    /// only rejected shape.
    ///
    /// ```
    /// # use strata::Document;
    /// let doc = Document::from_json(serde_json::json!({
    ///     "tags": ["a", "b"],
    ///     "profile": {"name": "Alice"},
    /// }))
    /// .unwrap();
    ///
    /// assert!(doc.get("tags").unwrap().as_list().is_some());
    /// assert!(doc.get("profile").unwrap().as_doc().is_some());
    /// ```
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(map) => Ok(Self::classify_object(map)),
            other => Err(DocError::NotAnObject {
                actual: json_type_name(&other).to_string(),
            }),
        }
    }

    fn classify_object(map: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut doc = Document::new();
        for (key, value) in map {
            doc.entries.insert(key, Self::classify_value(value));
        }
        doc
    }

    fn classify_value(value: serde_json::Value) -> Value {
        match value {
            serde_json::Value::Object(map) => match sequence_indices(&map) {
                Some(indices) => {
                    // Sequence leaf: values in numeric key order, converted
                    // structurally without further classification.
                    let mut pairs: Vec<(usize, serde_json::Value)> = indices
                        .into_iter()
                        .zip(map.into_iter().map(|(_, v)| v))
                        .collect();
                    pairs.sort_by_key(|(index, _)| *index);
                    Value::List(
                        pairs
                            .into_iter()
                            .map(|(_, v)| Value::from_json_raw(v))
                            .collect(),
                    )
                }
                None => Value::Doc(Self::classify_object(map)),
            },
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from_json_raw).collect())
            }
            other => Value::from_json_raw(other),
        }
    }

    /// Returns true if this document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of direct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document contains the given direct key.
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// Gets a value by direct key.
    ///
    /// A missing key is not an error; it resolves to `None`.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.entries.get(key.as_ref())
    }

    /// Gets a mutable reference to a value by direct key.
    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Value> {
        self.entries.get_mut(key.as_ref())
    }

    /// Gets a value by direct key with automatic type conversion.
    ///
    /// Returns `None` if the key is absent or the stored value cannot be
    /// converted to `T`.
    ///
    /// ```
    /// # use strata::Document;
    /// let mut doc = Document::new();
    /// doc.set("name", "Alice");
    /// doc.set("age", 30);
    ///
    /// assert_eq!(doc.get_as::<&str>("name"), Some("Alice"));
    /// assert_eq!(doc.get_as::<i64>("age"), Some(30));
    /// assert_eq!(doc.get_as::<i64>("name"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: impl AsRef<str>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = DocError>,
    {
        T::try_from(self.get(key)?).ok()
    }

    /// Gets a mutable slot for a key, materializing it as `Null` if absent.
    ///
    /// A newly created slot lands at the end of the iteration order; an
    /// existing slot keeps its position. This is the write-traversal
    /// primitive behind [`set_path`](Self::set_path); plain reads never use
    /// it and never mutate.
    pub fn slot(&mut self, key: impl Into<String>) -> &mut Value {
        self.entries.entry(key.into()).or_insert(Value::Null)
    }

    /// Sets a value at the given direct key, returning the old value if
    /// present.
    ///
    /// An existing key keeps its position in the iteration order; a new key
    /// is appended at the end. The value's type is not validated.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Gets a value at a dot-separated path.
    ///
    /// Descends through nested documents segment by segment. Resolves to
    /// `None` as soon as a missing key or a non-document value is reached
    /// with segments remaining. A path with a single segment degenerates to
    /// [`get`](Self::get); an empty path resolves to `None`. Reads never
    /// mutate the document.
    pub fn get_path(&self, path: impl AsRef<Path>) -> Option<&Value> {
        let mut segments = path.as_ref().components();
        let mut current = self.entries.get(segments.next()?)?;

        for segment in segments {
            match current {
                Value::Doc(doc) => current = doc.entries.get(segment)?,
                _ => return None,
            }
        }

        Some(current)
    }

    /// Gets a value at a path with automatic type conversion.
    pub fn get_path_as<'a, T>(&'a self, path: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = DocError>,
    {
        T::try_from(self.get_path(path)?).ok()
    }

    /// Sets a value at a dot-separated path, creating intermediate documents
    /// as needed.
    ///
    /// For every segment except the last, a missing slot is materialized and
    /// any non-document value occupying it is replaced in place by a fresh
    /// empty document. Newly created intermediates are appended at the end of
    /// their parent's order. The final segment is a plain key write.
    ///
    /// Returns the value previously stored at the final location, if any.
    /// Every non-empty path succeeds; an empty path fails with
    /// [`DocError::EmptyPath`].
    ///
    /// ```
    /// # use strata::Document;
    /// let mut doc = Document::new();
    /// doc.set_path("a.b.c", 5).unwrap();
    /// assert_eq!(doc.get_path_as::<i64>("a.b.c"), Some(5));
    /// ```
    pub fn set_path(
        &mut self,
        path: impl AsRef<Path>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>> {
        let path = path.as_ref();
        let segments: Vec<&str> = path.components().collect();
        let Some((last, intermediates)) = segments.split_last() else {
            return Err(DocError::EmptyPath);
        };

        let mut current = self;
        for segment in intermediates {
            let slot = current.slot(*segment);
            if !matches!(slot, Value::Doc(_)) {
                if !slot.is_null() {
                    trace!(
                        segment = *segment,
                        "replacing non-document value during path write"
                    );
                }
                *slot = Value::Doc(Document::new());
            }
            match slot {
                Value::Doc(doc) => current = doc,
                _ => unreachable!("slot was just made a document"),
            }
        }

        Ok(current.set(*last, value))
    }

    /// Returns a restartable iterator over `(key, value)` pairs in insertion
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over `(key, value)` pairs in insertion
    /// order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Converts the document to its plain JSON mirror.
    ///
    /// Walks the tree recursively, replacing every nested document with its
    /// own serialized object and leaving sequence leaves and scalars
    /// unchanged. Key order is preserved. For inputs whose nested structures
    /// are all non-sequential, this is the exact inverse of
    /// [`from_json`](Self::from_json).
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            map.insert(key.clone(), value.to_json());
        }
        serde_json::Value::Object(map)
    }

    /// Seals the document, producing its read-only counterpart.
    pub fn seal(self) -> SealedDocument {
        SealedDocument::from(self)
    }

    /// Key-wise overlay of `other` onto this document, merging nested
    /// documents recursively. Backs the [`Merge`](crate::Merge) capability.
    pub(crate) fn apply_overlay(&mut self, other: &Document) {
        for (key, incoming) in other.iter() {
            match self.entries.get_mut(key) {
                Some(existing) => existing.merge(incoming),
                None => {
                    self.entries.insert(key.clone(), incoming.clone());
                }
            }
        }
    }
}

/// Checks whether an object's keys, numerically sorted, form the contiguous
/// range `0..N-1`. Returns the parsed index of each key in input order, or
/// `None` if the object is non-sequential. Empty objects are sequential.
fn sequence_indices(map: &serde_json::Map<String, serde_json::Value>) -> Option<Vec<usize>> {
    let mut indices = Vec::with_capacity(map.len());
    for key in map.keys() {
        let index: usize = key.parse().ok()?;
        // "00", "+1" and friends parse but are not canonical numeric keys.
        if index.to_string() != *key {
            return None;
        }
        indices.push(index);
    }

    let mut sorted = indices.clone();
    sorted.sort_unstable();
    if sorted.iter().copied().eq(0..map.len()) {
        Some(indices)
    } else {
        None
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        let mut doc = Document::new();
        for (key, value) in iter {
            doc.set(key, value);
        }
        doc
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Builder pattern methods
impl Document {
    /// Builder method to set a value and return self.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to set a nested document.
    pub fn with_doc(self, key: impl Into<String>, value: impl Into<Document>) -> Self {
        self.with(key, Value::Doc(value.into()))
    }

    /// Builder method to set a sequence leaf.
    pub fn with_list(self, key: impl Into<String>, value: impl Into<Vec<Value>>) -> Self {
        self.with(key, Value::List(value.into()))
    }

    /// Set a string value, returning `&mut Self` for chaining.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set(key, Value::Text(value.into()));
        self
    }

    /// Set a nested document, returning `&mut Self` for chaining.
    pub fn set_doc(&mut self, key: impl Into<String>, value: Document) -> &mut Self {
        self.set(key, Value::Doc(value));
        self
    }

    /// Get a reference to a nested document by key.
    pub fn get_doc(&self, key: impl AsRef<str>) -> Option<&Document> {
        self.get(key)?.as_doc()
    }

    /// Get a mutable reference to a nested document by key.
    pub fn get_doc_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Document> {
        self.get_mut(key)?.as_doc_mut()
    }
}
