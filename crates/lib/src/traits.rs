//! Core traits shared by the document variants.
//!
//! - [`ReadDoc`]: the read contract common to [`Document`] and
//!   [`SealedDocument`]
//! - [`Merge`]: the deep-merge capability, implemented by both variants

use tracing::trace;

use crate::{Document, SealedDocument, path::Path, value::Value};

/// The read contract shared by the mutable and sealed document variants.
///
/// Only the mutable [`Document`] additionally carries write methods; the
/// capability split is fixed at type-selection time, so no dynamic dispatch
/// is involved in choosing a variant.
pub trait ReadDoc {
    /// Gets a value by direct key; absent keys resolve to `None`.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Gets a value at a dot-separated path; unresolvable paths resolve to
    /// `None`.
    fn get_path(&self, path: &Path) -> Option<&Value>;

    /// Returns the number of direct keys.
    fn len(&self) -> usize;

    /// Returns true if the document has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the document contains the given direct key.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns a restartable iterator over `(key, value)` pairs in insertion
    /// order.
    fn iter(&self) -> impl Iterator<Item = (&String, &Value)>;

    /// Converts the document to its plain JSON mirror.
    fn to_json(&self) -> serde_json::Value;
}

impl ReadDoc for Document {
    fn get(&self, key: &str) -> Option<&Value> {
        Document::get(self, key)
    }

    fn get_path(&self, path: &Path) -> Option<&Value> {
        Document::get_path(self, path)
    }

    fn len(&self) -> usize {
        Document::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        Document::iter(self)
    }

    fn to_json(&self) -> serde_json::Value {
        Document::to_json(self)
    }
}

impl ReadDoc for SealedDocument {
    fn get(&self, key: &str) -> Option<&Value> {
        SealedDocument::get(self, key)
    }

    fn get_path(&self, path: &Path) -> Option<&Value> {
        SealedDocument::get_path(self, path)
    }

    fn len(&self) -> usize {
        SealedDocument::len(self)
    }

    fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        SealedDocument::iter(self)
    }

    fn to_json(&self) -> serde_json::Value {
        SealedDocument::to_json(self)
    }
}

/// Deep-merge capability.
///
/// `merge` produces a brand-new value representing the key-wise union of the
/// receiver with `other`: nested documents merge recursively (an existing
/// key keeps its position), anything else is overwritten by the incoming
/// value, and new keys are appended in the other's order. Neither operand is
/// mutated, and the result shares no mutable structure with either.
///
/// ```
/// # use strata::{Document, Merge};
/// let base = Document::new().with("some", true).with("values", false);
/// let patch = Document::new().with("some", "changed").with("new", true);
///
/// let merged = base.merge(&patch);
/// assert_eq!(merged.get_as::<&str>("some"), Some("changed"));
/// assert_eq!(merged.get_as::<bool>("values"), Some(false));
/// assert_eq!(merged.get_as::<bool>("new"), Some(true));
/// ```
pub trait Merge: Clone {
    /// Merges `other` over this value, returning the union.
    fn merge(&self, other: &Self) -> Self;

    /// Folds several others over this value left-to-right, so the last
    /// writer wins for any given leaf key while mergeable sub-trees
    /// accumulate structurally.
    fn merge_all<'a>(&self, others: impl IntoIterator<Item = &'a Self>) -> Self
    where
        Self: 'a,
    {
        others
            .into_iter()
            .fold(self.clone(), |merged, other| merged.merge(other))
    }
}

impl Merge for Document {
    fn merge(&self, other: &Self) -> Self {
        trace!(
            receiver_keys = self.len(),
            incoming_keys = other.len(),
            "merging documents"
        );
        let mut merged = self.clone();
        merged.apply_overlay(other);
        merged
    }
}

impl Merge for SealedDocument {
    fn merge(&self, other: &Self) -> Self {
        self.as_document().merge(other.as_document()).seal()
    }
}
