//! Strata: recursive, path-addressable ordered document containers.
//!
//! This library provides an in-memory tree of string-keyed values with an
//! ergonomic access surface.
//!
//! ## Core Concepts
//!
//! * **Documents ([`Document`])**: insertion-ordered mappings from string
//!   keys to values. Nested associative data is represented as nested
//!   documents; sequence-like data is kept verbatim as opaque leaves.
//! * **Values ([`Value`])**: scalars, opaque sequences, or nested documents.
//! * **Paths ([`Path`], [`PathBuf`])**: dot-separated addresses traversing
//!   multiple nesting levels. Path writes auto-create missing intermediate
//!   documents; path reads never mutate.
//! * **Sealed documents ([`SealedDocument`])**: the same read surface with
//!   every write entry point rejected.
//! * **Merging ([`Merge`])**: recursive, key-wise deep union producing a new
//!   document; operands are never mutated.
//!
//! ```
//! use strata::{Document, Merge};
//!
//! let mut doc = Document::from_json(serde_json::json!({
//!     "server": {"host": "localhost"},
//!     "tags": ["a", "b"],
//! }))?;
//!
//! doc.set_path("server.port", 8080)?;
//! assert_eq!(doc.get_path_as::<i64>("server.port"), Some(8080));
//!
//! let overrides = Document::from_json(serde_json::json!({
//!     "server": {"host": "0.0.0.0"},
//! }))?;
//! let merged = doc.merge(&overrides);
//! assert_eq!(merged.get_path_as::<&str>("server.host"), Some("0.0.0.0"));
//! assert_eq!(merged.get_path_as::<i64>("server.port"), Some(8080));
//! # Ok::<(), strata::DocError>(())
//! ```
//!
//! Documents are plain single-threaded values: no locking, no I/O, no
//! suspension points. Concurrent mutation must be excluded by the caller.

pub mod document;
pub mod errors;
pub mod path;
pub mod sealed;
pub mod traits;
pub mod value;

pub use document::Document;
pub use errors::DocError;
pub use path::{Path, PathBuf};
pub use sealed::SealedDocument;
pub use traits::{Merge, ReadDoc};
pub use value::Value;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, DocError>;
