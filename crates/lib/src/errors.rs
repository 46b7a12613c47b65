//! Error types for document operations.
//!
//! This module defines the structured error type shared by the whole crate.
//! Absent keys and paths are not errors (they resolve to `None`); errors are
//! reserved for rejected writes on sealed documents, precondition violations,
//! and typed-read conversion failures.

use thiserror::Error;

/// Structured error type for document operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocError {
    /// A key write was attempted on a sealed document.
    #[error("cannot set key '{key}': document is sealed")]
    SealedKey { key: String },

    /// A path write was attempted on a sealed document.
    #[error("cannot set path '{path}': document is sealed")]
    SealedPath { path: String },

    /// A path write was given a path with no components.
    #[error("empty path is not a valid write target")]
    EmptyPath,

    /// Document construction was given a JSON root that is not an object.
    #[error("expected a JSON object at the document root, found {actual}")]
    NotAnObject { actual: String },

    /// A typed read could not convert the stored value.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl DocError {
    /// Check if this error is a rejected write on a sealed document.
    pub fn is_sealed_violation(&self) -> bool {
        matches!(
            self,
            DocError::SealedKey { .. } | DocError::SealedPath { .. }
        )
    }

    /// Check if this error is a typed-read conversion failure.
    pub fn is_type_error(&self) -> bool {
        matches!(self, DocError::TypeMismatch { .. })
    }

    /// Get the key if this error identifies one.
    pub fn key(&self) -> Option<&str> {
        match self {
            DocError::SealedKey { key } => Some(key),
            _ => None,
        }
    }

    /// Get the path if this error identifies one.
    pub fn path(&self) -> Option<&str> {
        match self {
            DocError::SealedPath { path } => Some(path),
            _ => None,
        }
    }
}
