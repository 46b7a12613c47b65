//! Value types for document trees.
//!
//! This module provides the [`Value`] enum representing everything that can
//! be stored within a document. Values are either leaves (scalars and opaque
//! sequences) or branches (nested documents).

use std::fmt;

use crate::{Document, errors::DocError};

/// Values that can be stored in a document.
///
/// # Value Types
///
/// ## Leaf values
/// - [`Value::Null`] - null/absent placeholder
/// - [`Value::Bool`] - boolean
/// - [`Value::Int`] - 64-bit signed integer
/// - [`Value::Float`] - 64-bit float
/// - [`Value::Text`] - UTF-8 string
/// - [`Value::List`] - opaque ordered sequence; stored and returned as-is,
///   never decomposed into a document even when its elements are associative
///
/// ## Branch values
/// - [`Value::Doc`] - nested document, exclusively owned by its parent
///
/// # Merge behavior
///
/// - Leaf values: the incoming value wins
/// - Nested documents: merged recursively, key-wise
///
/// ```
/// # use strata::Value;
/// let mut val1 = Value::Int(42);
/// let val2 = Value::Int(100);
/// val1.merge(&val2);
/// assert_eq!(val1, 100);
/// ```
///
/// # Direct comparisons
///
/// `Value` implements `PartialEq` with primitive types for ergonomic
/// assertions:
///
/// ```
/// # use strata::Value;
/// let text = Value::Text("hello".to_string());
/// assert!(text == "hello");
/// assert!("hello" == text);
/// assert!(!(text == 42));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    /// Null/empty value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Opaque ordered sequence of values
    List(Vec<Value>),
    /// Nested document
    Doc(Document),
}

impl Value {
    /// Returns true if this is a leaf value (terminal node)
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Value::Doc(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Doc(_) => "doc",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float; integers widen losslessly enough
    /// for configuration-style data
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to convert to a string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a sequence slice
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable sequence reference
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to a nested document reference
    pub fn as_doc(&self) -> Option<&Document> {
        match self {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable nested document reference
    pub fn as_doc_mut(&mut self) -> Option<&mut Document> {
        match self {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Merges another value into this one.
    ///
    /// Two nested documents merge recursively; any other pairing replaces
    /// this value with a copy of the incoming one.
    pub fn merge(&mut self, other: &Value) {
        if let (Value::Doc(ours), Value::Doc(theirs)) = (&mut *self, other) {
            ours.apply_overlay(theirs);
        } else {
            *self = other.clone();
        }
    }

    /// Converts this value to its plain JSON mirror.
    ///
    /// Nested documents become objects, sequences become arrays, scalars map
    /// directly. Non-finite floats have no JSON representation and become
    /// null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::Number((*n).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Doc(doc) => doc.to_json(),
        }
    }

    /// Converts a JSON value structurally, without applying the
    /// sequence-vs-document classification rule.
    ///
    /// Used for the contents of sequence leaves, which are preserved
    /// verbatim: objects inside a sequence become documents holding their
    /// entries as-is, never promoted or reordered.
    pub(crate) fn from_json_raw(value: serde_json::Value) -> Value {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::from_number(&n),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from_json_raw).collect())
            }
            serde_json::Value::Object(map) => {
                let mut doc = Document::new();
                for (key, value) in map {
                    doc.set(key, Value::from_json_raw(value));
                }
                Value::Doc(doc)
            }
        }
    }

    pub(crate) fn from_number(n: &serde_json::Number) -> Value {
        if let Some(i) = n.as_i64() {
            Value::Int(i)
        } else if let Some(f) = n.as_f64() {
            Value::Float(f)
        } else {
            Value::Null
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Doc(doc) => write!(f, "{doc}"),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Doc(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

// TryFrom implementations backing the typed read methods
impl TryFrom<&Value> for String {
    type Error = DocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(DocError::TypeMismatch {
                expected: "text".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = DocError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(DocError::TypeMismatch {
                expected: "text".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = DocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(DocError::TypeMismatch {
                expected: "int".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = DocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_float().ok_or_else(|| DocError::TypeMismatch {
            expected: "float".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for bool {
    type Error = DocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(DocError::TypeMismatch {
                expected: "bool".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<&Value> for Document {
    type Error = DocError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Doc(doc) => Ok(doc.clone()),
            _ => Err(DocError::TypeMismatch {
                expected: "doc".to_string(),
                actual: value.type_name().to_string(),
            }),
        }
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Value::Int(n) => *n == *other as i64,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Bool(b) => b == other,
            _ => false,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Value::Float(x) => x == other,
            _ => false,
        }
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
