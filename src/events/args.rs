//! # Dynamically typed event payload (argument bag).
//!
//! Every event carries an [`Args`] bag: an open mapping from string keys to
//! [`Value`]s. The bus performs no schema validation — producers and
//! consumers agree on a schema per event name (see
//! [`names`](crate::events::names)), and consumers perform **checked**
//! extraction through the typed getters, which report a typed
//! [`ArgError`](crate::ArgError) instead of silently succeeding with wrong
//! data.
//!
//! ## Rules
//! - Bags are cloned into the queue on publish and never mutated afterwards.
//! - `get_*` getters fail with `ArgError::Missing` for absent keys and
//!   `ArgError::TypeMismatch` for present-but-wrong-typed values.
//! - Untyped access (`get`) remains available for generic tooling.
//!
//! ## Example
//! ```rust
//! use tickbus::Args;
//!
//! let args = Args::new()
//!     .with("matter", "rock")
//!     .with("x", 4)
//!     .with("radius", 2);
//!
//! assert_eq!(args.get_str("matter"), Ok("rock"));
//! assert_eq!(args.get_int("radius"), Ok(2));
//!
//! // Wrong expected type is an explicit, typed failure:
//! let err = args.get_float("x").unwrap_err();
//! assert_eq!(err.as_label(), "arg_type_mismatch");
//! ```

use std::collections::HashMap;

use crate::error::ArgError;

/// A single dynamically typed argument value.
///
/// The closed set of payload types the bus routes: integers, floats,
/// booleans and strings. Consumers match on the variant or use the typed
/// getters on [`Args`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed integer (covers the original schemas' coordinate/id fields).
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Owned string.
    Str(String),
}

impl Value {
    /// Returns a short stable label for the stored type (for diagnostics).
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// Dynamically typed key/value payload attached to an event.
///
/// Built with the chained [`Args::with`] builder or filled through
/// [`Args::insert`]. Cheap to create empty; cloned once on publish.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: HashMap<String, Value>,
}

impl Args {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value under `key`, consuming and returning the bag (builder).
    ///
    /// Later inserts under the same key replace earlier ones.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Inserts a value under `key`, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Untyped access to a stored value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Checked extraction of an integer value.
    pub fn get_int(&self, key: &str) -> Result<i64, ArgError> {
        match self.fetch(key)? {
            Value::Int(v) => Ok(*v),
            other => Err(self.mismatch(key, "int", other)),
        }
    }

    /// Checked extraction of a floating-point value.
    pub fn get_float(&self, key: &str) -> Result<f64, ArgError> {
        match self.fetch(key)? {
            Value::Float(v) => Ok(*v),
            other => Err(self.mismatch(key, "float", other)),
        }
    }

    /// Checked extraction of a boolean value.
    pub fn get_bool(&self, key: &str) -> Result<bool, ArgError> {
        match self.fetch(key)? {
            Value::Bool(v) => Ok(*v),
            other => Err(self.mismatch(key, "bool", other)),
        }
    }

    /// Checked extraction of a string value (borrowed).
    pub fn get_str(&self, key: &str) -> Result<&str, ArgError> {
        match self.fetch(key)? {
            Value::Str(v) => Ok(v.as_str()),
            other => Err(self.mismatch(key, "str", other)),
        }
    }

    /// True if the bag holds a value under `key` (of any type).
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the bag holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn fetch(&self, key: &str) -> Result<&Value, ArgError> {
        self.values.get(key).ok_or_else(|| ArgError::Missing {
            key: key.to_string(),
        })
    }

    fn mismatch(&self, key: &str, expected: &'static str, found: &Value) -> ArgError {
        ArgError::TypeMismatch {
            key: key.to_string(),
            expected,
            found: found.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_untyped_get() {
        let args = Args::new().with("x", 10).with("label", "marker");
        assert_eq!(args.len(), 2);
        assert_eq!(args.get("x"), Some(&Value::Int(10)));
        assert!(args.get("y").is_none());
    }

    #[test]
    fn test_typed_getters_succeed() {
        let args = Args::new()
            .with("x", 4)
            .with("scale", 0.5)
            .with("visible", true)
            .with("matter", "rock");
        assert_eq!(args.get_int("x"), Ok(4));
        assert_eq!(args.get_float("scale"), Ok(0.5));
        assert_eq!(args.get_bool("visible"), Ok(true));
        assert_eq!(args.get_str("matter"), Ok("rock"));
    }

    #[test]
    fn test_missing_key_is_typed_error() {
        let args = Args::new();
        let err = args.get_int("x").unwrap_err();
        assert_eq!(err.as_label(), "arg_missing");
        assert_eq!(err.key(), "x");
    }

    #[test]
    fn test_type_mismatch_reports_both_kinds() {
        let args = Args::new().with("x", 4);
        match args.get_str("x") {
            Err(ArgError::TypeMismatch {
                key,
                expected,
                found,
            }) => {
                assert_eq!(key, "x");
                assert_eq!(expected, "str");
                assert_eq!(found, "int");
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_insert_replaces() {
        let mut args = Args::new().with("x", 1);
        args.insert("x", 2);
        assert_eq!(args.get_int("x"), Ok(2));
        assert_eq!(args.len(), 1);
    }
}
