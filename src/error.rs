//! Error types for checked argument extraction.
//!
//! The bus itself never fails: registration misuse (duplicate manager names,
//! unknown ids, selecting a missing manager) is reported through `bool` /
//! `Option` returns, and routing an event with no listeners is a silent
//! no-op. The only typed error in the crate is [`ArgError`], produced when a
//! consumer extracts a value from an argument bag with the wrong expected
//! type — a consumer-side concern the bus surfaces explicitly instead of
//! coercing or panicking.

use thiserror::Error;

/// # Errors produced by typed access to an argument bag.
///
/// Returned by the checked getters on [`Args`](crate::Args). Both variants
/// carry the offending key so handlers can log which field of which event
/// schema was violated.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// The bag has no value under the requested key.
    #[error("missing argument: {key:?}")]
    Missing {
        /// The key that was looked up.
        key: String,
    },

    /// The bag holds a value under the key, but of a different type.
    #[error("argument {key:?}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The key that was looked up.
        key: String,
        /// Type label the caller asked for.
        expected: &'static str,
        /// Type label of the stored value.
        found: &'static str,
    },
}

impl ArgError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use tickbus::ArgError;
    ///
    /// let err = ArgError::Missing { key: "radius".into() };
    /// assert_eq!(err.as_label(), "arg_missing");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ArgError::Missing { .. } => "arg_missing",
            ArgError::TypeMismatch { .. } => "arg_type_mismatch",
        }
    }

    /// The key whose extraction failed.
    pub fn key(&self) -> &str {
        match self {
            ArgError::Missing { key } | ArgError::TypeMismatch { key, .. } => key,
        }
    }
}
