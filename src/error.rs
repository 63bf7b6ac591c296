//! Error types for RJSON serialization and value access.
//!
//! ## Error Categories
//!
//! - **Unsupported kinds**: a generic input has no RJSON encoding (structs, enum payloads, bytes)
//! - **Kind mismatches**: a typed accessor was called on a value of another kind
//! - **Depth limit**: the document nests deeper than the configured frame budget
//! - **Numeric range**: an exact decimal does not fit the requested primitive
//!
//! ## Examples
//!
//! ```rust
//! use serde_rjson::{Error, Value};
//!
//! let value = Value::string("hello");
//! let err = value.try_bool().unwrap_err();
//! assert!(matches!(err, Error::KindMismatch { .. }));
//! assert_eq!(err.to_string(), "value of kind String cannot be converted to bool");
//! ```

use crate::value::Kind;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input contains a kind with no defined encoding.
    #[error("unsupported kind: {0}")]
    UnsupportedKind(String),

    /// A typed accessor was invoked on a value of a different kind.
    #[error("value of kind {found} cannot be converted to {expected}")]
    KindMismatch {
        expected: &'static str,
        found: Kind,
    },

    /// Serializing would open more frames than the configured maximum.
    #[error("nesting depth exceeds the maximum of {max_depth} levels")]
    DepthExceeded { max_depth: usize },

    /// A decimal does not fit in the requested numeric type.
    #[error("number {0} is out of range for the requested type")]
    OutOfRange(String),

    /// A decimal literal could not be parsed.
    #[error("invalid decimal literal: {0:?}")]
    InvalidDecimal(String),

    /// IO error while writing serialized output
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported kind error naming the offending kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rjson::Error;
    ///
    /// let err = Error::unsupported_kind("struct Point");
    /// assert_eq!(err.to_string(), "unsupported kind: struct Point");
    /// ```
    pub fn unsupported_kind<T: fmt::Display>(kind: T) -> Self {
        Error::UnsupportedKind(kind.to_string())
    }

    /// Creates a kind mismatch error for a typed accessor.
    pub fn kind_mismatch(expected: &'static str, found: Kind) -> Self {
        Error::KindMismatch { expected, found }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rjson::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_exceeded_message() {
        let err = Error::DepthExceeded { max_depth: 16 };
        assert_eq!(
            err.to_string(),
            "nesting depth exceeds the maximum of 16 levels"
        );
    }

    #[test]
    fn test_kind_mismatch_names_actual_kind() {
        let err = Error::kind_mismatch("Decimal", Kind::Object);
        assert_eq!(
            err.to_string(),
            "value of kind Object cannot be converted to Decimal"
        );
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::ser::Error>::custom("boom");
        assert_eq!(err, Error::Custom("boom".to_string()));
    }
}
