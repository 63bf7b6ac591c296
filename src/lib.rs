//! # serde_rjson
//!
//! Canonical serialization for RJSON, a JSON-like text format with deterministic
//! key ordering and exact decimal numbers.
//!
//! ## Key Features
//!
//! - **Canonical output**: object keys are always emitted in sorted byte order,
//!   with two-space indentation and exactly one trailing newline
//! - **Exact numbers**: values are [`Decimal`]s, never binary floats, so
//!   `3.0200` stays `3.0200`
//! - **Void vs Null**: [`Value::Void`] means "absent" and can never be stored
//!   in a container; [`Value::Null`] is an explicit `null`
//! - **No recursion**: the encoder walks documents with an explicit, bounded frame
//!   stack, so deep nesting is a checked [`Error::DepthExceeded`] rather than a
//!   stack overflow
//! - **Serde bridge**: plain Rust strings, numbers, booleans, options, maps and
//!   sequences serialize directly; records without an RJSON encoding are rejected
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_rjson::{marshal, Value};
//!
//! let mut inner = Value::object();
//! inner.set("222", Value::string("y"));
//! inner.set("111", Value::string("x"));
//!
//! let mut doc = Value::object();
//! doc.set("d_obj_name", inner);
//! doc.set("a_str_name", Value::string("foo"));
//!
//! let text = marshal(&doc).unwrap();
//! assert_eq!(
//!     text,
//!     "{\n  \"a_str_name\": \"foo\",\n  \"d_obj_name\": {\n    \"111\": \"x\",\n    \"222\": \"y\"\n  }\n}\n"
//! );
//! ```
//!
//! ### Generic values
//!
//! ```rust
//! use std::collections::HashMap;
//! use serde_rjson::to_string;
//!
//! assert_eq!(to_string("hello world").unwrap(), "\"hello world\"\n");
//! assert_eq!(to_string(&None::<String>).unwrap(), "null\n");
//!
//! let mut prices = HashMap::new();
//! prices.insert("widget", 9.99);
//! assert_eq!(to_string(&prices).unwrap(), "{\n  \"widget\": 9.99\n}\n");
//! ```
//!
//! ### Building values with the rjson! macro
//!
//! ```rust
//! use serde_rjson::{rjson, marshal};
//!
//! let doc = rjson!({ "b": {}, "a": [true, null] });
//! assert_eq!(marshal(&doc).unwrap(), "{\n  \"a\": [\n    true,\n    null\n  ],\n  \"b\": {}\n}\n");
//! ```

pub mod array;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod number;
pub mod options;
pub mod ser;
pub mod value;

pub use array::{ElementMut, ValueArray};
pub use error::{Error, Result};
pub use map::{EntryMut, ObjectMap};
pub use number::Decimal;
pub use options::{RjsonOptions, DEFAULT_INDENT, DEFAULT_MAX_DEPTH};
pub use ser::{Serializer, ValueSerializer};
pub use value::{Kind, Value};

use serde::Serialize;
use std::io;

/// Serialize a [`Value`] to its canonical RJSON text.
///
/// # Errors
///
/// Returns [`Error::DepthExceeded`] if the document nests deeper than
/// [`DEFAULT_MAX_DEPTH`] containers.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn marshal(value: &Value) -> Result<String> {
    marshal_with_options(value, RjsonOptions::default())
}

/// Serialize a [`Value`] with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_rjson::{marshal_with_options, Error, RjsonOptions, Value};
///
/// let mut doc = Value::object();
/// doc.set("nested", Value::object());
///
/// let shallow = RjsonOptions::new().with_max_depth(1);
/// assert_eq!(
///     marshal_with_options(&doc, shallow),
///     Err(Error::DepthExceeded { max_depth: 1 })
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::DepthExceeded`] if the document nests deeper than
/// `options.max_depth` containers.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn marshal_with_options(value: &Value, options: RjsonOptions) -> Result<String> {
    let mut serializer = Serializer::new(options);
    serializer.marshal(value)?;
    Ok(serializer.into_inner())
}

/// Serialize any supported `T: Serialize` to RJSON text.
///
/// # Examples
///
/// ```rust
/// use serde_rjson::to_string;
///
/// assert_eq!(to_string(&true).unwrap(), "true\n");
/// assert_eq!(to_string(&0.25).unwrap(), "0.25\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedKind`] if `value` contains a kind with no RJSON
/// encoding (for example a struct), or [`Error::DepthExceeded`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, RjsonOptions::default())
}

/// Serialize any supported `T: Serialize` to RJSON text with custom options.
///
/// # Errors
///
/// Same as [`to_string`], with the depth bound taken from `options`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: RjsonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let root = to_value(value)?;
    marshal_with_options(&root, options)
}

/// Serialize any supported `T: Serialize` to RJSON bytes.
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    to_string(value).map(String::into_bytes)
}

/// Serialize any supported `T: Serialize` to a writer.
///
/// Nothing is written if serialization fails.
///
/// # Examples
///
/// ```rust
/// use serde_rjson::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, "hi").unwrap();
/// assert_eq!(buffer, b"\"hi\"\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Convert any supported `T: Serialize` into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use serde_rjson::{to_value, Value};
///
/// let mut map = BTreeMap::new();
/// map.insert("x", Some(1));
/// map.insert("y", None);
///
/// let value = to_value(&map).unwrap();
/// assert_eq!(value.get("x"), &Value::from(1));
/// assert_eq!(value.get("y"), &Value::Null);
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedKind`] for kinds with no RJSON encoding.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_marshal_string_root() {
        assert_eq!(
            marshal(&Value::string("hello world")).unwrap(),
            "\"hello world\"\n"
        );
    }

    #[test]
    fn test_to_string_generic_map() {
        let mut inner = HashMap::new();
        inner.insert("222".to_string(), "y".to_string());
        inner.insert("111".to_string(), "x".to_string());
        let mut doc = HashMap::new();
        doc.insert("outer", inner);

        assert_eq!(
            to_string(&doc).unwrap(),
            "{\n  \"outer\": {\n    \"111\": \"x\",\n    \"222\": \"y\"\n  }\n}\n"
        );
    }

    #[test]
    fn test_unsupported_struct() {
        let err = to_string(&Point { x: 1, y: 2 }).unwrap_err();
        assert!(matches!(err, Error::UnsupportedKind(ref kind) if kind == "struct Point"));
    }

    #[test]
    fn test_nested_struct_is_unsupported() {
        let mut doc = HashMap::new();
        doc.insert("p", Point { x: 1, y: 2 });
        assert!(matches!(to_vec(&doc), Err(Error::UnsupportedKind(_))));
    }

    #[test]
    fn test_to_writer_writes_nothing_on_error() {
        let mut buffer = Vec::new();
        assert!(to_writer(&mut buffer, &Point { x: 0, y: 0 }).is_err());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_value_through_serde_path_matches_marshal() {
        let mut doc = Value::object();
        doc.set("rate", Value::number("3.0200"));
        doc.set("list", Value::from(vec![Value::True, Value::Null]));
        assert_eq!(to_string(&doc).unwrap(), marshal(&doc).unwrap());
    }
}
