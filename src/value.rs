//! The RJSON document value model.
//!
//! [`Value`] is a closed tagged union over the eight RJSON kinds. Two details set
//! it apart from a plain JSON value:
//!
//! - **Void is not Null.** [`Value::Void`] means "absent / not applicable". It is
//!   what lookups return on a miss, setting an object key to Void deletes the key,
//!   and appending Void to an array does nothing. Containers therefore never hold
//!   a Void.
//! - **Numbers are exact.** [`Value::Number`] carries a [`Decimal`], never an
//!   `f64`, so `3.0200` serializes as `3.0200`.
//!
//! Booleans are two kinds, [`Value::True`] and [`Value::False`], with no payload.
//!
//! ## Building documents
//!
//! ```rust
//! use serde_rjson::Value;
//!
//! let mut doc = Value::object();
//! doc.set("name", Value::string("Alice"));
//! doc.set("rate", Value::number("3.0200"));
//! doc.set("tags", Value::array());
//! if let Some(mut tags) = doc.get_mut("tags") {
//!     tags.append(Value::string("admin"));
//!     tags.append(Value::Void); // ignored
//! }
//!
//! assert!(doc.has_key("name"));
//! assert_eq!(doc.get("tags").len(), 1);
//! assert!(doc.get("missing").is_void());
//! ```
//!
//! ## Typed extraction
//!
//! ```rust
//! use serde_rjson::{Error, Value};
//!
//! let rate = Value::number("2.5");
//! assert_eq!(rate.try_i64().unwrap(), 3);
//! assert_eq!(rate.try_f64().unwrap(), 2.5);
//! assert!(matches!(rate.try_str(), Err(Error::KindMismatch { .. })));
//! assert_eq!(rate.str_or("n/a"), "n/a");
//! ```

use crate::map::EntryMut;
use crate::number::DECIMAL_TOKEN;
use crate::{Decimal, Error, ObjectMap, Result, ValueArray};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static VOID: Value = Value::Void;

/// The kind tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Void,
    Object,
    Array,
    String,
    Number,
    True,
    False,
    Null,
}

impl Kind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Void => "Void",
            Kind::Object => "Object",
            Kind::Array => "Array",
            Kind::String => "String",
            Kind::Number => "Number",
            Kind::True => "True",
            Kind::False => "False",
            Kind::Null => "Null",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document node: one of the eight RJSON kinds.
///
/// Object and array payloads are [`ObjectMap`] and [`ValueArray`], which keep the
/// no-Void invariant on every mutation path.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Void,
    Null,
    True,
    False,
    String(String),
    Number(Decimal),
    Object(ObjectMap),
    Array(ValueArray),
}

impl Value {
    #[must_use]
    pub const fn void() -> Self {
        Value::Void
    }

    #[must_use]
    pub const fn null() -> Self {
        Value::Null
    }

    #[must_use]
    pub const fn bool(value: bool) -> Self {
        if value {
            Value::True
        } else {
            Value::False
        }
    }

    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    /// Builds a number from a decimal literal. Invalid literals become `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rjson::{Decimal, Value};
    ///
    /// assert_eq!(Value::number("3.0200").try_decimal().unwrap().to_string(), "3.0200");
    /// assert_eq!(Value::number("not a number"), Value::zero());
    /// ```
    #[must_use]
    pub fn number(literal: &str) -> Self {
        Value::Number(literal.parse().unwrap_or_default())
    }

    /// The number zero, for callers that have no literal.
    #[must_use]
    pub fn zero() -> Self {
        Value::Number(Decimal::zero())
    }

    #[must_use]
    pub fn object() -> Self {
        Value::Object(ObjectMap::new())
    }

    #[must_use]
    pub fn array() -> Self {
        Value::Array(ValueArray::new())
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Void => Kind::Void,
            Value::Null => Kind::Null,
            Value::True => Kind::True,
            Value::False => Kind::False,
            Value::String(_) => Kind::String,
            Value::Number(_) => Kind::Number,
            Value::Object(_) => Kind::Object,
            Value::Array(_) => Kind::Array,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Value::Void)
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Value::True)
    }

    #[inline]
    #[must_use]
    pub const fn is_false(&self) -> bool {
        matches!(self, Value::False)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::True | Value::False)
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` for objects and arrays.
    #[inline]
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    /// Number of entries or elements; `0` for scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut ObjectMap> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&ValueArray> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut ValueArray> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Sets `key` on an object. Void deletes the key; non-objects are left untouched.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        if let Value::Object(map) = self {
            map.set(key, value);
        }
    }

    /// Looks up `key`. Returns [`Value::Void`] when the key is absent or `self`
    /// is not an object.
    #[must_use]
    pub fn get(&self, key: &str) -> &Value {
        self.as_object()
            .and_then(|map| map.get(key))
            .unwrap_or(&VOID)
    }

    /// Like [`Value::get`], substituting `default` on a miss.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.as_object()
            .and_then(|map| map.get(key))
            .unwrap_or(default)
    }

    /// Mutable lookup, for editing nested containers in place.
    ///
    /// Writing Void through the handle deletes the key once the handle is dropped.
    pub fn get_mut(&mut self, key: &str) -> Option<EntryMut<'_>> {
        self.as_object_mut().and_then(|map| map.get_mut(key))
    }

    /// Returns `true` when `self` is an object holding a non-Void value at `key`.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.as_object().is_some_and(|map| map.contains_key(key))
    }

    /// Removes `key` from an object. Absent keys and non-objects are ignored.
    pub fn delete(&mut self, key: &str) {
        if let Value::Object(map) = self {
            map.remove(key);
        }
    }

    /// Appends to an array. Void is dropped; non-arrays are left untouched.
    pub fn append(&mut self, value: Value) {
        if let Value::Array(items) = self {
            items.push(value);
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] unless `self` is a string.
    pub fn try_str(&self) -> Result<&str> {
        self.as_str()
            .ok_or_else(|| Error::kind_mismatch("string", self.kind()))
    }

    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] unless `self` is a number.
    pub fn try_decimal(&self) -> Result<&Decimal> {
        self.as_decimal()
            .ok_or_else(|| Error::kind_mismatch("Decimal", self.kind()))
    }

    /// Nearest `f64` of a number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] unless `self` is a number.
    pub fn try_f64(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(n.to_f64()),
            _ => Err(Error::kind_mismatch("f64", self.kind())),
        }
    }

    /// A number rounded to the nearest integer, ties away from zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] unless `self` is a number, and
    /// [`Error::OutOfRange`] when the rounded value does not fit in `i64`.
    pub fn try_i64(&self) -> Result<i64> {
        match self {
            Value::Number(n) => n.to_i64(),
            _ => Err(Error::kind_mismatch("int", self.kind())),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] unless `self` is `True` or `False`.
    pub fn try_bool(&self) -> Result<bool> {
        self.as_bool()
            .ok_or_else(|| Error::kind_mismatch("bool", self.kind()))
    }

    #[must_use]
    pub fn str_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.as_str().unwrap_or(default)
    }

    #[must_use]
    pub fn decimal_or(&self, default: Decimal) -> Decimal {
        self.as_decimal().cloned().unwrap_or(default)
    }

    #[must_use]
    pub fn f64_or(&self, default: f64) -> f64 {
        self.try_f64().unwrap_or(default)
    }

    #[must_use]
    pub fn i64_or(&self, default: i64) -> i64 {
        self.try_i64().unwrap_or(default)
    }

    #[must_use]
    pub fn bool_or(&self, default: bool) -> bool {
        self.as_bool().unwrap_or(default)
    }

    /// Converts into a [`serde_json::Value`] for code outside the RJSON model.
    ///
    /// Void entries are omitted at every level and a bare Void becomes JSON
    /// `null`. Whole numbers that fit in 64 bits stay exact; other numbers
    /// become the nearest `f64` (or `null` if they overflow it).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_rjson::Value;
    ///
    /// let mut doc = Value::object();
    /// doc.set("n", Value::number("42"));
    /// doc.set("ok", Value::True);
    /// assert_eq!(doc.to_native(), serde_json::json!({"n": 42, "ok": true}));
    /// ```
    #[must_use]
    pub fn to_native(&self) -> serde_json::Value {
        use serde_json::Value as Native;

        match self {
            Value::Void | Value::Null => Native::Null,
            Value::True => Native::Bool(true),
            Value::False => Native::Bool(false),
            Value::String(s) => Native::String(s.clone()),
            Value::Number(n) => decimal_to_native(n),
            Value::Object(map) => Native::Object(
                map.iter()
                    .filter(|(_, value)| !value.is_void())
                    .map(|(key, value)| (key.clone(), value.to_native()))
                    .collect(),
            ),
            Value::Array(items) => Native::Array(
                items
                    .iter()
                    .filter(|value| !value.is_void())
                    .map(Value::to_native)
                    .collect(),
            ),
        }
    }
}

fn decimal_to_native(n: &Decimal) -> serde_json::Value {
    if n.scale() == 0 && n.fits_word() {
        let whole = n.round();
        if let Ok(i) = i64::try_from(&whole) {
            return serde_json::Value::from(i);
        }
        if let Ok(u) = u64::try_from(&whole) {
            return serde_json::Value::from(u);
        }
    }
    serde_json::Number::from_f64(n.to_f64()).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Void | Value::Null => serializer.serialize_unit(),
            Value::True => serializer.serialize_bool(true),
            Value::False => serializer.serialize_bool(false),
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) => serializer.serialize_newtype_struct(DECIMAL_TOKEN, &n.to_string()),
            Value::Object(map) => {
                use serde::ser::SerializeMap;
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for key in map.sorted_keys() {
                    if let Some(value) = map.get(key) {
                        out.serialize_entry(key, value)?;
                    }
                }
                out.end()
            }
            Value::Array(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid RJSON value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::Number(Decimal::from(value)))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                Ok(Value::Number(Decimal::from(value)))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Value, E> {
                Decimal::from_f64(value)
                    .map(Value::Number)
                    .ok_or_else(|| E::custom(format!("{} has no exact decimal form", value)))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = ValueArray::new();
                while let Some(element) = seq.next_element()? {
                    items.push(element);
                }
                Ok(Value::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = ObjectMap::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    entries.set(key, value);
                }
                Ok(Value::Object(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(Error::kind_mismatch("string", other.kind())),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.try_bool()
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.try_f64()
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.try_i64()
    }
}

impl TryFrom<Value> for Decimal {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(Error::kind_mismatch("Decimal", other.kind())),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Decimal::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<ObjectMap> for Value {
    fn from(value: ObjectMap) -> Self {
        Value::Object(value)
    }
}

impl From<ValueArray> for Value {
    fn from(value: ValueArray) -> Self {
        Value::Array(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(ValueArray::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_is_not_null() {
        assert_ne!(Value::Void, Value::Null);
        assert_eq!(Value::default(), Value::Void);
        assert_eq!(Value::void().kind(), Kind::Void);
        assert_eq!(Value::null().kind(), Kind::Null);
    }

    #[test]
    fn test_bool_kinds() {
        assert_eq!(Value::bool(true), Value::True);
        assert_eq!(Value::bool(false), Value::False);
        assert!(Value::True.is_bool() && Value::True.is_true());
        assert!(Value::False.is_bool() && Value::False.is_false());
        assert!(!Value::Null.is_bool());
    }

    #[test]
    fn test_set_get_delete() {
        let mut doc = Value::object();
        doc.set("a", Value::from(1));
        assert_eq!(doc.get("a"), &Value::from(1));
        assert!(doc.has_key("a"));

        doc.set("a", Value::Void);
        assert!(!doc.has_key("a"));
        assert!(doc.get("a").is_void());

        doc.set("b", Value::Null);
        doc.delete("b");
        doc.delete("b");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_get_on_non_object_is_void() {
        let mut scalar = Value::string("x");
        scalar.set("a", Value::True);
        assert_eq!(scalar, Value::string("x"));
        assert!(scalar.get("a").is_void());
        assert!(!scalar.has_key("a"));
        scalar.delete("a");
        scalar.append(Value::True);
        assert_eq!(scalar, Value::string("x"));
    }

    #[test]
    fn test_get_or() {
        let mut doc = Value::object();
        doc.set("present", Value::from("yes"));
        let fallback = Value::from("fallback");
        assert_eq!(doc.get_or("present", &fallback), &Value::from("yes"));
        assert_eq!(doc.get_or("absent", &fallback), &fallback);
        assert_eq!(Value::Null.get_or("absent", &fallback), &fallback);
    }

    #[test]
    fn test_append_skips_void() {
        let mut list = Value::array();
        list.append(Value::from(1));
        list.append(Value::Void);
        list.append(Value::Null);
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_array().unwrap().get(1), Some(&Value::Null));
    }

    #[test]
    fn test_number_literal_fallback() {
        assert_eq!(Value::number("3.0200").try_decimal().unwrap().to_string(), "3.0200");
        assert_eq!(Value::number("bogus"), Value::zero());
        assert_eq!(Value::number(""), Value::zero());
    }

    #[test]
    fn test_typed_extraction_mismatch() {
        let obj = Value::object();
        assert_eq!(
            obj.try_str(),
            Err(Error::KindMismatch {
                expected: "string",
                found: Kind::Object
            })
        );
        assert!(matches!(obj.try_decimal(), Err(Error::KindMismatch { found: Kind::Object, .. })));
        assert!(matches!(Value::Null.try_f64(), Err(Error::KindMismatch { found: Kind::Null, .. })));
        assert!(matches!(Value::True.try_i64(), Err(Error::KindMismatch { found: Kind::True, .. })));
        assert!(matches!(Value::Void.try_bool(), Err(Error::KindMismatch { found: Kind::Void, .. })));
    }

    #[test]
    fn test_typed_extraction_defaults() {
        assert_eq!(Value::Null.str_or("d"), "d");
        assert_eq!(Value::string("s").str_or("d"), "s");
        assert_eq!(Value::Null.decimal_or(Decimal::from(7)), Decimal::from(7));
        assert_eq!(Value::Null.f64_or(1.5), 1.5);
        assert_eq!(Value::Null.i64_or(-1), -1);
        assert_eq!(Value::number("1e30").i64_or(-1), -1);
        assert!(Value::Null.bool_or(true));
        assert!(!Value::False.bool_or(true));
    }

    #[test]
    fn test_try_i64_rounding() {
        assert_eq!(Value::number("2.5").try_i64(), Ok(3));
        assert_eq!(Value::number("-2.5").try_i64(), Ok(-3));
        assert_eq!(Value::number("2.4").try_i64(), Ok(2));
    }

    #[test]
    fn test_tryfrom_impls() {
        assert_eq!(String::try_from(Value::from("hi")), Ok("hi".to_string()));
        assert_eq!(bool::try_from(Value::True), Ok(true));
        assert_eq!(f64::try_from(Value::number("0.25")), Ok(0.25));
        assert_eq!(i64::try_from(Value::from(42)), Ok(42));
        assert!(Decimal::try_from(Value::Null).is_err());
    }

    #[test]
    fn test_to_native_omits_void() {
        let mut doc = Value::object();
        doc.set("keep", Value::number("1.25"));
        doc.set("drop", Value::Void);
        let mut list = Value::array();
        list.append(Value::Null);
        list.append(Value::Void);
        doc.set("list", list);

        assert_eq!(
            doc.to_native(),
            serde_json::json!({"keep": 1.25, "list": [null]})
        );
        assert_eq!(Value::Void.to_native(), serde_json::Value::Null);
    }

    #[test]
    fn test_oversized_numbers() {
        assert_eq!(Value::number("1e200000000"), Value::zero());
        assert_eq!(Value::number("1e1024").try_decimal().unwrap().exponent(), 1024);

        let huge = Value::Number(Decimal::new(1, 300_000));
        assert!(matches!(huge.try_i64(), Err(Error::OutOfRange(ref text)) if text.len() < 16));
        assert_eq!(huge.to_native(), serde_json::Value::Null);
        assert_eq!(
            Value::Number(Decimal::new(1, 19)).to_native(),
            serde_json::json!(10_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn test_deserialize_from_json() {
        let value: Value = serde_json::from_str(r#"{"a": [1, 2.5, null], "b": true}"#).unwrap();
        assert_eq!(value.get("b"), &Value::True);
        let list = value.get("a").as_array().unwrap();
        assert_eq!(list.get(0), Some(&Value::from(1)));
        assert_eq!(list.get(1), Some(&Value::number("2.5")));
        assert_eq!(list.get(2), Some(&Value::Null));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Object.to_string(), "Object");
        assert_eq!(Value::number("1").kind().to_string(), "Number");
    }
}
