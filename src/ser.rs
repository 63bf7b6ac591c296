//! RJSON serialization.
//!
//! This module holds the two halves of the encoder:
//!
//! - [`Serializer`], the canonical encoder. It walks a [`Value`] tree with an
//!   explicit frame stack and a single loop instead of recursing, so document
//!   depth is bounded by [`RjsonOptions::max_depth`] and never by the thread's
//!   call stack.
//! - [`ValueSerializer`], a `serde` serializer that classifies generic Rust
//!   values (strings, numbers, booleans, options, string-keyed maps, sequences)
//!   into a [`Value`], rejecting records that have no RJSON encoding.
//!
//! ## Frame protocol
//!
//! Each open container owns one frame: the value, a phase (`Fresh` or
//! `InProgress`), the entries to emit (object keys sorted, Void skipped) and a
//! cursor. On its first visit a frame opens the container and starts emitting
//! entries; a container with nothing to emit is written as `{}` or `[]`. Scalar
//! entries are written inline. A container entry pushes a child frame and
//! suspends the parent mid-iteration; when the child pops, the loop returns to
//! the parent, which writes the separator for the finished entry and carries on
//! from the cursor.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_rjson::{RjsonOptions, Serializer, Value};
//!
//! let mut doc = Value::object();
//! doc.set("b", Value::from(2));
//! doc.set("a", Value::from(1));
//!
//! let mut serializer = Serializer::new(RjsonOptions::new());
//! serializer.marshal(&doc).unwrap();
//! assert_eq!(serializer.into_inner(), "{\n  \"a\": 1,\n  \"b\": 2\n}\n");
//! ```

use crate::number::DECIMAL_TOKEN;
use crate::{Decimal, Error, ObjectMap, Result, RjsonOptions, Value, ValueArray};
use serde::ser::Impossible;
use serde::{ser, Serialize};
use std::fmt;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Fresh,
    InProgress,
}

/// A leaf the encoder writes inline.
#[derive(Clone, Copy)]
enum Scalar<'v> {
    Null,
    True,
    False,
    String(&'v str),
    Number(&'v Decimal),
}

/// How the encoder treats a value: inline, or behind a frame of its own.
enum Node<'v> {
    Scalar(Scalar<'v>),
    Object(&'v ObjectMap),
    Array(&'v ValueArray),
}

impl<'v> Node<'v> {
    fn of(value: &'v Value) -> Self {
        match value {
            // Void is skipped inside containers, so this is a bare root.
            Value::Void | Value::Null => Node::Scalar(Scalar::Null),
            Value::True => Node::Scalar(Scalar::True),
            Value::False => Node::Scalar(Scalar::False),
            Value::String(s) => Node::Scalar(Scalar::String(s)),
            Value::Number(n) => Node::Scalar(Scalar::Number(n)),
            Value::Object(map) => Node::Object(map),
            Value::Array(items) => Node::Array(items),
        }
    }
}

/// A child of an open container: its key (objects only) and value.
type Entry<'v> = (Option<&'v str>, &'v Value);

fn object_entries(map: &ObjectMap) -> Vec<Entry<'_>> {
    map.sorted_keys()
        .into_iter()
        .filter_map(|key| map.get(key).map(|value| (Some(key), value)))
        .filter(|(_, value)| !value.is_void())
        .collect()
}

fn array_entries(items: &ValueArray) -> Vec<Entry<'_>> {
    items
        .iter()
        .filter(|value| !value.is_void())
        .map(|value| (None, value))
        .collect()
}

/// One level of the explicit traversal stack.
struct Frame<'v> {
    value: &'v Value,
    phase: Phase,
    /// Children in output order, filled on the first visit.
    entries: Vec<Entry<'v>>,
    cursor: usize,
}

impl<'v> Frame<'v> {
    fn new(value: &'v Value) -> Self {
        Frame {
            value,
            phase: Phase::Fresh,
            entries: Vec::new(),
            cursor: 0,
        }
    }
}

/// The canonical RJSON encoder.
///
/// Output accumulates across calls to [`Serializer::marshal`]; a failed call
/// leaves the buffer exactly as it was before the call.
pub struct Serializer {
    output: String,
    options: RjsonOptions,
}

impl Serializer {
    pub fn new(options: RjsonOptions) -> Self {
        Serializer {
            output: String::with_capacity(1024),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the canonical encoding of `root`, followed by one newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthExceeded`] when `root` nests deeper than
    /// `max_depth` frames. Nothing is appended on error.
    pub fn marshal(&mut self, root: &Value) -> Result<()> {
        let start = self.output.len();
        match self.run(root) {
            Ok(()) => {
                debug!(bytes = self.output.len() - start, "marshalled RJSON document");
                Ok(())
            }
            Err(err) => {
                self.output.truncate(start);
                Err(err)
            }
        }
    }

    fn run<'v>(&mut self, root: &'v Value) -> Result<()> {
        let mut frames: Vec<Frame<'v>> = Vec::new();
        self.push_frame(&mut frames, root)?;

        while let Some(frame) = frames.last() {
            let value: &'v Value = frame.value;
            match Node::of(value) {
                Node::Scalar(scalar) => {
                    self.write_scalar(scalar);
                    frames.pop();
                }
                Node::Object(map) => {
                    self.step_container(&mut frames, ('{', '}'), || object_entries(map))?
                }
                Node::Array(items) => {
                    self.step_container(&mut frames, ('[', ']'), || array_entries(items))?
                }
            }
        }

        self.output.push('\n');
        Ok(())
    }

    fn push_frame<'v>(&self, frames: &mut Vec<Frame<'v>>, value: &'v Value) -> Result<()> {
        if frames.len() >= self.options.max_depth {
            warn!(
                max_depth = self.options.max_depth,
                "RJSON document exceeds the nesting limit"
            );
            return Err(Error::DepthExceeded {
                max_depth: self.options.max_depth,
            });
        }
        frames.push(Frame::new(value));
        Ok(())
    }

    /// Advances the top frame: opens it on the first visit, or finishes the
    /// entry whose child frame just popped. Then writes scalar entries until
    /// the container closes or a container entry needs a frame of its own.
    fn step_container<'v, F>(
        &mut self,
        frames: &mut Vec<Frame<'v>>,
        (open, close): (char, char),
        collect: F,
    ) -> Result<()>
    where
        F: FnOnce() -> Vec<Entry<'v>>,
    {
        let level = frames.len() - 1;

        let (mut cursor, total) = {
            let frame = &mut frames[level];
            match frame.phase {
                Phase::Fresh => {
                    frame.entries = collect();
                    frame.phase = Phase::InProgress;
                    frame.cursor = 0;
                    if !frame.entries.is_empty() {
                        self.output.push(open);
                        self.output.push('\n');
                    }
                }
                Phase::InProgress => {
                    self.end_entry(frame.cursor, frame.entries.len());
                    frame.cursor += 1;
                }
            }
            (frame.cursor, frame.entries.len())
        };

        if total == 0 {
            self.output.push(open);
            self.output.push(close);
            frames.pop();
            return Ok(());
        }

        while cursor < total {
            let (key, child) = frames[level].entries[cursor];
            self.write_indent(level + 1);
            if let Some(key) = key {
                self.write_string(key);
                self.output.push_str(": ");
            }

            match Node::of(child) {
                Node::Scalar(scalar) => self.write_scalar(scalar),
                Node::Object(_) | Node::Array(_) => {
                    frames[level].cursor = cursor;
                    return self.push_frame(frames, child);
                }
            }

            self.end_entry(cursor, total);
            cursor += 1;
        }

        self.write_indent(level);
        self.output.push(close);
        frames.pop();
        Ok(())
    }

    /// Separator after the entry at `index`: a comma unless it is the last one.
    #[inline]
    fn end_entry(&mut self, index: usize, total: usize) {
        if index + 1 != total {
            self.output.push(',');
        }
        self.output.push('\n');
    }

    #[inline]
    fn write_indent(&mut self, level: usize) {
        self.output
            .extend(std::iter::repeat(' ').take(level * self.options.indent));
    }

    fn write_scalar(&mut self, scalar: Scalar<'_>) {
        match scalar {
            Scalar::Null => self.output.push_str("null"),
            Scalar::True => self.output.push_str("true"),
            Scalar::False => self.output.push_str("false"),
            Scalar::String(s) => self.write_string(s),
            Scalar::Number(n) => self.output.push_str(&n.to_string()),
        }
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                c if c < '\u{0020}' || c == '\u{007F}' => {
                    self.output.push_str(&format!("\\u{:04x}", u32::from(c)));
                }
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }
}

fn unsupported<T: fmt::Display>(kind: T) -> Error {
    debug!(kind = %kind, "rejecting input with no RJSON encoding");
    Error::unsupported_kind(kind)
}

/// Classifies any `T: Serialize` into a [`Value`].
///
/// Accepted: booleans, integers, finite floats, chars, strings, unit and
/// `None` (as null), `Some`, newtype structs, unit variants (as their name),
/// sequences, tuples and string-keyed maps. Everything else is an
/// [`Error::UnsupportedKind`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: ValueArray,
}

pub struct SerializeMap {
    map: ObjectMap,
    current_key: Option<String>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = Impossible<Value, Error>;
    type SerializeTupleVariant = Impossible<Value, Error>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = Impossible<Value, Error>;
    type SerializeStructVariant = Impossible<Value, Error>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        // f32's own shortest text, so 0.1f32 stays 0.1 instead of widening.
        if !v.is_finite() {
            return Err(unsupported(format_args!("non-finite float {}", v)));
        }
        Ok(Value::Number(v.to_string().parse()?))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Decimal::from_f64(v)
            .map(Value::Number)
            .ok_or_else(|| unsupported(format_args!("non-finite float {}", v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Value> {
        Err(unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Err(unsupported(format_args!("unit struct {}", name)))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        if name == DECIMAL_TOKEN {
            return match value.serialize(self)? {
                Value::String(literal) => Ok(Value::Number(literal.parse()?)),
                other => Err(Error::custom(format!(
                    "decimal payload must be a string, found {}",
                    other.kind()
                ))),
            };
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(unsupported(format_args!("newtype variant {}::{}", name, variant)))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(unsupported(format_args!("tuple struct {}", name)))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(unsupported(format_args!("tuple variant {}::{}", name, variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(unsupported(format_args!("struct {}", name)))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(unsupported(format_args!("struct variant {}::{}", name, variant)))
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: ValueArray::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize) -> Self {
        SerializeMap {
            map: ObjectMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match key.serialize(ValueSerializer)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => Err(unsupported(format_args!("map key of kind {}", other.kind()))),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.set(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}
