//! Journal JSON serialization.
//!
//! The serializer turns a [`JournalValue`] tree back into JSON text, emitting
//! every arbitrary-precision integer as a bare numeric literal with no digit
//! loss. JSON has no big-integer type, so this happens in two explicit phases:
//!
//! 1. **Structural encode.** The tree is written as ordinary JSON, except that a
//!    big integer is written as a quoted string of the form
//!    `"<tag>_<digits>_<tag>"`, where `<tag>` is a freshly generated UUID unique
//!    to this serialization call.
//! 2. **Marker strip.** A deterministic text substitution deletes every
//!    occurrence of `"<tag>_` and `_<tag>"` from the encoded text, which turns
//!    each marker string into a bare numeric literal in place.
//!
//! The substitution is a textual patch over a structural encoder, and it is safe
//! only because the tag carries 122 random bits: a payload string would have to
//! reproduce the call-local tag exactly to be corrupted. That residual risk is
//! documented in [`crate::format`] and deliberately not treated as an error.
//!
//! ```rust
//! use journal_json::{parse_with_bigint, stringify_bigint_json};
//!
//! let event = parse_with_bigint(r#"{"SystemAddress":9007199254740993}"#).unwrap();
//! let text = stringify_bigint_json(&event).unwrap();
//! assert_eq!(text, r#"{"SystemAddress":9007199254740993}"#);
//! ```

use crate::{Error, EventMap, JournalValue, JsonOptions, Number, Result};
use num_bigint::BigInt;
use serde::{ser, Serialize};
use uuid::Uuid;

/// Call-local wrapper markers for big-integer digits.
///
/// Holds the `<tag>_` prefix and `_<tag>` suffix for one serialization call.
/// Tags are never reused across calls, so a string captured from one call's
/// intermediate text cannot be stripped by another call.
pub(crate) struct IntegerMarker {
    prefix: String,
    suffix: String,
}

impl IntegerMarker {
    /// Generates a marker around a fresh random tag.
    pub(crate) fn fresh() -> Self {
        Self::with_tag(&Uuid::new_v4().to_string())
    }

    fn with_tag(tag: &str) -> Self {
        IntegerMarker {
            prefix: format!("{}_", tag),
            suffix: format!("_{}", tag),
        }
    }

    /// Wraps a decimal digit string between the prefix and suffix markers.
    fn wrap(&self, digits: &str) -> String {
        format!("{}{}{}", self.prefix, digits, self.suffix)
    }

    /// Deletes every `"<tag>_` and `_<tag>"` from the encoded text.
    ///
    /// Quoted marker strings become bare numeric literals in place; all other
    /// text is untouched. The prefix pass runs before the suffix pass, but the
    /// two never overlap so the order is immaterial.
    pub(crate) fn strip(&self, encoded: &str) -> String {
        let open = format!("\"{}", self.prefix);
        let close = format!("{}\"", self.suffix);
        encoded.replace(&open, "").replace(&close, "")
    }
}

/// The journal JSON serializer.
///
/// One serializer handles exactly one tree: the marker tag is generated at
/// construction and consumed by [`Serializer::serialize`].
pub struct Serializer {
    output: String,
    options: JsonOptions,
    marker: IntegerMarker,
    indent_level: usize,
}

impl Serializer {
    pub fn new(options: JsonOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            marker: IntegerMarker::fresh(),
            indent_level: 0,
        }
    }

    /// Encodes the tree and strips the big-integer markers.
    pub fn serialize(mut self, value: &JournalValue) -> Result<String> {
        self.write_value(value)?;
        Ok(self.marker.strip(&self.output))
    }

    fn write_value(&mut self, value: &JournalValue) -> Result<()> {
        match value {
            JournalValue::Null => {
                self.output.push_str("null");
                Ok(())
            }
            JournalValue::Bool(b) => {
                self.output.push_str(if *b { "true" } else { "false" });
                Ok(())
            }
            JournalValue::Number(Number::Float(f)) => self.write_float(*f),
            JournalValue::Number(Number::BigInt(bi)) => {
                let wrapped = self.marker.wrap(&bi.to_string());
                self.write_string(&wrapped);
                Ok(())
            }
            JournalValue::String(s) => {
                self.write_string(s);
                Ok(())
            }
            JournalValue::Array(arr) => self.write_array(arr),
            JournalValue::Object(obj) => self.write_object(obj),
        }
    }

    fn write_float(&mut self, f: f64) -> Result<()> {
        if !f.is_finite() {
            return Err(Error::non_finite(f));
        }
        // {:?} always keeps a '.' or an exponent in the literal, so a float
        // node never re-parses as an integer.
        self.output.push_str(&format!("{:?}", f));
        Ok(())
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
                ch if (ch as u32) < 0x20 => {
                    self.output.push_str(&format!("\\u{:04x}", ch as u32));
                }
                ch => self.output.push(ch),
            }
        }
        self.output.push('"');
    }

    fn write_array(&mut self, arr: &[JournalValue]) -> Result<()> {
        if arr.is_empty() {
            self.output.push_str("[]");
            return Ok(());
        }

        self.output.push('[');
        self.indent_level += 1;
        for (i, element) in arr.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.newline_indent();
            self.write_value(element)?;
        }
        self.indent_level -= 1;
        self.newline_indent();
        self.output.push(']');
        Ok(())
    }

    fn write_object(&mut self, obj: &EventMap) -> Result<()> {
        if obj.is_empty() {
            self.output.push_str("{}");
            return Ok(());
        }

        self.output.push('{');
        self.indent_level += 1;
        for (i, (key, value)) in obj.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.newline_indent();
            self.write_string(key);
            self.output.push(':');
            if self.options.pretty {
                self.output.push(' ');
            }
            self.write_value(value)?;
        }
        self.indent_level -= 1;
        self.newline_indent();
        self.output.push('}');
        Ok(())
    }

    fn newline_indent(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            self.output
                .push_str(&" ".repeat(self.indent_level * self.options.indent));
        }
    }
}

/// Serializer producing a [`JournalValue`] tree from any `T: Serialize`.
///
/// Used by [`crate::to_value`]. Integer primitives become big-integer nodes,
/// floats become float nodes, matching what the precise parser would produce for
/// the same document.
pub struct JournalValueSerializer;

pub struct SerializeVec {
    vec: Vec<JournalValue>,
}

pub struct SerializeMap {
    map: EventMap,
    current_key: Option<String>,
}

impl ser::Serializer for JournalValueSerializer {
    type Ok = JournalValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<JournalValue> {
        Ok(JournalValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<JournalValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<JournalValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<JournalValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<JournalValue> {
        Ok(JournalValue::Number(Number::BigInt(BigInt::from(v))))
    }

    fn serialize_i128(self, v: i128) -> Result<JournalValue> {
        Ok(JournalValue::Number(Number::BigInt(BigInt::from(v))))
    }

    fn serialize_u8(self, v: u8) -> Result<JournalValue> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<JournalValue> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<JournalValue> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<JournalValue> {
        Ok(JournalValue::Number(Number::BigInt(BigInt::from(v))))
    }

    fn serialize_u128(self, v: u128) -> Result<JournalValue> {
        Ok(JournalValue::Number(Number::BigInt(BigInt::from(v))))
    }

    fn serialize_f32(self, v: f32) -> Result<JournalValue> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<JournalValue> {
        Ok(JournalValue::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<JournalValue> {
        Ok(JournalValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<JournalValue> {
        Ok(JournalValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<JournalValue> {
        Ok(JournalValue::Array(
            v.iter().map(|b| JournalValue::from(*b)).collect(),
        ))
    }

    fn serialize_none(self) -> Result<JournalValue> {
        Ok(JournalValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<JournalValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<JournalValue> {
        Ok(JournalValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<JournalValue> {
        Ok(JournalValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<JournalValue> {
        Ok(JournalValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<JournalValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<JournalValue>
    where
        T: ?Sized + Serialize,
    {
        // Externally tagged, as JSON conventionally spells enum variants.
        let mut map = EventMap::new();
        map.insert(variant.to_string(), value.serialize(JournalValueSerializer)?);
        Ok(JournalValue::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            map: EventMap::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap {
            map: EventMap::new(),
            current_key: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = JournalValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_journal_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JournalValue> {
        Ok(JournalValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = JournalValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_journal_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JournalValue> {
        Ok(JournalValue::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = JournalValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_journal_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JournalValue> {
        Ok(JournalValue::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = JournalValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_journal_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JournalValue> {
        Ok(JournalValue::Array(self.vec))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = JournalValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_journal_value(key)? {
            JournalValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings")),
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
        self.map.insert(key, to_journal_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JournalValue> {
        Ok(JournalValue::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = JournalValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_journal_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JournalValue> {
        Ok(JournalValue::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = JournalValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_journal_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JournalValue> {
        Ok(JournalValue::Object(self.map))
    }
}

fn to_journal_value<T: Serialize + ?Sized>(value: &T) -> Result<JournalValue> {
    value.serialize(JournalValueSerializer)
}
