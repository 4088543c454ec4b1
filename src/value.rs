//! Dynamic value representation for journal event data.
//!
//! This module provides the [`JournalValue`] enum, an in-memory tree for any JSON
//! document, with one twist over the standard JSON data model: a numeric node is
//! tagged as either a 64-bit float or an arbitrary-precision integer. The precise
//! parser produces [`Number::BigInt`] nodes for integer literals, so identifier
//! fields such as system addresses survive with full precision.
//!
//! ## Core types
//!
//! - [`JournalValue`]: any JSON value (null, bool, number, string, array, object)
//! - [`Number`]: a numeric node, either `Float(f64)` or `BigInt`
//!
//! ## Examples
//!
//! ```rust
//! use journal_json::{parse_with_bigint, JournalValue};
//! use num_bigint::BigInt;
//!
//! let event = parse_with_bigint(r#"{"event":"FSDJump","SystemAddress":9467047910809}"#).unwrap();
//! let address = event.get("SystemAddress").and_then(|v| v.as_bigint());
//! assert_eq!(address, Some(&BigInt::from(9467047910809i64)));
//! ```

use crate::EventMap;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any journal JSON value.
///
/// Journal events are open-ended — new event shapes appear with every game or
/// service update — so the interchange type is a dynamic tree rather than a fixed
/// set of structs. Typed access goes through serde via [`crate::to_value`] and
/// `Deserialize`.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JournalValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JournalValue>),
    Object(EventMap),
}

/// A numeric tree node.
///
/// The variant records how the number was classified, not merely its magnitude:
/// the precise parser maps integer literals (optional `-` followed by digits, no
/// decimal point or exponent) to `BigInt` and everything else to `Float`. The
/// lossy parser only ever produces `Float`.
///
/// # Examples
///
/// ```rust
/// use journal_json::Number;
/// use num_bigint::BigInt;
///
/// let float = Number::Float(3.5);
/// let big = Number::BigInt(BigInt::from(9007199254740993i64));
///
/// assert!(float.is_float());
/// assert!(big.is_bigint());
/// assert_eq!(big.as_i64(), Some(9007199254740993));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Float(f64),
    BigInt(BigInt),
}

impl Number {
    /// Returns `true` if this is a floating-point node.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is an arbitrary-precision integer node.
    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, Number::BigInt(_))
    }

    /// Converts this number to an `i64` if it fits.
    ///
    /// Returns `Some` for big integers within `i64` range and for floats with no
    /// fractional part. Returns `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use journal_json::Number;
    /// use num_bigint::BigInt;
    ///
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::BigInt(BigInt::from(42)).as_i64(), Some(42));
    ///
    /// let huge: BigInt = "123456789012345678901234567890".parse().unwrap();
    /// assert_eq!(Number::BigInt(huge).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::BigInt(bi) => i64::try_from(bi.clone()).ok(),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Returns the float value, or `None` for a big integer.
    ///
    /// Big integers are deliberately not folded into a float here — a silent
    /// precision loss is exactly what this crate exists to avoid. Use
    /// [`Number::as_i64`] or match on [`Number::BigInt`] instead.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Number::Float(f) => Some(*f),
            Number::BigInt(_) => None,
        }
    }

    /// Returns a reference to the big integer, or `None` for a float.
    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Number::BigInt(bi) => Some(bi),
            Number::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // {:?} keeps a decimal point or exponent, so floats stay
            // distinguishable from integers
            Number::Float(fl) => write!(f, "{:?}", fl),
            Number::BigInt(bi) => write!(f, "{}", bi),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::BigInt(BigInt::from(value))
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::BigInt(BigInt::from(value))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::BigInt(BigInt::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::BigInt(BigInt::from(value))
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        Number::BigInt(BigInt::from(value))
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::BigInt(BigInt::from(value))
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::BigInt(BigInt::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::BigInt(BigInt::from(value))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::BigInt(BigInt::from(value))
    }
}

impl From<u128> for Number {
    fn from(value: u128) -> Self {
        Number::BigInt(BigInt::from(value))
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::BigInt(value)
    }
}

impl JournalValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JournalValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, JournalValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, JournalValue::Number(_))
    }

    /// Returns `true` if the value is an arbitrary-precision integer.
    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, JournalValue::Number(Number::BigInt(_)))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, JournalValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, JournalValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, JournalValue::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JournalValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JournalValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a number representable as `i64`, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JournalValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a float node, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JournalValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// If the value is an arbitrary-precision integer, returns a reference to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use journal_json::parse_with_bigint;
    ///
    /// let v = parse_with_bigint("12345678901234567890").unwrap();
    /// assert_eq!(v.as_bigint().unwrap().to_string(), "12345678901234567890");
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            JournalValue::Number(n) => n.as_bigint(),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<JournalValue>> {
        match self {
            JournalValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&EventMap> {
        match self {
            JournalValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up a field if the value is an object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use journal_json::parse_with_bigint;
    ///
    /// let event = parse_with_bigint(r#"{"event":"Docked","StationName":"Jameson Memorial"}"#).unwrap();
    /// assert_eq!(event.get("StationName").and_then(|v| v.as_str()), Some("Jameson Memorial"));
    /// assert!(event.get("missing").is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JournalValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// If the value is an ISO 8601 string, parses it as a UTC datetime.
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            JournalValue::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        }
    }

    /// Returns the `timestamp` field of an event object as a UTC datetime.
    ///
    /// Every journal event carries a `timestamp` field in ISO 8601 form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use journal_json::parse_with_bigint;
    ///
    /// let event = parse_with_bigint(r#"{"timestamp":"2026-08-06T12:00:00Z","event":"Scan"}"#).unwrap();
    /// assert!(event.timestamp().is_some());
    /// ```
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.get("timestamp")?.as_datetime()
    }

    /// Returns the `event` field of an event object.
    #[must_use]
    pub fn event_name(&self) -> Option<&str> {
        self.get("event")?.as_str()
    }
}

impl fmt::Display for JournalValue {
    /// Renders the value in a compact JSON-like form for diagnostics.
    ///
    /// This is a display aid, not the serializer — use
    /// [`crate::stringify_bigint_json`] to produce output text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JournalValue::Null => write!(f, "null"),
            JournalValue::Bool(b) => write!(f, "{}", b),
            JournalValue::Number(n) => write!(f, "{}", n),
            JournalValue::String(s) => write!(f, "{:?}", s),
            JournalValue::Array(arr) => {
                write!(f, "[")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            JournalValue::Object(obj) => {
                write!(f, "{{")?;
                for (i, (k, v)) in obj.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{:?}:{}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Serialize for JournalValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JournalValue::Null => serializer.serialize_unit(),
            JournalValue::Bool(b) => serializer.serialize_bool(*b),
            JournalValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            JournalValue::Number(Number::BigInt(bi)) => {
                // Generic serde targets have no arbitrary-precision integer in
                // their data model. Emit i64 when the value fits; otherwise the
                // decimal digit string is the only precision-safe spelling.
                match i64::try_from(bi.clone()) {
                    Ok(i) => serializer.serialize_i64(i),
                    Err(_) => serializer.serialize_str(&bi.to_string()),
                }
            }
            JournalValue::String(s) => serializer.serialize_str(s),
            JournalValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            JournalValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for JournalValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct JournalValueVisitor;

        impl<'de> Visitor<'de> for JournalValueVisitor {
            type Value = JournalValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid journal JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(JournalValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(JournalValue::Number(Number::BigInt(BigInt::from(value))))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(JournalValue::Number(Number::BigInt(BigInt::from(value))))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(JournalValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(JournalValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(JournalValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(JournalValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(JournalValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(JournalValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = EventMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(JournalValue::Object(values))
            }
        }

        deserializer.deserialize_any(JournalValueVisitor)
    }
}

impl TryFrom<JournalValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: JournalValue) -> crate::Result<Self> {
        match &value {
            JournalValue::Number(n) => n
                .as_i64()
                .ok_or_else(|| crate::Error::custom(format!("number {} does not fit in i64", n))),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JournalValue> for BigInt {
    type Error = crate::Error;

    fn try_from(value: JournalValue) -> crate::Result<Self> {
        match value {
            JournalValue::Number(Number::BigInt(bi)) => Ok(bi),
            _ => Err(crate::Error::custom(format!(
                "expected big integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JournalValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: JournalValue) -> crate::Result<Self> {
        match value {
            JournalValue::Number(Number::Float(f)) => Ok(f),
            _ => Err(crate::Error::custom(format!(
                "expected float, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JournalValue> for bool {
    type Error = crate::Error;

    fn try_from(value: JournalValue) -> crate::Result<Self> {
        match value {
            JournalValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JournalValue> for String {
    type Error = crate::Error;

    fn try_from(value: JournalValue) -> crate::Result<Self> {
        match value {
            JournalValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for JournalValue {
    fn from(value: bool) -> Self {
        JournalValue::Bool(value)
    }
}

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JournalValue {
                fn from(value: $ty) -> Self {
                    JournalValue::Number(Number::from(value))
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

impl From<BigInt> for JournalValue {
    fn from(value: BigInt) -> Self {
        JournalValue::Number(Number::BigInt(value))
    }
}

impl From<String> for JournalValue {
    fn from(value: String) -> Self {
        JournalValue::String(value)
    }
}

impl From<&str> for JournalValue {
    fn from(value: &str) -> Self {
        JournalValue::String(value.to_string())
    }
}

impl From<Vec<JournalValue>> for JournalValue {
    fn from(value: Vec<JournalValue>) -> Self {
        JournalValue::Array(value)
    }
}

impl From<EventMap> for JournalValue {
    fn from(value: EventMap) -> Self {
        JournalValue::Object(value)
    }
}

impl<T: Into<JournalValue>> From<Option<T>> for JournalValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => JournalValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_as_i64_bounds() {
        let fits = Number::BigInt(BigInt::from(i64::MAX));
        assert_eq!(fits.as_i64(), Some(i64::MAX));

        let too_big: BigInt = "9223372036854775808".parse().unwrap();
        assert_eq!(Number::BigInt(too_big).as_i64(), None);

        assert_eq!(Number::Float(1.5).as_i64(), None);
        assert_eq!(Number::Float(-3.0).as_i64(), Some(-3));
    }

    #[test]
    fn bigint_is_not_a_float() {
        let n = Number::BigInt(BigInt::from(42));
        assert_eq!(n.as_f64(), None);
        assert_eq!(n.as_bigint(), Some(&BigInt::from(42)));
    }

    #[test]
    fn integer_primitives_become_bigints() {
        assert_eq!(
            JournalValue::from(42i32),
            JournalValue::Number(Number::BigInt(BigInt::from(42)))
        );
        assert_eq!(
            JournalValue::from(u64::MAX),
            JournalValue::Number(Number::BigInt(BigInt::from(u64::MAX)))
        );
        assert_eq!(
            JournalValue::from(3.5f64),
            JournalValue::Number(Number::Float(3.5))
        );
    }

    #[test]
    fn tryfrom_roundtrips() {
        let v = JournalValue::from(7i64);
        assert_eq!(i64::try_from(v).unwrap(), 7);

        let v = JournalValue::from(3.5f64);
        assert_eq!(f64::try_from(v).unwrap(), 3.5);

        let v = JournalValue::from("hello");
        assert_eq!(String::try_from(v).unwrap(), "hello");

        let v = JournalValue::from(true);
        assert!(bool::try_from(v).unwrap());

        assert!(i64::try_from(JournalValue::from("nope")).is_err());
        assert!(f64::try_from(JournalValue::from(1i64)).is_err());
    }

    #[test]
    fn datetime_accessors() {
        let v = JournalValue::from("2026-08-06T12:34:56Z");
        assert!(v.as_datetime().is_some());
        assert!(JournalValue::from("not a date").as_datetime().is_none());
        assert!(JournalValue::from(1i64).as_datetime().is_none());
    }

    #[test]
    fn event_helpers() {
        let mut map = EventMap::new();
        map.insert(
            "timestamp".to_string(),
            JournalValue::from("2026-08-06T12:00:00Z"),
        );
        map.insert("event".to_string(), JournalValue::from("FSDJump"));
        let event = JournalValue::Object(map);

        assert_eq!(event.event_name(), Some("FSDJump"));
        assert!(event.timestamp().is_some());
        assert!(JournalValue::Null.event_name().is_none());
    }

    #[test]
    fn option_from() {
        assert_eq!(JournalValue::from(None::<i64>), JournalValue::Null);
        assert_eq!(
            JournalValue::from(Some(1i64)),
            JournalValue::Number(Number::BigInt(BigInt::from(1)))
        );
    }

    #[test]
    fn display_keeps_float_marker() {
        assert_eq!(Number::Float(5.0).to_string(), "5.0");
        assert_eq!(Number::BigInt(BigInt::from(5)).to_string(), "5");
    }
}
