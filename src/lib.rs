//! # journal_json
//!
//! Precision-preserving JSON parsing and serialization for journal event logs.
//!
//! ## The problem
//!
//! Journal-style event logs are newline-delimited JSON objects whose identifier
//! fields (system addresses, body ids, market ids) are 64-bit integers. Many of
//! those values exceed 2^53, the point past which an IEEE 754 double no longer
//! represents every integer exactly — so a stock JSON decoder silently corrupts
//! them. This crate parses those documents without losing a digit, and writes
//! them back out with big integers as plain numeric literals, not quoted strings.
//!
//! ## Key features
//!
//! - **Two parsing modes**: [`parse_with_lossy_integers`] converts every number
//!   to `f64` (fine when no identifiers are involved); [`parse_with_bigint`]
//!   converts integer literals to [`num_bigint::BigInt`] from their exact digit
//!   strings.
//! - **Precision-preserving output**: [`stringify_bigint_json`] re-emits big
//!   integers as bare numeric literals, indistinguishable from numbers written
//!   by a native big-integer encoder.
//! - **Serde compatible**: build trees from your own types with [`to_value`],
//!   or deserialize [`JournalValue`] through any serde format.
//! - **No shared state**: every operation is a pure function over its input;
//!   each call allocates and releases its own intermediates, so concurrent use
//!   from multiple threads needs no synchronization.
//! - **No unsafe code**: written entirely in safe Rust.
//!
//! ## Quick start
//!
//! ```rust
//! use journal_json::{parse_with_bigint, stringify_bigint_json};
//!
//! let line = r#"{"timestamp":"2026-08-06T12:00:00Z","event":"FSDJump","SystemAddress":9007199254740993}"#;
//!
//! let event = parse_with_bigint(line).unwrap();
//! assert_eq!(event.event_name(), Some("FSDJump"));
//! assert_eq!(
//!     event.get("SystemAddress").unwrap().as_bigint().unwrap().to_string(),
//!     "9007199254740993",
//! );
//!
//! // The identifier survives the round trip digit for digit.
//! let out = stringify_bigint_json(&event).unwrap();
//! assert_eq!(out, line);
//! ```
//!
//! ## Choosing a mode
//!
//! Use [`parse_with_lossy_integers`] when the fields you read are floats, small
//! counts, strings, or booleans — every number comes back as an `f64`, which is
//! exact up to 15 digits and pleasant to work with. Use [`parse_with_bigint`]
//! whenever identifier fields matter; big integers are a little less convenient
//! (no direct float arithmetic) but never lose precision.
//!
//! ## Number classification
//!
//! The precise parser decides integer-vs-float on the literal's raw source text:
//! an optional leading `-` followed by decimal digits is an integer; anything
//! containing a decimal point or an exponent (`5.0`, `5e2`) is a float. See the
//! [`format`] module for the full conventions, including the marker scheme the
//! serializer uses and its documented collision caveat.

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::{NumberMode, Parser};
pub use error::{Error, Result};
pub use map::EventMap;
pub use options::JsonOptions;
pub use ser::{JournalValueSerializer, Serializer};
pub use value::{JournalValue, Number};

use serde::Serialize;
use std::io;

/// Parses a journal event, converting every numeric literal to a 64-bit float.
///
/// Use this when you do not care about the precision of large identifiers.
/// Integers are exact up to 15 digits; identifier fields such as system
/// addresses exceed that, and will silently round — use [`parse_with_bigint`]
/// when they matter.
///
/// # Examples
///
/// ```rust
/// use journal_json::parse_with_lossy_integers;
///
/// let event = parse_with_lossy_integers(r#"{"event":"Scan","BodyID":7}"#).unwrap();
/// assert_eq!(event.get("BodyID").unwrap().as_f64(), Some(7.0));
/// ```
///
/// # Errors
///
/// Returns an error if the input is not syntactically valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_lossy_integers(text: &str) -> Result<JournalValue> {
    Parser::new(text, NumberMode::Lossy).parse()
}

/// Parses a journal event with every integer literal as an arbitrary-precision
/// integer.
///
/// A literal is an integer iff its raw text is an optional `-` followed by
/// decimal digits, with no decimal point and no exponent. The big integer is
/// built from the exact digit string, never from a float intermediate, so
/// identifiers of unbounded magnitude survive with full precision. This function
/// is the inverse of [`stringify_bigint_json`].
///
/// # Examples
///
/// ```rust
/// use journal_json::parse_with_bigint;
/// use num_bigint::BigInt;
///
/// let event = parse_with_bigint(r#"{"MarketID":12345678901234567890}"#).unwrap();
/// let id: &BigInt = event.get("MarketID").unwrap().as_bigint().unwrap();
/// assert_eq!(id.to_string(), "12345678901234567890");
/// ```
///
/// # Errors
///
/// Returns an error if the input is not syntactically valid JSON — the two
/// parsing modes accept exactly the same inputs.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_bigint(text: &str) -> Result<JournalValue> {
    Parser::new(text, NumberMode::Precise).parse()
}

/// Parses a journal event from bytes, lossy-float mode.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice_with_lossy_integers(bytes: &[u8]) -> Result<JournalValue> {
    let text = std::str::from_utf8(bytes).map_err(Error::custom)?;
    parse_with_lossy_integers(text)
}

/// Parses a journal event from bytes, precise big-integer mode.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_slice_with_bigint(bytes: &[u8]) -> Result<JournalValue> {
    let text = std::str::from_utf8(bytes).map_err(Error::custom)?;
    parse_with_bigint(text)
}

/// Parses a journal event from an `io::Read`, precise big-integer mode.
///
/// # Examples
///
/// ```rust
/// use journal_json::parse_reader_with_bigint;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(br#"{"SystemAddress":9467047910809}"#);
/// let event = parse_reader_with_bigint(cursor).unwrap();
/// assert!(event.get("SystemAddress").unwrap().is_bigint());
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader_with_bigint<R: io::Read>(mut reader: R) -> Result<JournalValue> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse_with_bigint(&text)
}

/// Parses a journal event from an `io::Read`, lossy-float mode.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader_with_lossy_integers<R: io::Read>(mut reader: R) -> Result<JournalValue> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse_with_lossy_integers(&text)
}

/// Serializes a value tree that may contain big integers to compact JSON.
///
/// Every arbitrary-precision integer appears in the output as a bare decimal
/// numeric literal with zero digit loss. This is done by first encoding each
/// big integer as a string wrapped in a call-local random marker, then stripping
/// the markers (with the surrounding quotes) from the encoded text — see the
/// [`format`] module for the scheme and its documented collision caveat. This
/// function is the inverse of [`parse_with_bigint`].
///
/// # Examples
///
/// ```rust
/// use journal_json::{event, stringify_bigint_json};
///
/// let tree = event!({"id": 9007199254740993u64});
/// assert_eq!(stringify_bigint_json(&tree).unwrap(), r#"{"id":9007199254740993}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the tree contains a non-finite float, which has no JSON
/// literal form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_bigint_json(value: &JournalValue) -> Result<String> {
    stringify_bigint_json_with_options(value, &JsonOptions::default())
}

/// Serializes a value tree to pretty-printed JSON with big-integer literals.
///
/// # Errors
///
/// Returns an error if the tree contains a non-finite float.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_bigint_json_pretty(value: &JournalValue) -> Result<String> {
    stringify_bigint_json_with_options(value, &JsonOptions::pretty())
}

/// Serializes a value tree to JSON with big-integer literals, using custom
/// formatting options.
///
/// # Errors
///
/// Returns an error if the tree contains a non-finite float.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn stringify_bigint_json_with_options(
    value: &JournalValue,
    options: &JsonOptions,
) -> Result<String> {
    Serializer::new(options.clone()).serialize(value)
}

/// Serializes a value tree to a writer as compact JSON with big-integer
/// literals.
///
/// # Errors
///
/// Returns an error if serialization fails or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_bigint_json<W: io::Write>(mut writer: W, value: &JournalValue) -> Result<()> {
    let text = stringify_bigint_json(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Converts any `T: Serialize` to a [`JournalValue`] tree.
///
/// Integer primitives become big-integer nodes and floats become float nodes,
/// the same shapes [`parse_with_bigint`] produces, so the result serializes
/// through [`stringify_bigint_json`] with full precision.
///
/// # Examples
///
/// ```rust
/// use journal_json::{to_value, stringify_bigint_json};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Jump { event: &'static str, system_address: u64 }
///
/// let tree = to_value(&Jump { event: "FSDJump", system_address: 9467047910809 }).unwrap();
/// let text = stringify_bigint_json(&tree).unwrap();
/// assert_eq!(text, r#"{"event":"FSDJump","system_address":9467047910809}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (e.g. a map with
/// non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<JournalValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(JournalValueSerializer)
}

/// Serializes any `T: Serialize` straight to JSON text with big-integer
/// literals.
///
/// Shorthand for [`to_value`] followed by [`stringify_bigint_json`].
///
/// # Errors
///
/// Returns an error if the value cannot be represented or contains a non-finite
/// float.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    stringify_bigint_json(&to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event;
    use num_bigint::BigInt;

    #[test]
    fn lossy_and_precise_parse_the_same_documents() {
        let line = r#"{"timestamp":"2026-08-06T12:00:00Z","event":"Scan","BodyID":7,"Radius":2496916.25}"#;
        let lossy = parse_with_lossy_integers(line).unwrap();
        let precise = parse_with_bigint(line).unwrap();

        assert_eq!(lossy.get("BodyID").unwrap().as_f64(), Some(7.0));
        assert_eq!(
            precise.get("BodyID").unwrap().as_bigint(),
            Some(&BigInt::from(7))
        );
        // Floats behave identically in both modes.
        assert_eq!(
            lossy.get("Radius").unwrap().as_f64(),
            precise.get("Radius").unwrap().as_f64()
        );
    }

    #[test]
    fn round_trip_preserves_identifiers() {
        let line = r#"{"event":"FSDJump","SystemAddress":9007199254740993,"StarPos":[-16.5,12.25,0.0]}"#;
        let event = parse_with_bigint(line).unwrap();
        let out = stringify_bigint_json(&event).unwrap();
        assert_eq!(out, line);
    }

    #[test]
    fn slice_and_reader_adapters() {
        let bytes = br#"{"MarketID":3221397760}"#;
        let from_slice = parse_slice_with_bigint(bytes).unwrap();
        let from_reader = parse_reader_with_bigint(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(from_slice, from_reader);

        assert!(parse_slice_with_bigint(&[0xff, 0xfe]).is_err());
        assert!(parse_slice_with_lossy_integers(bytes).unwrap().get("MarketID").unwrap().as_f64().is_some());
    }

    #[test]
    fn write_to_buffer() {
        let event = event!({"event": "Docked", "MarketID": 128666762});
        let mut buffer = Vec::new();
        write_bigint_json(&mut buffer, &event).unwrap();
        assert_eq!(buffer, br#"{"event":"Docked","MarketID":128666762}"#);
    }

    #[test]
    fn to_string_shorthand() {
        use serde::Serialize;

        #[derive(Serialize)]
        struct Scan {
            event: &'static str,
            body_id: u64,
        }

        let text = to_string(&Scan {
            event: "Scan",
            body_id: 9007199254740993,
        })
        .unwrap();
        assert_eq!(text, r#"{"event":"Scan","body_id":9007199254740993}"#);
    }
}
