//! Journal JSON parsing.
//!
//! This module provides the [`Parser`], a single-pass recursive-descent JSON
//! reader with two numeric modes:
//!
//! - [`NumberMode::Lossy`]: every numeric literal becomes an `f64`, matching what
//!   a stock JSON decoder would do. Integers above 2^53 in magnitude may round.
//! - [`NumberMode::Precise`]: a numeric literal whose raw text is an integer
//!   (optional leading `-` followed by decimal digits, with no fraction and no
//!   exponent) becomes a [`num_bigint::BigInt`] built from the exact digit
//!   string. All other literals become `f64`.
//!
//! The classification has to look at the literal's source text, not a converted
//! value — by the time a float exists, the low digits of a large identifier are
//! already gone. That is why this parser is hand-rolled rather than layered on a
//! generic decode hook.
//!
//! Most users should use [`crate::parse_with_lossy_integers`] and
//! [`crate::parse_with_bigint`] instead of driving the parser directly.
//!
//! ```rust
//! use journal_json::{parse_with_bigint, parse_with_lossy_integers};
//!
//! let line = r#"{"event":"FSDJump","SystemAddress":9007199254740993}"#;
//!
//! let precise = parse_with_bigint(line).unwrap();
//! assert_eq!(
//!     precise.get("SystemAddress").unwrap().as_bigint().unwrap().to_string(),
//!     "9007199254740993",
//! );
//!
//! // The lossy tree holds a float that may have rounded.
//! let lossy = parse_with_lossy_integers(line).unwrap();
//! assert!(lossy.get("SystemAddress").unwrap().as_f64().is_some());
//! ```

use crate::{Error, EventMap, JournalValue, Number, Result};

/// Maximum nesting depth for objects and arrays.
const MAX_DEPTH: usize = 128;

/// How numeric literals are converted into tree nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberMode {
    /// All numbers become 64-bit floats.
    Lossy,
    /// Integer literals become arbitrary-precision integers.
    Precise,
}

/// The journal JSON parser.
///
/// Parses a complete JSON document into a [`JournalValue`] tree. Created via
/// [`Parser::new`] with the desired [`NumberMode`].
pub struct Parser<'de> {
    input: &'de str,
    position: usize,
    line: usize,
    column: usize,
    mode: NumberMode,
}

impl<'de> Parser<'de> {
    pub fn new(input: &'de str, mode: NumberMode) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
            mode,
        }
    }

    /// Parses the input as a single JSON document.
    ///
    /// Trailing whitespace is allowed; any other trailing content is a syntax
    /// error.
    pub fn parse(mut self) -> Result<JournalValue> {
        self.skip_whitespace();
        let value = self.parse_value(0)?;
        self.skip_whitespace();
        if !self.at_end() {
            return Err(Error::syntax(
                self.line,
                self.column,
                "trailing characters after JSON document",
            ));
        }
        Ok(value)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some(ch) = self.input[self.position..].chars().next() {
            self.position += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' => {
                    self.next_char();
                }
                _ => break,
            }
        }
    }

    fn expect_char(&mut self, expected: char) -> Result<()> {
        match self.next_char() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(Error::syntax(
                self.line,
                self.column,
                &format!("expected '{}', found '{}'", expected, ch),
            )),
            None => Err(Error::unexpected_eof(
                self.line,
                self.column,
                &format!("'{}'", expected),
            )),
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<JournalValue> {
        match self.peek_char() {
            Some('{') => self.parse_object(depth),
            Some('[') => self.parse_array(depth),
            Some('"') => self.parse_string().map(JournalValue::String),
            Some('t') | Some('f') => self.parse_bool().map(JournalValue::Bool),
            Some('n') => self.parse_null().map(|_| JournalValue::Null),
            Some(ch) if ch == '-' || ch.is_ascii_digit() => {
                self.parse_number().map(JournalValue::Number)
            }
            Some(ch) => Err(Error::syntax(
                self.line,
                self.column,
                &format!("unexpected character '{}'", ch),
            )),
            None => Err(Error::unexpected_eof(self.line, self.column, "a JSON value")),
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<JournalValue> {
        if depth >= MAX_DEPTH {
            return Err(Error::recursion_limit(self.line, self.column));
        }
        self.expect_char('{')?;
        self.skip_whitespace();

        let mut map = EventMap::new();

        if self.peek_char() == Some('}') {
            self.next_char();
            return Ok(JournalValue::Object(map));
        }

        loop {
            self.skip_whitespace();
            if self.peek_char() != Some('"') {
                return match self.peek_char() {
                    Some(ch) => Err(Error::syntax(
                        self.line,
                        self.column,
                        &format!("expected object key string, found '{}'", ch),
                    )),
                    None => Err(Error::unexpected_eof(self.line, self.column, "an object key")),
                };
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            self.expect_char(':')?;
            self.skip_whitespace();

            let value = self.parse_value(depth + 1)?;
            // Duplicate keys: last occurrence wins, as in JSON.parse.
            map.insert(key, value);

            self.skip_whitespace();
            match self.next_char() {
                Some(',') => continue,
                Some('}') => return Ok(JournalValue::Object(map)),
                Some(ch) => {
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        &format!("expected ',' or '}}' in object, found '{}'", ch),
                    ))
                }
                None => {
                    return Err(Error::unexpected_eof(self.line, self.column, "',' or '}'"))
                }
            }
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<JournalValue> {
        if depth >= MAX_DEPTH {
            return Err(Error::recursion_limit(self.line, self.column));
        }
        self.expect_char('[')?;
        self.skip_whitespace();

        let mut elements = Vec::new();

        if self.peek_char() == Some(']') {
            self.next_char();
            return Ok(JournalValue::Array(elements));
        }

        loop {
            self.skip_whitespace();
            elements.push(self.parse_value(depth + 1)?);
            self.skip_whitespace();

            match self.next_char() {
                Some(',') => continue,
                Some(']') => return Ok(JournalValue::Array(elements)),
                Some(ch) => {
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        &format!("expected ',' or ']' in array, found '{}'", ch),
                    ))
                }
                None => {
                    return Err(Error::unexpected_eof(self.line, self.column, "',' or ']'"))
                }
            }
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        self.expect_char('"')?;
        let mut result = String::new();

        loop {
            match self.next_char() {
                Some('"') => return Ok(result),
                Some('\\') => match self.next_char() {
                    Some('"') => result.push('"'),
                    Some('\\') => result.push('\\'),
                    Some('/') => result.push('/'),
                    Some('b') => result.push('\u{0008}'),
                    Some('f') => result.push('\u{000C}'),
                    Some('n') => result.push('\n'),
                    Some('r') => result.push('\r'),
                    Some('t') => result.push('\t'),
                    Some('u') => {
                        let ch = self.parse_unicode_escape()?;
                        result.push(ch);
                    }
                    Some(other) => {
                        return Err(Error::syntax(
                            self.line,
                            self.column,
                            &format!("invalid escape character '{}'", other),
                        ))
                    }
                    None => {
                        return Err(Error::unexpected_eof(
                            self.line,
                            self.column,
                            "an escape character",
                        ))
                    }
                },
                Some(ch) if (ch as u32) < 0x20 => {
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        "unescaped control character in string",
                    ))
                }
                Some(ch) => result.push(ch),
                None => {
                    return Err(Error::unexpected_eof(self.line, self.column, "a closing '\"'"))
                }
            }
        }
    }

    fn parse_hex4(&mut self) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            match self.next_char() {
                Some(ch) if ch.is_ascii_hexdigit() => {
                    code = code * 16 + ch.to_digit(16).unwrap_or(0);
                }
                Some(_) => {
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        "invalid unicode escape, expected 4 hex digits",
                    ))
                }
                None => {
                    return Err(Error::unexpected_eof(self.line, self.column, "4 hex digits"))
                }
            }
        }
        Ok(code)
    }

    fn parse_unicode_escape(&mut self) -> Result<char> {
        let first = self.parse_hex4()?;

        match first {
            // High surrogate, must be followed by an escaped low surrogate.
            0xD800..=0xDBFF => {
                if self.next_char() != Some('\\') || self.next_char() != Some('u') {
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        "unpaired surrogate in unicode escape",
                    ));
                }
                let second = self.parse_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&second) {
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        "invalid low surrogate in unicode escape",
                    ));
                }
                let code = 0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00);
                char::from_u32(code).ok_or_else(|| {
                    Error::syntax(self.line, self.column, "invalid unicode code point")
                })
            }
            0xDC00..=0xDFFF => Err(Error::syntax(
                self.line,
                self.column,
                "unpaired surrogate in unicode escape",
            )),
            code => char::from_u32(code).ok_or_else(|| {
                Error::syntax(self.line, self.column, "invalid unicode code point")
            }),
        }
    }

    fn parse_bool(&mut self) -> Result<bool> {
        if self.input[self.position..].starts_with("true") {
            for _ in 0..4 {
                self.next_char();
            }
            Ok(true)
        } else if self.input[self.position..].starts_with("false") {
            for _ in 0..5 {
                self.next_char();
            }
            Ok(false)
        } else {
            Err(Error::syntax(self.line, self.column, "expected boolean"))
        }
    }

    fn parse_null(&mut self) -> Result<()> {
        if self.input[self.position..].starts_with("null") {
            for _ in 0..4 {
                self.next_char();
            }
            Ok(())
        } else {
            Err(Error::syntax(self.line, self.column, "expected null"))
        }
    }

    /// Scans one numeric literal and converts it according to the mode.
    ///
    /// A literal is an integer iff its raw text is an optional `-` followed by
    /// decimal digits only. `5.0`, `5.` and `5e2` are all non-integers; the
    /// decision is made on the source span before any conversion happens.
    fn parse_number(&mut self) -> Result<Number> {
        let start = self.position;
        let mut is_integer = true;

        if self.peek_char() == Some('-') {
            self.next_char();
        }

        // Integer part: a lone 0, or a nonzero digit followed by more digits.
        match self.peek_char() {
            Some('0') => {
                self.next_char();
                if matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                    return Err(Error::syntax(
                        self.line,
                        self.column,
                        "leading zeros are not allowed in numbers",
                    ));
                }
            }
            Some(ch) if ch.is_ascii_digit() => {
                while matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                    self.next_char();
                }
            }
            _ => {
                return Err(Error::syntax(
                    self.line,
                    self.column,
                    "expected digit in number",
                ))
            }
        }

        if self.peek_char() == Some('.') {
            is_integer = false;
            self.next_char();
            if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                return Err(Error::syntax(
                    self.line,
                    self.column,
                    "expected digit after decimal point",
                ));
            }
            while matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                self.next_char();
            }
        }

        if matches!(self.peek_char(), Some('e') | Some('E')) {
            is_integer = false;
            self.next_char();
            if matches!(self.peek_char(), Some('+') | Some('-')) {
                self.next_char();
            }
            if !matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                return Err(Error::syntax(
                    self.line,
                    self.column,
                    "expected digit in exponent",
                ));
            }
            while matches!(self.peek_char(), Some(ch) if ch.is_ascii_digit()) {
                self.next_char();
            }
        }

        let raw = &self.input[start..self.position];

        if is_integer && self.mode == NumberMode::Precise {
            raw.parse()
                .map(Number::BigInt)
                .map_err(|_| Error::syntax(self.line, self.column, "invalid integer literal"))
        } else {
            raw.parse()
                .map(Number::Float)
                .map_err(|_| Error::syntax(self.line, self.column, "invalid number literal"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn precise(input: &str) -> Result<JournalValue> {
        Parser::new(input, NumberMode::Precise).parse()
    }

    fn lossy(input: &str) -> Result<JournalValue> {
        Parser::new(input, NumberMode::Lossy).parse()
    }

    #[test]
    fn integer_literal_classification() {
        assert_eq!(
            precise("5").unwrap(),
            JournalValue::Number(Number::BigInt(BigInt::from(5)))
        );
        assert_eq!(
            precise("-5").unwrap(),
            JournalValue::Number(Number::BigInt(BigInt::from(-5)))
        );
        assert_eq!(
            precise("5.0").unwrap(),
            JournalValue::Number(Number::Float(5.0))
        );
        assert_eq!(
            precise("-5.0").unwrap(),
            JournalValue::Number(Number::Float(-5.0))
        );
        assert_eq!(
            precise("5e2").unwrap(),
            JournalValue::Number(Number::Float(500.0))
        );
        assert_eq!(
            precise("5E2").unwrap(),
            JournalValue::Number(Number::Float(500.0))
        );
        assert_eq!(
            precise("5e-2").unwrap(),
            JournalValue::Number(Number::Float(0.05))
        );
    }

    #[test]
    fn lossy_mode_never_produces_bigints() {
        let v = lossy(r#"[1, -2, 12345678901234567890, 3.5]"#).unwrap();
        let arr = v.as_array().unwrap();
        assert!(arr.iter().all(|v| v.as_f64().is_some()));
    }

    #[test]
    fn precise_mode_keeps_all_digits() {
        let v = precise("12345678901234567890").unwrap();
        assert_eq!(v.as_bigint().unwrap().to_string(), "12345678901234567890");

        let v = precise("-99999999999999999999999999").unwrap();
        assert_eq!(
            v.as_bigint().unwrap().to_string(),
            "-99999999999999999999999999"
        );
    }

    #[test]
    fn beyond_float_precision() {
        // 2^53 + 1 is the first integer a double cannot hold.
        let v = precise("9007199254740993").unwrap();
        assert_eq!(v.as_bigint().unwrap().to_string(), "9007199254740993");

        let v = lossy("9007199254740993").unwrap();
        let f = v.as_f64().unwrap();
        assert!(f == 9007199254740992.0 || f == 9007199254740993.0);
    }

    #[test]
    fn negative_zero_is_an_integer_literal() {
        assert_eq!(
            precise("-0").unwrap(),
            JournalValue::Number(Number::BigInt(BigInt::from(0)))
        );
        assert_eq!(
            precise("-0.0").unwrap(),
            JournalValue::Number(Number::Float(-0.0))
        );
    }

    #[test]
    fn string_escapes() {
        let v = precise(r#""a\"b\\c\/d\n\t\u0041""#).unwrap();
        assert_eq!(v.as_str(), Some("a\"b\\c/d\n\tA"));
    }

    #[test]
    fn surrogate_pair_escape() {
        let v = precise(r#""\uD83D\uDE00""#).unwrap();
        assert_eq!(v.as_str(), Some("\u{1F600}"));
    }

    #[test]
    fn unpaired_surrogate_is_rejected() {
        assert!(precise(r#""\uD83D""#).is_err());
        assert!(precise(r#""\uDE00""#).is_err());
    }

    #[test]
    fn nested_structures() {
        let v = precise(r#"{"a":[1,{"b":[true,null]}],"c":{"d":"e"}}"#).unwrap();
        let a = v.get("a").unwrap().as_array().unwrap();
        assert_eq!(a[0].as_bigint(), Some(&BigInt::from(1)));
        let b = a[1].get("b").unwrap().as_array().unwrap();
        assert_eq!(b[0].as_bool(), Some(true));
        assert!(b[1].is_null());
        assert_eq!(v.get("c").unwrap().get("d").unwrap().as_str(), Some("e"));
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let v = precise(r#"{"a":1,"a":2}"#).unwrap();
        assert_eq!(v.get("a").unwrap().as_bigint(), Some(&BigInt::from(2)));
        assert_eq!(v.as_object().unwrap().len(), 1);
    }

    #[test]
    fn syntax_errors() {
        for bad in [
            "", "{", "[", "\"abc", "{\"a\":}", "{\"a\" 1}", "[1,]", "{,}", "01", "5.", ".5",
            "1e", "1e+", "-", "tru", "nul", "{\"a\":1} x", "[1 2]", "\"\\q\"", "\u{0}",
        ] {
            assert!(precise(bad).is_err(), "expected error for {:?}", bad);
            assert!(lossy(bad).is_err(), "expected error for {:?}", bad);
        }
    }

    #[test]
    fn lossy_and_precise_agree_on_validity() {
        for input in [
            "null",
            "true",
            r#"{"a":1.5,"b":[1,2,3]}"#,
            r#"[{"x":9007199254740993}]"#,
            "  {\"a\"  :\t1 ,\n\"b\": 2 }  ",
        ] {
            assert_eq!(precise(input).is_ok(), lossy(input).is_ok());
        }
    }

    #[test]
    fn recursion_limit() {
        let deep = "[".repeat(200) + &"]".repeat(200);
        let err = precise(&deep).unwrap_err();
        assert!(matches!(err, Error::RecursionLimit { .. }));

        let ok = "[".repeat(100) + &"]".repeat(100);
        assert!(precise(&ok).is_ok());
    }

    #[test]
    fn error_positions_track_lines() {
        let err = precise("{\n  \"a\": @\n}").unwrap_err();
        match err {
            Error::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn huge_exponents_follow_float_semantics() {
        // f64 parsing saturates to infinity; the serializer later refuses it.
        let v = lossy("1e999").unwrap();
        assert!(v.as_f64().unwrap().is_infinite());
    }
}
