//! Error types for journal JSON parsing and serialization.
//!
//! Failures fall into two families:
//!
//! - **Parse errors**: the input text is not syntactically valid JSON. These carry
//!   line and column information pointing at the offending token.
//! - **Encode errors**: the value tree contains content JSON cannot represent as a
//!   numeric literal (non-finite floats) or that the generic serializer does not
//!   support.
//!
//! Neither family is retried or recovered internally; malformed input surfaces as
//! an immediate failure to the caller.
//!
//! ## Examples
//!
//! ```rust
//! use journal_json::parse_with_bigint;
//!
//! let result = parse_with_bigint("{\"event\": ");
//! assert!(matches!(result, Err(ref e) if e.is_parse()));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors that can occur while parsing or serializing journal JSON.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Input text is not valid JSON
    #[error("syntax error at line {line}, column {column}: {msg}")]
    Syntax {
        line: usize,
        column: usize,
        msg: String,
    },

    /// Input ended in the middle of a value
    #[error("unexpected end of input at line {line}, column {column}, expected {expected}")]
    UnexpectedEof {
        line: usize,
        column: usize,
        expected: String,
    },

    /// Nesting deeper than the parser's recursion limit
    #[error("recursion limit exceeded at line {line}, column {column}")]
    RecursionLimit { line: usize, column: usize },

    /// A float with no JSON literal form (NaN or an infinity)
    #[error("cannot encode non-finite number {0} as a JSON literal")]
    NonFiniteNumber(f64),

    /// A Rust type the value serializer cannot represent
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error raised through the serde error traits
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error pointing at a line and column.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use journal_json::Error;
    ///
    /// let err = Error::syntax(3, 14, "expected ':' after object key");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn syntax(line: usize, column: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            column,
            msg: msg.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, column: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            column,
            expected: expected.to_string(),
        }
    }

    /// Creates a recursion limit error.
    pub fn recursion_limit(line: usize, column: usize) -> Self {
        Error::RecursionLimit { line, column }
    }

    /// Creates an encode error for a float that has no JSON literal form.
    pub fn non_finite(value: f64) -> Self {
        Error::NonFiniteNumber(value)
    }

    /// Creates an unsupported type error for values the serializer cannot represent.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` if this error came from parsing invalid JSON text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use journal_json::Error;
    ///
    /// assert!(Error::syntax(1, 1, "bad token").is_parse());
    /// assert!(!Error::non_finite(f64::NAN).is_parse());
    /// ```
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(
            self,
            Error::Syntax { .. } | Error::UnexpectedEof { .. } | Error::RecursionLimit { .. }
        )
    }

    /// Returns `true` if this error came from encoding an unrepresentable value.
    #[must_use]
    pub const fn is_encode(&self) -> bool {
        matches!(self, Error::NonFiniteNumber(_) | Error::UnsupportedType(_))
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
