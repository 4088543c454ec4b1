//! Configuration options for JSON output.
//!
//! [`JsonOptions`] controls the formatting of serialized text. The default is the
//! compact single-line form journal files use; pretty printing is available for
//! diagnostics and fixtures.
//!
//! ## Examples
//!
//! ```rust
//! use journal_json::{parse_with_bigint, stringify_bigint_json_with_options, JsonOptions};
//!
//! let event = parse_with_bigint(r#"{"event":"Scan","BodyID":7}"#).unwrap();
//!
//! let options = JsonOptions::pretty().with_indent(4);
//! let text = stringify_bigint_json_with_options(&event, &options).unwrap();
//! assert!(text.contains('\n'));
//! ```

/// Formatting options for serialized JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonOptions {
    pub indent: usize,
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            indent: 2,
            pretty: false,
        }
    }
}

impl JsonOptions {
    /// Creates default options (compact single-line output).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use journal_json::JsonOptions;
    ///
    /// let options = JsonOptions::new();
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    #[must_use]
    pub fn pretty() -> Self {
        JsonOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use journal_json::JsonOptions;
    ///
    /// let options = JsonOptions::pretty().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
