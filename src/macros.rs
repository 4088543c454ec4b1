/// Builds a [`crate::JournalValue`] tree from JSON-like syntax.
///
/// Integer literals become arbitrary-precision integer nodes and float literals
/// become float nodes, the same classification the precise parser applies.
///
/// # Examples
///
/// ```rust
/// use journal_json::{event, stringify_bigint_json};
///
/// let jump = event!({
///     "timestamp": "2026-08-06T12:00:00Z",
///     "event": "FSDJump",
///     "SystemAddress": 9007199254740993u64,
///     "JumpDist": 12.5
/// });
///
/// let text = stringify_bigint_json(&jump).unwrap();
/// assert!(text.contains("\"SystemAddress\":9007199254740993"));
/// ```
#[macro_export]
macro_rules! event {
    (null) => {
        $crate::JournalValue::Null
    };

    (true) => {
        $crate::JournalValue::Bool(true)
    };

    (false) => {
        $crate::JournalValue::Bool(false)
    };

    ([]) => {
        $crate::JournalValue::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::JournalValue::Array(vec![$($crate::event!($elem)),*])
    };

    ({}) => {
        $crate::JournalValue::Object($crate::EventMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::EventMap::new();
        $(
            object.insert($key.to_string(), $crate::event!($value));
        )*
        $crate::JournalValue::Object(object)
    }};

    // Fallback for any expression convertible through serde.
    ($other:expr) => {{
        $crate::to_value(&$other).unwrap_or($crate::JournalValue::Null)
    }};
}
