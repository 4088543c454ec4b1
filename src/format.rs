//! Journal JSON numeric conventions.
//!
//! This module documents how the crate maps JSON numeric literals onto tree
//! nodes and how big integers travel back out to text. It contains no code.
//!
//! # Why two parsing modes
//!
//! Journal event logs are newline-delimited JSON objects. Several identifier
//! fields — system addresses, body identifiers, market identifiers — are 64-bit
//! integers whose values routinely exceed 2^53, the largest magnitude at which an
//! IEEE 754 double still represents every integer exactly. A standard JSON
//! decoder converts every numeric literal to a double, so the low digits of such
//! identifiers are silently destroyed before application code ever sees them.
//!
//! | Mode | Numeric literal | Tree node |
//! |------|-----------------|-----------|
//! | Lossy | any | `f64` |
//! | Precise | `-?[0-9]+` (raw text) | `BigInt` |
//! | Precise | anything with `.`, `e`, or `E` | `f64` |
//!
//! Classification is made on the literal's raw source text. `5` is an integer;
//! `5.0`, `-5.0`, and `5e2` are floats. The converted value is never consulted —
//! it is already too late.
//!
//! # Serializing big integers
//!
//! JSON has no syntax to distinguish a big integer from any other number, and
//! off-the-shelf encoders refuse values beyond their native integer width. The
//! serializer therefore works in two phases:
//!
//! 1. The tree is encoded as ordinary JSON, except each big integer is emitted
//!    as the quoted string `"<tag>_<digits>_<tag>"`. The tag is a UUID generated
//!    fresh for the call.
//! 2. Every occurrence of `"<tag>_` and of `_<tag>"` is deleted from the encoded
//!    text, turning each marker string into a bare numeric literal:
//!
//! ```text
//! {"SystemAddress":"3c9a1b0e-..._9007199254740993_3c9a1b0e-..."}
//!                                  becomes
//! {"SystemAddress":9007199254740993}
//! ```
//!
//! The output is indistinguishable from JSON produced by a writer with native
//! big-integer support, and a precise re-parse recovers the identical digits.
//!
//! # Known limitation: marker collision
//!
//! The strip phase is a whole-text substitution. If application data contains a
//! string that itself starts with `<tag>_` or ends with `_<tag>` for the tag of
//! the *current* call, that string would be corrupted. A fixed marker such as
//! `_BIGINT_` would make this easy to trigger with real payloads (a ship name,
//! say), which is why the tag is a fresh cryptographically random UUID per call:
//! reproducing it requires guessing 122 random bits ahead of time. The residual
//! risk is accepted and documented rather than checked for, and tags are never
//! reused, so text captured from one call can never confuse another.
//!
//! # Error surface
//!
//! - Invalid JSON text fails parsing with a syntax error carrying line and
//!   column; both modes accept exactly the same inputs.
//! - Non-finite floats (`NaN`, infinities) have no JSON literal form and fail
//!   serialization.
//!
//! There is no partial recovery and no fallback; either the whole document
//! converts, or the call returns an error.
