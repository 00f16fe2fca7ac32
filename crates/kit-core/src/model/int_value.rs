//! Best-effort integer scalar.
//!
//! The menu file is hand-edited, so numeric fields (`slot`, `amount`,
//! `custom-model-data`) may hold text that is not a number.  Such values are
//! not an error: they decode to [`IntValue::NaN`] and travel through the model
//! unchanged.
//!
//! # JSON representation
//!
//! | Value            | JSON     |
//! |------------------|----------|
//! | `IntValue::Int(3)` | `3`    |
//! | `IntValue::NaN`  | `null`   |
//!
//! On input a numeric string (`"3"`) is also accepted, because HTML form
//! fields report their values as strings.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// An integer read with best-effort parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntValue {
    /// A successfully parsed integer.
    Int(i64),
    /// The source text did not start with an integer.
    NaN,
}

impl IntValue {
    /// Returns the integer, or `None` for [`IntValue::NaN`].
    pub fn as_i64(self) -> Option<i64> {
        match self {
            IntValue::Int(n) => Some(n),
            IntValue::NaN => None,
        }
    }

    /// `true` when the value is a number strictly greater than `bound`.
    ///
    /// `NaN` compares false against everything.
    pub fn is_greater_than(self, bound: i64) -> bool {
        matches!(self, IntValue::Int(n) if n > bound)
    }

    /// `true` for any number other than zero.  `NaN` and `0` are falsy.
    pub fn is_truthy(self) -> bool {
        matches!(self, IntValue::Int(n) if n != 0)
    }
}

impl Default for IntValue {
    fn default() -> Self {
        IntValue::Int(0)
    }
}

impl From<i64> for IntValue {
    fn from(n: i64) -> Self {
        IntValue::Int(n)
    }
}

impl fmt::Display for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntValue::Int(n) => write!(f, "{n}"),
            IntValue::NaN => f.write_str("NaN"),
        }
    }
}

/// Parses the leading integer of `text`.
///
/// Surrounding whitespace is ignored, an optional `+`/`-` sign is accepted,
/// and parsing stops at the first non-digit character.  Text without any
/// leading digit, or a digit run that overflows `i64`, yields
/// [`IntValue::NaN`].
///
/// # Examples
///
/// ```rust
/// use kit_core::model::{parse_int, IntValue};
///
/// assert_eq!(parse_int(" 42 "), IntValue::Int(42));
/// assert_eq!(parse_int("-3"), IntValue::Int(-3));
/// assert_eq!(parse_int("12abc"), IntValue::Int(12));
/// assert_eq!(parse_int("abc"), IntValue::NaN);
/// ```
pub fn parse_int(text: &str) -> IntValue {
    let text = text.trim();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return IntValue::NaN;
    }

    let digits = &rest[..digits_len];
    let parsed = if negative {
        format!("-{digits}").parse::<i64>()
    } else {
        digits.parse::<i64>()
    };

    parsed.map(IntValue::Int).unwrap_or(IntValue::NaN)
}

// ── Serde ─────────────────────────────────────────────────────────────────────

impl Serialize for IntValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IntValue::Int(n) => serializer.serialize_i64(*n),
            IntValue::NaN => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for IntValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IntValueVisitor)
    }
}

struct IntValueVisitor;

impl<'de> Visitor<'de> for IntValueVisitor {
    type Value = IntValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, a numeric string, or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<IntValue, E> {
        Ok(IntValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<IntValue, E> {
        Ok(i64::try_from(v).map(IntValue::Int).unwrap_or(IntValue::NaN))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<IntValue, E> {
        // Mirrors what the text format would produce after a decode: the
        // integer part survives, non-finite values do not.
        if v.is_finite() && v.abs() < i64::MAX as f64 {
            Ok(IntValue::Int(v.trunc() as i64))
        } else {
            Ok(IntValue::NaN)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<IntValue, E> {
        Ok(parse_int(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<IntValue, E> {
        Ok(IntValue::NaN)
    }

    fn visit_none<E: de::Error>(self) -> Result<IntValue, E> {
        Ok(IntValue::NaN)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
