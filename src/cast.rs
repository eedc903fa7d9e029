//! cast
//!
//! Value casting: converts raw string/boolean flag values into their
//! semantically typed form.
//!
//! # Rules
//!
//! Applied in order, first match wins:
//!
//! 1. A string containing a comma splits on `,` and casts each piece
//!    recursively, producing a list (`"1,2,3"` becomes `[1, 2, 3]`).
//! 2. A finite decimal number becomes [`Value::Num`]. Empty and
//!    whitespace-only strings are not numbers, and NaN/Infinity
//!    spellings never escape as numbers.
//! 3. `"true"` / `"false"` become [`Value::Bool`].
//! 4. Any other string is kept, with surrounding whitespace trimmed.
//! 5. Non-string input is returned unchanged, which makes casting
//!    idempotent on already-casted values.
//!
//! Casting is deterministic and total; it never fails.

use serde::{Deserialize, Serialize};

use crate::token::RawValue;

/// A casted option value.
///
/// Serializes untagged, so a bound `Command` renders as natural JSON:
/// `{"retries": 3, "force": true, "tags": ["a", "b"]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean, from a presence flag or a `true`/`false` literal.
    Bool(bool),
    /// Finite number.
    Num(f64),
    /// Trimmed string.
    Str(String),
    /// Comma-separated values, each casted independently.
    List(Vec<Value>),
}

impl Value {
    /// Construct a string value.
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// Runtime kind of this value, used for declared-type validation.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Boolean,
            Self::Num(_) => ValueKind::Number,
            Self::Str(_) => ValueKind::Str,
            Self::List(_) => ValueKind::Array,
        }
    }
}

/// The four value kinds the template grammar can declare via `type:`.
///
/// A [`Value::List`] is always kind `array`, decided structurally; there
/// is no object-like kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Number,
    Boolean,
    Array,
}

impl ValueKind {
    /// Resolve a declared type name. Names are case-sensitive and exact;
    /// anything else is unsupported.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::Str),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "array" => Some(Self::Array),
            _ => None,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Str => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
        };
        write!(f, "{name}")
    }
}

/// Cast a value. Strings are interpreted by the rules above; everything
/// else passes through unchanged.
///
/// # Example
///
/// ```
/// use cmdroute::cast::{cast, Value};
///
/// assert_eq!(cast(Value::str("3")), Value::Num(3.0));
/// assert_eq!(cast(Value::str(" true ")), Value::Bool(true));
/// assert_eq!(
///     cast(Value::str("1,2")),
///     Value::List(vec![Value::Num(1.0), Value::Num(2.0)])
/// );
/// assert_eq!(cast(Value::Bool(false)), Value::Bool(false));
/// ```
pub fn cast(value: Value) -> Value {
    match value {
        Value::Str(s) => cast_str(&s),
        other => other,
    }
}

/// Cast a raw flag value straight from the decomposer.
pub fn cast_raw(raw: &RawValue) -> Value {
    match raw {
        RawValue::Text(s) => cast_str(s),
        RawValue::Switch(b) => Value::Bool(*b),
    }
}

fn cast_str(s: &str) -> Value {
    if s.contains(',') {
        return Value::List(s.split(',').map(cast_str).collect());
    }
    let trimmed = s.trim();
    if let Some(n) = parse_number(trimmed) {
        return Value::Num(n);
    }
    match trimmed {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::Str(trimmed.to_string()),
    }
}

/// Strict decimal parse. `f64::from_str` also accepts spellings like
/// `inf` and `NaN`, so restrict the alphabet to decimal notation first
/// and reject non-finite results.
fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}
