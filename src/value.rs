//! Typed configuration values and the value-typing grammar.
//!
//! This module provides [`Value`], the closed set of types a raw textual
//! value can resolve to, and [`typecast`], the total function that performs
//! that resolution.
//!
//! ## Core Types
//!
//! - [`Value`]: an enum representing any configuration value (null, bool,
//!   int, float, string, list)
//! - [`typecast`]: converts raw text into a [`Value`]; it never fails,
//!   since anything that is not a recognized literal falls back to a string
//!
//! ## Usage Patterns
//!
//! ### Typing raw text
//!
//! ```rust
//! use xini::{typecast, Value};
//!
//! assert_eq!(typecast("42"), Value::Int(42));
//! assert_eq!(typecast("true"), Value::Bool(true));
//! assert_eq!(typecast("\"true\""), Value::Str("true".to_string()));
//! assert_eq!(
//!     typecast("[80, 443]"),
//!     Value::List(vec![Value::Int(80), Value::Int(443)])
//! );
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use xini::Value;
//!
//! let value = Value::Int(42);
//! assert!(value.is_int());
//! assert!(!value.is_list());
//! ```

use crate::split::{split_unquoted, QUOTES};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed configuration value.
///
/// Every raw textual value in a configuration file resolves to exactly one
/// of these variants. Lists may nest (an element can itself be a bracketed
/// list), but there is no map variant: sections are one level of key to
/// value only.
///
/// # Examples
///
/// ```rust
/// use xini::Value;
///
/// let null = Value::Null;
/// let port = Value::Int(8080);
/// let host = Value::Str("example.com".to_string());
///
/// assert!(null.is_null());
/// assert!(port.is_int());
/// assert!(host.is_str());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
}

/// Resolves raw text to a typed [`Value`].
///
/// The grammar is closed and every input has a defined resolution, so this
/// function is total: no part of typing can fail.
///
/// Resolution order:
///
/// 1. Text wrapped in `[` `]` is an explicit list; the brackets are stripped
///    and the content always becomes a [`Value::List`], even with a single
///    element (or none).
/// 2. Content that splits into more than one comma-separated piece (outside
///    quotes) is an implicit list; each piece is typecast recursively.
/// 3. A single piece resolves to a scalar: quoted text becomes a string
///    verbatim with no further inference, the empty string and `null` become
///    [`Value::Null`], `true`/`false` become [`Value::Bool`] (all
///    case-insensitive), numeric literals become [`Value::Int`] when they
///    have no fractional part and [`Value::Float`] otherwise, and anything
///    else is a string.
///
/// # Examples
///
/// ```rust
/// use xini::{typecast, Value};
///
/// assert_eq!(typecast(""), Value::Null);
/// assert_eq!(typecast("42.0"), Value::Int(42));
/// assert_eq!(typecast("42.5"), Value::Float(42.5));
/// assert_eq!(typecast("[]"), Value::List(vec![]));
/// assert_eq!(
///     typecast("a, b"),
///     Value::List(vec![Value::Str("a".into()), Value::Str("b".into())])
/// );
/// ```
#[must_use]
pub fn typecast(raw: &str) -> Value {
    let trimmed = raw.trim();

    let (content, explicit_list) =
        if trimmed.len() > 1 && trimmed.starts_with('[') && trimmed.ends_with(']') {
            (&trimmed[1..trimmed.len() - 1], true)
        } else {
            (trimmed, false)
        };

    let pieces = split_unquoted(content, ',', 0, &QUOTES);

    if explicit_list || pieces.len() > 1 {
        if explicit_list && content.trim().is_empty() {
            return Value::List(Vec::new());
        }
        let items = pieces
            .iter()
            .map(|piece| typecast(piece.trim_matches(|c| c == ',' || c == ' ')))
            .collect();
        return Value::List(items);
    }

    scalar(pieces[0].trim())
}

/// Resolves one already-isolated piece to a scalar value.
fn scalar(text: &str) -> Value {
    let (unquoted, was_quoted) = strip_quotes(text);
    if was_quoted {
        // Quoted content is a string verbatim, no further inference.
        return Value::Str(unquoted.to_string());
    }
    if unquoted.is_empty() || unquoted.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    if unquoted.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if unquoted.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if is_numeric_literal(unquoted) {
        if let Ok(number) = unquoted.parse::<f64>() {
            if number.fract() == 0.0
                && number >= i64::MIN as f64
                && number <= i64::MAX as f64
            {
                return Value::Int(number as i64);
            }
            return Value::Float(number);
        }
    }
    Value::Str(unquoted.to_string())
}

/// Strips matching surrounding quote layers, repeating while the first and
/// last characters are the same quote character. Returns the unwrapped text
/// and whether any layer was removed.
pub(crate) fn strip_quotes(text: &str) -> (&str, bool) {
    let mut current = text;
    let mut stripped = false;
    loop {
        let mut chars = current.chars();
        match (chars.next(), chars.next_back()) {
            (Some(first), Some(last)) if first == last && QUOTES.contains(&first) => {
                current = &current[first.len_utf8()..current.len() - last.len_utf8()];
                stripped = true;
            }
            _ => return (current, stripped),
        }
    }
}

/// Checks whether `text` is a standard numeric literal: optional sign,
/// digits with an optional decimal point, optional exponent. Word forms
/// like `inf` and `NaN` are rejected so they stay strings.
fn is_numeric_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exponent_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exponent_start {
            return false;
        }
    }

    i == bytes.len()
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns `true` if the value is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as an `f64`. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xini::Value;
    ///
    /// assert_eq!(Value::Int(42).as_f64(), Some(42.0));
    /// assert_eq!(Value::Float(3.5).as_f64(), Some(3.5));
    /// assert_eq!(Value::Null.as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a list, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the name of this value's type, as used in mismatch reports.
    #[inline]
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
        }
    }

    /// Returns `true` when rendering this value requires surrounding quotes
    /// to survive a re-parse with its string type intact.
    #[inline]
    pub fn needs_quotes(&self) -> bool {
        match self {
            Value::Str(s) => {
                s.is_empty()
                    || s.contains(',')
                    || s.contains('"')
                    || s.contains('\'')
                    || s.starts_with('[')
                    || s.starts_with(' ')
                    || s.ends_with(' ')
                    || s.eq_ignore_ascii_case("null")
                    || s.eq_ignore_ascii_case("true")
                    || s.eq_ignore_ascii_case("false")
                    || is_numeric_literal(s)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Str(s) => {
                if self.needs_quotes() {
                    let quote = if s.contains('"') { '\'' } else { '"' };
                    write!(f, "{}{}{}", quote, s, quote)
                } else {
                    write!(f, "{}", s)
                }
            }
            Value::List(items) => {
                write!(
                    f,
                    "[{}]",
                    items
                        .iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        }
    }
}

// TryFrom implementations for extracting values from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Int(i) => Ok(i),
            other => Err(crate::Error::conversion("int", other.type_name())),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Int(i) => Ok(i as f64),
            Value::Float(f) => Ok(f),
            other => Err(crate::Error::conversion("number", other.type_name())),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(crate::Error::conversion("bool", other.type_name())),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(crate::Error::conversion("string", other.type_name())),
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a configuration value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Int(value as i64))
                } else {
                    Ok(Value::Float(value as f64))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::Str(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::Str(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
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
                let mut items = Vec::new();
                while let Some(element) = seq.next_element()? {
                    items.push(element);
                }
                Ok(Value::List(items))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
