//! Dynamic value type that every helper validates against.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::collections::{LtMap, LtVec};
use crate::date::Date;
use crate::error::{Error, Result};
use crate::types::Type;

/// String-keyed mapping with insertion-ordered keys.
pub type Object = LtMap<Arc<str>, Value>;

/// Dynamic value passed to and returned from helpers.
///
/// Values are immutable and cheaply cloneable. Sequences and mappings use
/// persistent data structures, so producing a modified copy never touches
/// the original.
#[derive(Clone)]
pub enum Value {
    /// Absent value.
    Undefined,
    /// The null value.
    Nil,
    /// Boolean value.
    Bool(bool),
    /// Double-precision number.
    Number(f64),
    /// String value.
    String(Arc<str>),
    /// Calendar instant.
    Date(Date),
    /// Ordered sequence.
    Vec(LtVec<Value>),
    /// String-keyed mapping.
    Map(Object),
}

impl Value {
    /// Builds a mapping from key/value pairs, keeping their order.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Arc<str>>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the category of this value.
    #[must_use]
    pub const fn value_type(&self) -> Type {
        match self {
            Self::Undefined => Type::Undefined,
            Self::Nil => Type::Null,
            Self::Bool(_) => Type::Bool,
            Self::Number(_) => Type::Number,
            Self::String(_) => Type::String,
            Self::Date(_) => Type::Date,
            Self::Vec(_) => Type::Array,
            Self::Map(_) => Type::Object,
        }
    }

    /// Returns true if this value is null or undefined.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Nil | Self::Undefined)
    }

    /// Returns true if this value is truthy.
    ///
    /// `false`, `0`, `-0`, `NaN`, the empty string, null and undefined are
    /// falsy. Everything else, including empty sequences and mappings, is
    /// truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Date(_) | Self::Vec(_) | Self::Map(_) => true,
        }
    }

    /// Attempts to extract a number. No coercion is applied.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a date.
    #[must_use]
    pub const fn as_date(&self) -> Option<Date> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Attempts to extract a sequence reference.
    #[must_use]
    pub const fn as_vec(&self) -> Option<&LtVec<Value>> {
        match self {
            Self::Vec(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to extract a mapping reference.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Object> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Extracts a number or reports what was found instead.
    ///
    /// # Errors
    ///
    /// Returns a `TypeMismatch` error for anything but [`Value::Number`].
    pub fn expect_number(&self) -> Result<f64> {
        self.as_number()
            .ok_or_else(|| Error::type_mismatch(Type::Number, self.value_type()))
    }

    /// Extracts a finite number.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` for non-numbers and `NonFinite` for NaN or
    /// infinities.
    pub fn expect_finite(&self) -> Result<f64> {
        let n = self.expect_number()?;
        if n.is_finite() {
            Ok(n)
        } else {
            Err(Error::non_finite(n))
        }
    }

    /// Extracts a string slice.
    ///
    /// # Errors
    ///
    /// Returns a `TypeMismatch` error for anything but [`Value::String`].
    pub fn expect_str(&self) -> Result<&str> {
        self.as_str()
            .ok_or_else(|| Error::type_mismatch(Type::String, self.value_type()))
    }

    /// Extracts a sequence.
    ///
    /// # Errors
    ///
    /// Returns a `TypeMismatch` error for anything but [`Value::Vec`].
    pub fn expect_vec(&self) -> Result<&LtVec<Value>> {
        self.as_vec()
            .ok_or_else(|| Error::type_mismatch(Type::Array, self.value_type()))
    }

    /// Extracts a valid date.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` for non-dates and `InvalidDate` for the invalid
    /// sentinel.
    pub fn expect_date(&self) -> Result<Date> {
        let date = self
            .as_date()
            .ok_or_else(|| Error::type_mismatch(Type::Date, self.value_type()))?;
        if date.is_valid() {
            Ok(date)
        } else {
            Err(Error::invalid_date(date.to_string()))
        }
    }

    /// Numeric coercion.
    ///
    /// null → 0, booleans → 0/1, strings parse after trimming (empty → 0),
    /// dates → epoch milliseconds, a sequence coerces through its string
    /// form, and anything else is NaN.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined | Self::Map(_) => f64::NAN,
            Self::Nil => 0.0,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::String(s) => parse_number(s),
            Self::Date(d) => d.timestamp_millis().map_or(f64::NAN, |ms| ms as f64),
            Self::Vec(_) => parse_number(&self.to_key()),
        }
    }

    /// Renders this value the way it appears when used as a mapping key.
    #[must_use]
    pub fn to_key(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_string(),
            Self::Nil => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::String(s) => s.to_string(),
            Self::Date(d) => d.to_string(),
            Self::Vec(v) => v
                .iter()
                .map(|item| {
                    if item.is_nullish() {
                        String::new()
                    } else {
                        item.to_key()
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
            Self::Map(_) => "[object Object]".to_string(),
        }
    }

    /// Equality used for deduplication.
    ///
    /// Like `==` except that `NaN` equals `NaN` and `0` equals `-0`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_value_zero(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => self == other,
        }
    }
}

/// Formats a number without a trailing `.0` on integral values.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => {
            if let Some(hex) = trimmed.strip_prefix("0x") {
                #[allow(clippy::cast_precision_loss)]
                return u64::from_str_radix(hex, 16).map_or(f64::NAN, |n| n as f64);
            }
            // Rust also accepts "inf" and "nan"; those are not numeric strings here.
            let numeric = trimmed
                .bytes()
                .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
            if numeric {
                trimmed.parse().unwrap_or(f64::NAN)
            } else {
                f64::NAN
            }
        }
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Vec(a), Self::Vec(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Undefined | Self::Nil => {}
            Self::Bool(b) => b.hash(state),
            Self::Number(n) => n.to_bits().hash(state),
            Self::String(s) => s.hash(state),
            Self::Date(d) => d.hash(state),
            Self::Vec(v) => v.hash(state),
            Self::Map(m) => m.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Nil => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Date(d) => write!(f, "{d:?}"),
            Self::Vec(v) => write!(f, "{v:?}"),
            Self::Map(m) => write!(f, "{m:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vec(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            other => write!(f, "{}", other.to_key()),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Self::Date(d)
    }
}

impl From<LtVec<Value>> for Value {
    fn from(v: LtVec<Value>) -> Self {
        Self::Vec(v)
    }
}

impl From<Object> for Value {
    fn from(m: Object) -> Self {
        Self::Map(m)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Vec(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}
