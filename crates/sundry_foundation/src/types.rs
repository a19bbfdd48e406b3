//! Value category descriptors.

use std::fmt;

/// Category of a [`Value`](crate::Value).
///
/// Every helper validates its inputs against one of these categories and
/// falls back to a fixed sentinel when the category does not match.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// The undefined category (absent argument or missing slot).
    Undefined,
    /// The null category.
    Null,
    /// Boolean.
    Bool,
    /// IEEE 754 double.
    Number,
    /// Text.
    String,
    /// Calendar instant (valid or not).
    Date,
    /// Ordered sequence.
    Array,
    /// String-keyed mapping.
    Object,
}

impl Type {
    /// Returns true for categories that carry own keys (arrays, objects, dates).
    #[must_use]
    pub const fn is_object_like(self) -> bool {
        matches!(self, Self::Date | Self::Array | Self::Object)
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Date => write!(f, "date"),
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
