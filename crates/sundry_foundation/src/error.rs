//! Error types for sundry.
//!
//! Uses `thiserror` for ergonomic error definition. Public helpers never
//! return these; they convert them into sentinel values at the boundary.

use thiserror::Error;

use crate::types::Type;

/// The main error type for fallible coercions and parsing.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates a non-finite number error.
    #[must_use]
    pub fn non_finite(value: f64) -> Self {
        Self::new(ErrorKind::NonFinite(value))
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDate(input.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An argument had the wrong category.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected category.
        expected: Type,
        /// The category actually received.
        actual: Type,
    },

    /// A number was NaN or infinite where a finite one is required.
    #[error("non-finite number: {0}")]
    NonFinite(f64),

    /// An argument had the right category but an unusable value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A date could not be parsed or constructed.
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
}

/// Result alias using the sundry [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
