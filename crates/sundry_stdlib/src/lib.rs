//! Stateless helpers for numbers, arrays, strings, dates and objects.
//!
//! This crate provides helpers organized by category:
//! - [`math`]: number theory and arithmetic
//! - [`array`]: sequence manipulation
//! - [`string`]: text transformation
//! - [`date`]: calendar formatting and arithmetic
//! - [`object`]: mapping manipulation and deep copies
//!
//! Helpers never fail. Malformed input produces a fixed sentinel (NaN, an
//! empty container, the input itself, or [`Date::INVALID`](sundry_foundation::Date::INVALID)).
//! Randomness and the current time are passed in explicitly through
//! [`random`] and [`clock`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod array;
pub mod clock;
pub mod date;
mod fallback;
pub mod math;
pub mod object;
pub mod random;
pub mod string;
