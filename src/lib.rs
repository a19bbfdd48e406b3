//! Sundry - stateless helpers for numbers, arrays, strings, dates and objects
//!
//! This crate re-exports both layers of the Sundry library for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: sundry_stdlib     - math, array, string, date and object helpers,
//!                              injectable randomness and clocks
//! Layer 0: sundry_foundation - Core types (Value, Date, LtVec, LtMap, Error)
//! ```
//!
//! # Example
//!
//! ```
//! use sundry::{Value, array, string};
//!
//! let words = Value::from(vec!["b", "a", "b"]);
//! assert_eq!(array::unique(&words).len(), 2);
//! assert_eq!(string::slugify(&Value::from("Hello World!")), Value::from("hello-world"));
//! ```

pub use sundry_foundation as foundation;
pub use sundry_stdlib as stdlib;

pub use sundry_foundation::{Date, LtMap, LtVec, Object, Type, Value};
pub use sundry_stdlib::{array, clock, date, math, object, random, string};
