//! Core value model, persistent collections, and errors for sundry.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value every helper validates against
//! - [`Date`] - Calendar instants with an explicit invalid sentinel
//! - [`Type`] - Value category descriptors
//! - [`Error`] - Error types for fallible coercions and parsing
//! - Persistent collections ([`LtVec`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod date;
pub mod error;
pub mod types;
pub mod value;

pub use collections::{LtMap, LtVec};
pub use date::Date;
pub use error::{Error, ErrorKind, Result};
pub use types::Type;
pub use value::{Object, Value};
