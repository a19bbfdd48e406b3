//! Sequence manipulation helpers.
//!
//! Every helper returns a new sequence. Non-sequence input yields an empty
//! sequence, except `max`/`min`, which return `NaN`.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use sundry_foundation::{Error, LtVec, Result, Value};

use crate::fallback::or_sentinel;
use crate::math::{nan_max, nan_min};

/// Array: unique - order-preserving deduplication
///
/// Elements are hashed on a canonical form in which every `NaN` is one
/// value and `-0` is `0`, so duplicates are exactly the pairs
/// [`Value::same_value_zero`] equates. Containers compare structurally.
#[must_use]
pub fn unique(arr: &Value) -> LtVec<Value> {
    let result = arr.expect_vec().map(|items| {
        let mut seen = HashSet::new();
        items
            .iter()
            .filter(|item| seen.insert(dedup_key(item)))
            .cloned()
            .collect()
    });
    or_sentinel("unique", result, LtVec::new)
}

/// Array: flatten - splice nested sequences in, up to `depth` levels
///
/// `flatten([1, [2, [3]]], 1) = [1, 2, [3]]`. Pass `f64::INFINITY` (or use
/// [`flatten_deep`]) to flatten completely.
#[must_use]
pub fn flatten(arr: &Value, depth: f64) -> LtVec<Value> {
    let result = arr.expect_vec().map(|items| {
        let mut out = Vec::with_capacity(items.len());
        flatten_into(items, depth, &mut out);
        LtVec::from(out)
    });
    or_sentinel("flatten", result, LtVec::new)
}

/// Array: flatten-deep - [`flatten`] with unlimited depth
#[must_use]
pub fn flatten_deep(arr: &Value) -> LtVec<Value> {
    flatten(arr, f64::INFINITY)
}

fn flatten_into(items: &LtVec<Value>, depth: f64, out: &mut Vec<Value>) {
    for item in items {
        match item {
            Value::Vec(inner) if depth > 0.0 => flatten_into(inner, depth - 1.0, out),
            other => out.push(other.clone()),
        }
    }
}

/// Array: chunk - contiguous slices of `size` elements
///
/// The last chunk may be shorter. `size` must be a positive number. A
/// fractional size advances a fractional cursor and each chunk covers
/// `trunc(i)..trunc(i + size)`, so `chunk([1, 2, 3], 1.5) = [[1], [2, 3]]`
/// and sizes below 1 produce empty chunks.
#[must_use]
pub fn chunk(arr: &Value, size: &Value) -> LtVec<Value> {
    let result = arr.expect_vec().and_then(|items| {
        let size = chunk_size(size, items.len())?;
        Ok(chunk_bounds(items.len(), size)
            .map(|(start, end)| Value::Vec(items.slice(start, end)))
            .collect())
    });
    or_sentinel("chunk", result, LtVec::new)
}

/// Largest number of chunks a single call may produce.
const MAX_CHUNKS: f64 = 16_777_216.0;

#[allow(clippy::cast_precision_loss)]
fn chunk_size(size: &Value, len: usize) -> Result<f64> {
    let size = size.expect_number()?;
    if size.is_nan() || size <= 0.0 {
        return Err(Error::invalid_argument(format!(
            "chunk size must be positive, got {size}"
        )));
    }
    if len as f64 / size > MAX_CHUNKS {
        return Err(Error::invalid_argument(format!(
            "chunk size {size} yields too many chunks"
        )));
    }
    Ok(size)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn chunk_bounds(len: usize, size: f64) -> impl Iterator<Item = (usize, usize)> {
    let limit = len as f64;
    // `as` truncates toward zero and saturates, matching slice bound rules.
    std::iter::successors(Some(0.0_f64), move |i| Some(i + size))
        .take_while(move |i| *i < limit)
        .map(move |i| (i as usize, (i + size) as usize))
}

/// Array: shuffle - Fisher-Yates over a copy
pub fn shuffle<R: Rng + ?Sized>(arr: &Value, rng: &mut R) -> LtVec<Value> {
    let result = arr.expect_vec().map(|items| {
        let mut copy: Vec<Value> = items.iter().cloned().collect();
        copy.shuffle(rng);
        LtVec::from(copy)
    });
    or_sentinel("shuffle", result, LtVec::new)
}

/// Array: max - largest element after numeric coercion
///
/// `NaN` for a non-sequence, an empty sequence, or if any element coerces
/// to `NaN`.
#[must_use]
pub fn max(arr: &Value) -> f64 {
    or_sentinel("max", extremum(arr, f64::NEG_INFINITY, nan_max), || f64::NAN)
}

/// Array: min - smallest element after numeric coercion
#[must_use]
pub fn min(arr: &Value) -> f64 {
    or_sentinel("min", extremum(arr, f64::INFINITY, nan_min), || f64::NAN)
}

fn extremum(arr: &Value, init: f64, pick: fn(f64, f64) -> f64) -> Result<f64> {
    let items = arr.expect_vec()?;
    if items.is_empty() {
        return Err(Error::invalid_argument("extremum of an empty sequence"));
    }
    Ok(items.iter().map(Value::to_number).fold(init, pick))
}

/// Array: compact - drop falsy elements
///
/// Removes `false`, `0`, `-0`, `NaN`, `""`, null and undefined.
#[must_use]
pub fn compact(arr: &Value) -> LtVec<Value> {
    let result = arr
        .expect_vec()
        .map(|items| items.iter().filter(|item| item.is_truthy()).cloned().collect());
    or_sentinel("compact", result, LtVec::new)
}

/// Canonical form for hashing under same-value-zero equality.
fn dedup_key(value: &Value) -> Value {
    match value {
        Value::Number(n) if *n == 0.0 => Value::Number(0.0),
        Value::Number(n) if n.is_nan() => Value::Number(f64::NAN),
        other => other.clone(),
    }
}
