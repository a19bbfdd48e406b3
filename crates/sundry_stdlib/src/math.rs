//! Number theory and arithmetic helpers.
//!
//! Numeric arguments must be [`Value::Number`]; anything else makes the
//! helper return `NaN` (or `false` for predicates).

use rand::Rng;
use sundry_foundation::{Error, Result, Value};

use crate::fallback::or_sentinel;
use crate::random::unit;

/// Every double at or beyond 2^53 is an even integer.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

// =============================================================================
// Basic Arithmetic
// =============================================================================

/// Math: add
#[must_use]
pub fn add(a: &Value, b: &Value) -> f64 {
    or_sentinel("add", numbers2(a, b).map(|(a, b)| a + b), || f64::NAN)
}

/// Math: subtract
#[must_use]
pub fn subtract(a: &Value, b: &Value) -> f64 {
    or_sentinel("subtract", numbers2(a, b).map(|(a, b)| a - b), || f64::NAN)
}

/// Math: clamp - `min(max(value, lo), hi)`
///
/// There is no check that `lo <= hi`; when it is not, the result is `hi`.
#[must_use]
pub fn clamp(value: &Value, lo: &Value, hi: &Value) -> f64 {
    let result = numbers2(value, lo)
        .and_then(|(v, lo)| Ok((v, lo, hi.expect_number()?)))
        .map(|(v, lo, hi)| nan_min(nan_max(v, lo), hi));
    or_sentinel("clamp", result, || f64::NAN)
}

/// Math: round-to - round to `decimals` places, ties toward +∞
///
/// `round_to(3.14159, 2) = 3.14`.
#[must_use]
pub fn round_to(value: &Value, decimals: &Value) -> f64 {
    let result = numbers2(value, decimals).map(|(v, d)| {
        let factor = 10f64.powf(d);
        round_half_up(v * factor) / factor
    });
    or_sentinel("round_to", result, || f64::NAN)
}

// =============================================================================
// Number Theory
// =============================================================================

/// Math: gcd - Euclid's algorithm on absolute values
///
/// Both arguments must be finite.
#[must_use]
pub fn gcd(a: &Value, b: &Value) -> f64 {
    or_sentinel("gcd", finite2(a, b).map(|(a, b)| euclid(a, b)), || f64::NAN)
}

/// Math: lcm - `|a * b| / gcd(a, b)`
///
/// `lcm(0, 0)` divides zero by zero and is `NaN`.
#[must_use]
pub fn lcm(a: &Value, b: &Value) -> f64 {
    let result = finite2(a, b).map(|(a, b)| (a * b).abs() / euclid(a, b));
    or_sentinel("lcm", result, || f64::NAN)
}

/// Math: prime? - trial division over the 6k±1 wheel
///
/// False for non-integers, values below 2, and non-numbers.
#[must_use]
pub fn is_prime(n: &Value) -> bool {
    or_sentinel("is_prime", expect_integer(n).map(is_prime_integer), || false)
}

/// Math: factorial - defined for integers >= 0
///
/// Overflows to `Infinity` past 170!.
#[must_use]
pub fn factorial(n: &Value) -> f64 {
    let result = expect_non_negative_integer(n).map(|n| {
        let mut acc = 1.0_f64;
        let mut i = 2.0;
        while i <= n && acc.is_finite() {
            acc *= i;
            i += 1.0;
        }
        acc
    });
    or_sentinel("factorial", result, || f64::NAN)
}

/// Math: fibonacci - zero-indexed, `fibonacci(0) = 0`, `fibonacci(1) = 1`
#[must_use]
pub fn fibonacci(n: &Value) -> f64 {
    let result = expect_non_negative_integer(n).map(|n| {
        if n <= 1.0 {
            return n;
        }
        let (mut a, mut b) = (0.0_f64, 1.0_f64);
        let mut i = 2.0;
        // Once `b` overflows every later term is infinite too.
        while i <= n && b.is_finite() {
            let next = a + b;
            a = b;
            b = next;
            i += 1.0;
        }
        b
    });
    or_sentinel("fibonacci", result, || f64::NAN)
}

/// Math: random-int - uniform integer in `[ceil(lo), floor(hi)]`
///
/// The bounds are not reordered; with `lo > hi` the result falls outside
/// both of them, exactly as the arithmetic dictates.
pub fn random_int<R: Rng + ?Sized>(lo: &Value, hi: &Value, rng: &mut R) -> f64 {
    let result = numbers2(lo, hi).map(|(lo, hi)| {
        let (lo, hi) = (lo.ceil(), hi.floor());
        (unit(rng) * (hi - lo + 1.0)).floor() + lo
    });
    or_sentinel("random_int", result, || f64::NAN)
}

// =============================================================================
// Aggregates
// =============================================================================

/// Math: sum
///
/// `NaN` if the input is not a sequence or any element is not a number.
#[must_use]
pub fn sum(values: &Value) -> f64 {
    or_sentinel("sum", try_sum(values), || f64::NAN)
}

/// Math: average
///
/// `NaN` for an empty sequence or whenever [`sum`] would be `NaN`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(values: &Value) -> f64 {
    let result = values.expect_vec().and_then(|items| {
        if items.is_empty() {
            return Err(Error::invalid_argument("average of an empty sequence"));
        }
        Ok(try_sum(values)? / items.len() as f64)
    });
    or_sentinel("average", result, || f64::NAN)
}

fn try_sum(values: &Value) -> Result<f64> {
    values
        .expect_vec()?
        .iter()
        .try_fold(0.0, |acc, item| Ok(acc + item.expect_number()?))
}

// =============================================================================
// Helpers
// =============================================================================

fn numbers2(a: &Value, b: &Value) -> Result<(f64, f64)> {
    Ok((a.expect_number()?, b.expect_number()?))
}

fn finite2(a: &Value, b: &Value) -> Result<(f64, f64)> {
    Ok((a.expect_finite()?, b.expect_finite()?))
}

fn expect_integer(v: &Value) -> Result<f64> {
    let n = v.expect_finite()?;
    if n.fract() == 0.0 {
        Ok(n)
    } else {
        Err(Error::invalid_argument(format!("expected an integer, got {n}")))
    }
}

fn expect_non_negative_integer(v: &Value) -> Result<f64> {
    let n = expect_integer(v)?;
    if n < 0.0 {
        return Err(Error::invalid_argument(format!("expected n >= 0, got {n}")));
    }
    Ok(n)
}

fn euclid(a: f64, b: f64) -> f64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0.0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn is_prime_integer(n: f64) -> bool {
    if n <= 1.0 || n >= MAX_SAFE_INTEGER {
        return false;
    }
    let n = n as u64;
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5u64;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// `f64::max` ignores NaN; here NaN wins.
pub(crate) fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

/// `f64::min` ignores NaN; here NaN wins.
pub(crate) fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

/// Round to nearest, ties toward positive infinity (`-2.5 → -2`).
fn round_half_up(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}
