//! Text transformation helpers.
//!
//! Transformations take a [`Value`] and hand back the input unchanged when
//! it is not a string. Characters are Unicode scalar values; grapheme
//! clusters are not kept together.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use sundry_foundation::Value;

use crate::fallback::or_sentinel;

/// Alphabet drawn from by [`random_string`].
pub const ALPHANUMERIC: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("static pattern"));
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("static pattern"));
static EDGE_HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+|-+$").expect("static pattern"));
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Applies `f` to a string input, or returns the input untouched.
fn map_str(op: &'static str, input: &Value, f: impl FnOnce(&str) -> String) -> Value {
    let result = input.expect_str().map(|s| Value::from(f(s)));
    or_sentinel(op, result, || input.clone())
}

// =============================================================================
// Case
// =============================================================================

/// String: capitalize - uppercase the first character
#[must_use]
pub fn capitalize(input: &Value) -> Value {
    map_str("capitalize", input, capitalize_str)
}

/// String: capitalize-words - [`capitalize`] every single-space separated word
///
/// Runs of spaces are preserved as-is.
#[must_use]
pub fn capitalize_words(input: &Value) -> Value {
    map_str("capitalize_words", input, |s| {
        s.split(' ').map(capitalize_str).collect::<Vec<_>>().join(" ")
    })
}

fn capitalize_str(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Reshaping
// =============================================================================

/// String: slugify - URL-friendly lower-case form
///
/// `slugify("Hello World!") = "hello-world"`.
#[must_use]
pub fn slugify(input: &Value) -> Value {
    map_str("slugify", input, |s| {
        let lower = s.to_lowercase();
        let stripped = NON_SLUG_CHARS.replace_all(&lower, "");
        let joined = SEPARATOR_RUNS.replace_all(&stripped, "-");
        EDGE_HYPHENS.replace_all(&joined, "").into_owned()
    })
}

/// String: truncate - keep `length` characters and append `...`
///
/// Strings of at most `length` characters come back unchanged. The suffix
/// does not count toward `length`. `length` goes through numeric coercion
/// and is truncated toward zero; a negative length counts back from the
/// end, and `NaN` keeps nothing.
///
/// `truncate("Hello", -1) = "Hell..."`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn truncate(input: &Value, length: &Value) -> Value {
    map_str("truncate", input, |s| {
        let count = s.chars().count();
        let limit = length.to_number();
        if count as f64 <= limit {
            return s.to_string();
        }
        let keep = match length {
            Value::Undefined => count,
            _ => prefix_len(limit, count),
        };
        let mut out: String = s.chars().take(keep).collect();
        out.push_str("...");
        out
    })
}

/// Resolves a slice end against `count` characters.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn prefix_len(end: f64, count: usize) -> usize {
    if end.is_nan() {
        return 0;
    }
    let end = end.trunc();
    let resolved = if end < 0.0 { count as f64 + end } else { end };
    // `as` saturates: negative results become 0.
    (resolved as usize).min(count)
}

/// String: reverse
#[must_use]
pub fn reverse_string(input: &Value) -> Value {
    map_str("reverse_string", input, reverse_str)
}

fn reverse_str(s: &str) -> String {
    s.chars().rev().collect()
}

/// String: remove-spaces - strip every whitespace run
#[must_use]
pub fn remove_spaces(input: &Value) -> Value {
    map_str("remove_spaces", input, |s| {
        WHITESPACE_RUNS.replace_all(s, "").into_owned()
    })
}

// =============================================================================
// Inspection
// =============================================================================

/// String: palindrome? - compare ASCII letters and digits, ignoring case
///
/// False for non-strings.
#[must_use]
pub fn is_palindrome(input: &Value) -> bool {
    let result = input.expect_str().map(|s| {
        let clean: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        clean == reverse_str(&clean)
    });
    or_sentinel("is_palindrome", result, || false)
}

/// String: count-words - whitespace-separated words
///
/// Zero for non-strings and blank strings.
#[must_use]
pub fn count_words(input: &Value) -> usize {
    let result = input.expect_str().map(|s| s.split_whitespace().count());
    or_sentinel("count_words", result, || 0)
}

// =============================================================================
// Generation
// =============================================================================

/// String: random - `length` characters drawn uniformly from [`ALPHANUMERIC`]
pub fn random_string<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| char::from(ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())]))
        .collect()
}
