//! Converts internal validation errors into sentinel values.

use sundry_foundation::Result;

/// Unwraps `result`, or logs the error and returns `sentinel()`.
pub(crate) fn or_sentinel<T>(op: &'static str, result: Result<T>, sentinel: impl FnOnce() -> T) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::trace!(op, error = %err, "invalid input, returning sentinel");
            sentinel()
        }
    }
}
