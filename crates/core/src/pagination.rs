//! Offset/limit clamping for list endpoints.

/// Page size used when the caller does not pass `limit`.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Upper bound on any single page.
pub const MAX_LIST_LIMIT: i64 = 1000;

/// Clamp a user-provided limit to `[1, max]`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
