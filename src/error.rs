//! Shared error types for the formatting API
//!
//! Only the operations that validate their input fail: duration phrasing
//! rejects zero-length durations and capitalization rejects blank text.
//! Everything else degrades to a numeric fallback instead of erroring.

use thiserror::Error;

/// Error type for formatting operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Returned by [`format_duration`](crate::format_duration); a zero-length
    /// duration has no phrase (`std::time::Duration` cannot be negative).
    #[error("Duration must be longer than zero")]
    ZeroDuration,

    /// Returned by [`capitalize`](crate::capitalize) when the input has no
    /// non-whitespace characters.
    #[error("Text must contain at least one non-whitespace character")]
    BlankText,
}
