//! Error types for queue operations

use thiserror::Error;

/// Queue errors
///
/// Only argument-validation failures surface here. Out-of-range index
/// lookups are absorbed as `None`/empty results instead (see the method
/// docs on [`crate::Queue`]).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    /// `shift` was asked to advance by a non-positive count
    #[error("invalid shift count: {0} (must be a positive integer)")]
    InvalidShiftCount(i64),

    /// A `remove_range` bound was NaN; names the offending argument
    #[error("invalid argument: \"{0}\" must be a number, not NaN")]
    InvalidRangeBound(&'static str),
}

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;
