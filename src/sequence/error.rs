//! Error types for sequence operations.

use thiserror::Error;

/// Errors that can occur while building or querying a [`NumberSequence`].
///
/// [`NumberSequence`]: super::NumberSequence
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The requested random length range is unusable.
    ///
    /// Both bounds must be positive and `min_len` must not exceed `max_len`.
    #[error("Invalid length range: minLen must be <= maxLen and the lengths must be greater than 0 (got {min_len}..={max_len}).")]
    InvalidRange {
        /// Requested lower bound
        min_len: usize,
        /// Requested upper bound
        max_len: usize,
    },

    /// Manually entered text could not be turned into a sequence.
    ///
    /// The message is shown to the user verbatim before re-prompting.
    #[error("{0}")]
    InvalidInput(String),

    /// A min/max query was made on a sequence with no elements.
    #[error("Array is empty")]
    EmptySequence,
}

/// A specialized `Result` type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
