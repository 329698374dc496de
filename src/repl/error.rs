//! Error types for the interactive loop.

use crate::sequence::SequenceError;
use thiserror::Error;

/// Fatal errors that end the interactive loop.
///
/// Malformed answers never show up here; the read primitives recover from
/// them by re-prompting.
#[derive(Debug, Error)]
pub enum ReplError {
    /// The input stream closed while a read primitive was waiting for a valid answer.
    #[error("Input stream closed before a valid answer was read")]
    InputExhausted,

    /// Reading from the input or writing to the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A sequence operation failed where the loop guarantees it cannot.
    ///
    /// For example a min/max query on an empty sequence, which the loop
    /// prevents by re-initializing before the menu is shown.
    #[error("Internal invariant violated: {0}")]
    Sequence(#[from] SequenceError),
}

/// A specialized `Result` type for the interactive loop.
pub type Result<T> = std::result::Result<T, ReplError>;
