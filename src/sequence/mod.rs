//! Integer sequence values and the pure operations over them.
//!
//! A [`NumberSequence`] is an ordered list of `i32` values that may contain
//! duplicates and may be empty. Sequences have value semantics: every
//! operation in [`ops`] borrows its input and returns a fresh sequence, so the
//! caller decides whether to replace the state it owns.
//!
//! ## Example
//!
//! ```rust
//! use number_array::sequence::{ops, RemovalMode};
//!
//! let seq = ops::parse_from_text("1, 2, 3, 2").unwrap();
//! let removal = ops::remove(&seq, 2, RemovalMode::FirstOccurrence);
//! assert_eq!(removal.sequence.as_slice(), &[1, 3, 2]);
//! assert_eq!(ops::render(&removal.sequence), "1 3 2 ");
//! ```

pub mod error;
pub mod ops;

pub use error::{Result, SequenceError};

use std::fmt;

/// Ordered sequence of signed integers.
///
/// "Absent" (never initialized, or cleared) and "empty" are the same state
/// and are both reported by [`NumberSequence::is_empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NumberSequence {
    values: Vec<i32>,
}

impl NumberSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence holds no elements (absent or cleared)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the elements in order
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.values.iter()
    }

    /// Consume the sequence, returning the underlying vector
    pub fn into_vec(self) -> Vec<i32> {
        self.values
    }
}

impl From<Vec<i32>> for NumberSequence {
    fn from(values: Vec<i32>) -> Self {
        Self { values }
    }
}

impl From<&[i32]> for NumberSequence {
    fn from(values: &[i32]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl FromIterator<i32> for NumberSequence {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NumberSequence {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for NumberSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ops::render(self))
    }
}

/// Which matches a remove operation deletes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalMode {
    /// Only the first match, scanning from index 0
    FirstOccurrence,
    /// Every matching element
    AllOccurrences,
}

impl RemovalMode {
    /// Map the answer to "Remove all occurrences?" onto a mode
    pub fn from_remove_all(remove_all: bool) -> Self {
        if remove_all {
            Self::AllOccurrences
        } else {
            Self::FirstOccurrence
        }
    }
}

/// Outcome of [`ops::remove`].
///
/// A value that does not occur is not an error: the sequence comes back
/// unchanged with `removed == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// The resulting sequence
    pub sequence: NumberSequence,
    /// How many elements were removed
    pub removed: usize,
}

impl Removal {
    /// Whether the value was present in the original sequence
    pub fn found(&self) -> bool {
        self.removed > 0
    }
}

/// Validated inclusive length range for random generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    min_len: usize,
    max_len: usize,
}

impl LengthBounds {
    /// Lower bound used when nothing else is configured
    pub const DEFAULT_MIN_LEN: usize = 2;
    /// Upper bound used when nothing else is configured
    pub const DEFAULT_MAX_LEN: usize = 20;

    /// Validate a length range.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidRange`] if either bound is zero or
    /// `min_len > max_len`.
    pub fn new(min_len: usize, max_len: usize) -> Result<Self> {
        if min_len == 0 || max_len == 0 || min_len > max_len {
            return Err(SequenceError::InvalidRange { min_len, max_len });
        }
        Ok(Self { min_len, max_len })
    }

    /// Inclusive lower bound
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Inclusive upper bound
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Whether `len` falls inside the range
    pub fn contains(&self, len: usize) -> bool {
        (self.min_len..=self.max_len).contains(&len)
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min_len: Self::DEFAULT_MIN_LEN,
            max_len: Self::DEFAULT_MAX_LEN,
        }
    }
}

impl fmt::Display for LengthBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min_len, self.max_len)
    }
}
