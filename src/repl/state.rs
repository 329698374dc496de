//! Loop state
//!
//! Holds the one sequence the loop manages and the settings that shape how it
//! is (re)built.

use crate::sequence::{LengthBounds, NumberSequence};

/// State owned by a running session
#[derive(Debug, Clone, Default)]
pub struct ArrayState {
    /// The managed sequence; empty means "needs initialization"
    pub sequence: NumberSequence,
    /// Length range for randomly generated sequences
    pub bounds: LengthBounds,
}

impl ArrayState {
    /// Empty state with default random bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty state with custom random bounds
    pub fn with_bounds(bounds: LengthBounds) -> Self {
        Self {
            sequence: NumberSequence::new(),
            bounds,
        }
    }

    /// State that starts from an existing sequence
    pub fn with_sequence(sequence: NumberSequence) -> Self {
        Self {
            sequence,
            bounds: LengthBounds::default(),
        }
    }

    /// Whether the sequence is absent or empty
    pub fn needs_init(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Replace the managed sequence
    pub fn replace(&mut self, sequence: NumberSequence) {
        log::debug!(
            "Sequence replaced ({} -> {} element(s))",
            self.sequence.len(),
            sequence.len()
        );
        self.sequence = sequence;
    }
}
