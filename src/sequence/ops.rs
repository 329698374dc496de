//! Pure operations over [`NumberSequence`] values.
//!
//! None of these functions perform I/O or retain their input. Mutating
//! operations return a new sequence.

use super::error::{Result, SequenceError};
use super::{LengthBounds, NumberSequence, Removal, RemovalMode};
use rand::Rng;

/// Text produced by [`render`] for an empty sequence
pub const EMPTY_RENDER: &str = "There are no numbers in the array.";

/// Generate a random sequence whose length lies in `[min_len, max_len]`.
///
/// Element values are drawn from the full `i32` range. The thread-local
/// generator is used, so results are not reproducible.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidRange`] if either bound is zero or
/// `min_len > max_len`.
pub fn generate_random(min_len: usize, max_len: usize) -> Result<NumberSequence> {
    generate_random_with(&mut rand::thread_rng(), min_len, max_len)
}

/// Same as [`generate_random`], drawing from the given generator.
pub fn generate_random_with<R: Rng + ?Sized>(
    rng: &mut R,
    min_len: usize,
    max_len: usize,
) -> Result<NumberSequence> {
    let bounds = LengthBounds::new(min_len, max_len)?;
    Ok(generate_within(rng, bounds))
}

/// Generate a random sequence within already-validated bounds.
pub fn generate_within<R: Rng + ?Sized>(rng: &mut R, bounds: LengthBounds) -> NumberSequence {
    let len = rng.gen_range(bounds.min_len()..=bounds.max_len());
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Parse comma-separated integers such as `"1, 2, 3"`.
///
/// Whitespace directly after a comma is skipped. Empty trailing fields are
/// ignored, so `"1, 2,"` parses as `[1, 2]`. Parsing is atomic: the first bad
/// field fails the whole call.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidInput`] when `text` is empty or has no
/// fields, or names the first field that is not an `i32`.
pub fn parse_from_text(text: &str) -> Result<NumberSequence> {
    if text.is_empty() {
        return Err(empty_input());
    }

    let mut fields: Vec<&str> = text
        .split(',')
        .enumerate()
        .map(|(i, field)| if i == 0 { field } else { field.trim_start() })
        .collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    if fields.is_empty() {
        return Err(empty_input());
    }

    fields
        .into_iter()
        .map(|field| {
            field
                .parse::<i32>()
                .map_err(|_| SequenceError::InvalidInput(format!("Invalid number: {}", field)))
        })
        .collect()
}

fn empty_input() -> SequenceError {
    SequenceError::InvalidInput("Input cannot be null or empty.".to_string())
}

/// Return a copy of `seq` with `value` appended.
pub fn append(seq: &NumberSequence, value: i32) -> NumberSequence {
    let mut values = Vec::with_capacity(seq.len() + 1);
    values.extend_from_slice(seq.as_slice());
    values.push(value);
    NumberSequence::from(values)
}

/// Whether `value` occurs anywhere in `seq`
pub fn contains(seq: &NumberSequence, value: i32) -> bool {
    seq.as_slice().contains(&value)
}

/// Largest element.
///
/// # Errors
///
/// Returns [`SequenceError::EmptySequence`] if `seq` has no elements.
pub fn find_max(seq: &NumberSequence) -> Result<i32> {
    seq.iter().copied().max().ok_or(SequenceError::EmptySequence)
}

/// Smallest element.
///
/// # Errors
///
/// Returns [`SequenceError::EmptySequence`] if `seq` has no elements.
pub fn find_min(seq: &NumberSequence) -> Result<i32> {
    seq.iter().copied().min().ok_or(SequenceError::EmptySequence)
}

/// Remove `value` from `seq` according to `mode`.
///
/// Remaining elements keep their relative order. If `value` does not occur
/// the returned sequence equals the input and [`Removal::found`] is false.
pub fn remove(seq: &NumberSequence, value: i32, mode: RemovalMode) -> Removal {
    match mode {
        RemovalMode::AllOccurrences => {
            let sequence: NumberSequence = seq.iter().copied().filter(|&n| n != value).collect();
            let removed = seq.len() - sequence.len();
            Removal { sequence, removed }
        }
        RemovalMode::FirstOccurrence => match seq.iter().position(|&n| n == value) {
            Some(index) => {
                let mut values = seq.as_slice().to_vec();
                values.remove(index);
                Removal {
                    sequence: NumberSequence::from(values),
                    removed: 1,
                }
            }
            None => Removal {
                sequence: seq.clone(),
                removed: 0,
            },
        },
    }
}

/// Render each element followed by a single space.
///
/// Returns [`EMPTY_RENDER`] for an empty sequence. No newline is added.
pub fn render(seq: &NumberSequence) -> String {
    if seq.is_empty() {
        return EMPTY_RENDER.to_string();
    }
    let mut out = String::with_capacity(seq.len() * 4);
    for n in seq {
        out.push_str(&n.to_string());
        out.push(' ');
    }
    out
}

/// The empty sequence
pub fn clear() -> NumberSequence {
    NumberSequence::new()
}
