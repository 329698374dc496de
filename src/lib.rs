//! # number-array
//!
//! An interactive console for building, inspecting and changing a single
//! sequence of integers through a numbered menu.
//!
//! The crate has two layers:
//!
//! - [`sequence`]: the [`NumberSequence`](sequence::NumberSequence) value and
//!   pure operations over it (parse, generate, append, remove, min, max,
//!   render, clear)
//! - [`repl`]: the retry-until-valid read primitives and the session state
//!   machine that dispatches menu choices to those operations
//!
//! ## Example
//!
//! ```rust
//! use number_array::repl::{ArrayState, Console, LineSource, Session};
//! use std::io::Cursor;
//!
//! let input = Cursor::new("1\n3, 1, 2\n3\n7\n");
//! let console = Console::new(LineSource::new(input), Vec::new());
//! let mut session = Session::new(console, ArrayState::new());
//! session.run().unwrap();
//!
//! let output = String::from_utf8(session.into_console().into_parts().1).unwrap();
//! assert!(output.contains("Max number: 3"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod repl;
pub mod sequence;

/// CLI interface and configuration
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::repl::{
        ArrayState, CommandResult, Console, InitChoice, InputSource, LineSource, LoopPhase,
        MenuChoice, ReplError, Session,
    };
    pub use crate::sequence::{
        ops, LengthBounds, NumberSequence, Removal, RemovalMode, SequenceError,
    };
}
