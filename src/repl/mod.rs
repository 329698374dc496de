//! Interactive menu loop
//!
//! Owns the current sequence and a console, and walks the user through
//! building, inspecting and changing it.

pub mod command;
pub mod console;
pub mod error;
pub mod input;
pub mod state;
pub mod state_machine;

pub use command::{CommandResult, InitChoice, MenuChoice};
pub use console::Console;
pub use error::{ReplError, Result};
pub use input::{InputSource, LineSource};
pub use state::ArrayState;
pub use state_machine::{LoopPhase, Session};

#[cfg(feature = "cli")]
pub use input::EditorSource;

/// Line editor configuration
#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt shown by the line editor
    pub prompt: String,
    /// History file path
    pub history_file: Option<std::path::PathBuf>,
    /// Maximum history entries
    pub max_history: usize,
}

#[cfg(feature = "cli")]
impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            history_file: Some(
                dirs::home_dir()
                    .unwrap_or_else(|| std::path::PathBuf::from("."))
                    .join(".number_array_history"),
            ),
            max_history: 1000,
        }
    }
}
