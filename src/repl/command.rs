//! Menu choices and their execution
//!
//! Defines the main menu and the initialization sub-menu, and what each
//! entry does to the [`ArrayState`].

use super::console::Console;
use super::error::Result;
use super::input::InputSource;
use super::state::ArrayState;
use crate::sequence::{ops, NumberSequence, RemovalMode};
use std::fmt;
use std::io::Write;

/// Shown when a main menu code is out of range
pub const INVALID_MENU_CHOICE: &str = "Invalid choice. Please select a valid option.";

/// Shown when an initialization sub-menu code is out of range
pub const INVALID_INIT_CHOICE: &str = "Invalid choice. Please try again.";

/// Prompt for manual entry
pub const MANUAL_ENTRY_PROMPT: &str = "Enter numbers separated by commas (e.g., 1, 2, 3): ";

/// Prompt for the remove mode question
pub const REMOVE_ALL_PROMPT: &str = "Remove all occurrences? (yes/no): ";

/// Farewell printed on exit
pub const FAREWELL: &str = "Thank you for using the system. Goodbye!";

/// Main menu entry, identified by a stable code 1-7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    /// Print the sequence
    Print,
    /// Append a number
    Add,
    /// Show the largest number
    FindMax,
    /// Show the smallest number
    FindMin,
    /// Remove the first or all occurrences of a number
    Remove,
    /// Discard the sequence
    Clear,
    /// Leave the loop
    Exit,
}

/// Error for a code outside the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid menu option code: {0}")]
pub struct InvalidCode(pub i32);

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 7] = [
        Self::Print,
        Self::Add,
        Self::FindMax,
        Self::FindMin,
        Self::Remove,
        Self::Clear,
        Self::Exit,
    ];

    /// Numeric code shown in the menu
    pub fn code(self) -> i32 {
        match self {
            Self::Print => 1,
            Self::Add => 2,
            Self::FindMax => 3,
            Self::FindMin => 4,
            Self::Remove => 5,
            Self::Clear => 6,
            Self::Exit => 7,
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            Self::Print => "Print array",
            Self::Add => "Add number to array",
            Self::FindMax => "Find max number",
            Self::FindMin => "Find min number",
            Self::Remove => "Remove number from array",
            Self::Clear => "Clear array",
            Self::Exit => "Exit",
        }
    }

    /// Look up an entry by code
    pub fn from_code(code: i32) -> std::result::Result<Self, InvalidCode> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.code() == code)
            .ok_or(InvalidCode(code))
    }

    /// Full menu text, one numbered line per entry
    pub fn menu_text() -> String {
        let mut text = String::from("Choose an option:");
        for choice in Self::ALL {
            text.push('\n');
            text.push_str(&choice.to_string());
        }
        text
    }

    /// Run this entry against the state.
    ///
    /// Prompts needed by the entry (the number to add or remove, the yes/no
    /// question) go through `console`. Returns [`CommandResult::Exit`] only for
    /// [`MenuChoice::Exit`].
    ///
    /// # Errors
    ///
    /// Fails if the input is exhausted mid-prompt, on I/O errors, or if a
    /// min/max query runs on an empty sequence.
    pub fn execute<I, W>(
        self,
        state: &mut ArrayState,
        console: &mut Console<I, W>,
    ) -> Result<CommandResult>
    where
        I: InputSource,
        W: Write,
    {
        match self {
            Self::Print => {
                console.say(&ops::render(&state.sequence))?;
            }
            Self::Add => {
                let value = console.prompt_integer("Enter a number to add: ")?;
                state.replace(ops::append(&state.sequence, value));
                console.success("Number was added to the array.")?;
            }
            Self::FindMax => {
                let max = ops::find_max(&state.sequence)?;
                console.say(&format!("Max number: {}", max))?;
            }
            Self::FindMin => {
                let min = ops::find_min(&state.sequence)?;
                console.say(&format!("Min number: {}", min))?;
            }
            Self::Remove => {
                let value = console.prompt_integer("Enter a number to remove: ")?;
                if !ops::contains(&state.sequence, value) {
                    let message = format!("Number {} does not exist in the array.", value);
                    console.warn(&message)?;
                    return Ok(CommandResult::Continue);
                }
                let mode = RemovalMode::from_remove_all(console.read_yes_no(REMOVE_ALL_PROMPT)?);
                let removal = ops::remove(&state.sequence, value, mode);
                log::debug!("Removed {} occurrence(s) of {}", removal.removed, value);
                state.replace(removal.sequence);
                console.success(&format!("Number {} was removed from the array.", value))?;
            }
            Self::Clear => {
                state.replace(ops::clear());
                console.success("Array cleared.")?;
            }
            Self::Exit => {
                console.say(FAREWELL)?;
                return Ok(CommandResult::Exit);
            }
        }
        Ok(CommandResult::Continue)
    }
}

impl TryFrom<i32> for MenuChoice {
    type Error = InvalidCode;

    fn try_from(code: i32) -> std::result::Result<Self, InvalidCode> {
        Self::from_code(code)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.code(), self.label())
    }
}

/// Initialization sub-menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitChoice {
    /// Type the numbers in
    CreateManually,
    /// Fill with random numbers
    GenerateRandom,
}

impl InitChoice {
    /// Sub-menu text
    pub const MENU: &'static str =
        "Choose an option:\n1. Create array manually\n2. Generate random array\nEnter your choice:";

    /// Produce a fresh sequence for this entry.
    ///
    /// Manual entry keeps prompting until the text parses.
    pub fn execute<I, W>(
        self,
        state: &ArrayState,
        console: &mut Console<I, W>,
    ) -> Result<NumberSequence>
    where
        I: InputSource,
        W: Write,
    {
        match self {
            Self::CreateManually => console.read_validated(MANUAL_ENTRY_PROMPT, |text| {
                ops::parse_from_text(text).map_err(|e| e.to_string())
            }),
            Self::GenerateRandom => {
                let mut rng = rand::thread_rng();
                Ok(ops::generate_within(&mut rng, state.bounds))
            }
        }
    }
}

impl TryFrom<i32> for InitChoice {
    type Error = InvalidCode;

    fn try_from(code: i32) -> std::result::Result<Self, InvalidCode> {
        match code {
            1 => Ok(Self::CreateManually),
            2 => Ok(Self::GenerateRandom),
            _ => Err(InvalidCode(code)),
        }
    }
}

/// What the loop does after a menu entry ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Keep going
    Continue,
    /// Leave the loop
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::from_code(choice.code()), Ok(choice));
        }
        assert_eq!(MenuChoice::from_code(0), Err(InvalidCode(0)));
        assert_eq!(MenuChoice::from_code(8), Err(InvalidCode(8)));
    }

    #[test]
    fn test_menu_text() {
        let text = MenuChoice::menu_text();
        assert!(text.starts_with("Choose an option:\n1. Print array\n"));
        assert!(text.ends_with("7. Exit"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn test_init_choice_codes() {
        assert_eq!(InitChoice::try_from(1), Ok(InitChoice::CreateManually));
        assert_eq!(InitChoice::try_from(2), Ok(InitChoice::GenerateRandom));
        assert!(InitChoice::try_from(3).is_err());
    }
}
