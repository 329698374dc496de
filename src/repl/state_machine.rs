//! Session state machine
//!
//! Drives the loop through three phases:
//!
//! - [`LoopPhase::NeedsInit`]: the sequence is empty, ask how to build one
//! - [`LoopPhase::Menu`]: show the sequence and run one menu entry
//! - [`LoopPhase::Terminated`]: the user chose to exit
//!
//! After any menu entry other than exit, an empty sequence sends the session
//! back to `NeedsInit` without showing the menu again.

use super::command::{
    CommandResult, InitChoice, MenuChoice, INVALID_INIT_CHOICE, INVALID_MENU_CHOICE,
};
use super::console::Console;
use super::error::Result;
use super::input::InputSource;
use super::state::ArrayState;
use crate::sequence::ops;
use std::io::Write;

/// Greeting printed when a session starts
pub const WELCOME: &str = "Welcome to the array management system!";

/// Notice printed when an operation leaves the sequence empty
pub const REINITIALIZING: &str = "Array is empty. Reinitializing...";

/// Session execution phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// No sequence yet, or it was emptied
    NeedsInit,
    /// Showing the menu
    Menu,
    /// Exit was chosen
    Terminated,
}

impl LoopPhase {
    /// Check if the phase ends the session
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminated)
    }
}

impl Default for LoopPhase {
    fn default() -> Self {
        Self::NeedsInit
    }
}

/// One interactive session: console, state and current phase
pub struct Session<I, W> {
    console: Console<I, W>,
    state: ArrayState,
    phase: LoopPhase,
}

impl<I: InputSource, W: Write> Session<I, W> {
    /// Create a session.
    ///
    /// Starts in `NeedsInit` when the state holds no sequence, otherwise in
    /// `Menu`.
    pub fn new(console: Console<I, W>, state: ArrayState) -> Self {
        let phase = if state.needs_init() {
            LoopPhase::NeedsInit
        } else {
            LoopPhase::Menu
        };
        Self {
            console,
            state,
            phase,
        }
    }

    /// Get the current phase
    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Get the loop state
    pub fn state(&self) -> &ArrayState {
        &self.state
    }

    /// Get the console
    pub fn console(&self) -> &Console<I, W> {
        &self.console
    }

    /// Give back the console
    pub fn into_console(self) -> Console<I, W> {
        self.console
    }

    /// Greet, then step until the session terminates.
    ///
    /// # Errors
    ///
    /// [`ReplError::InputExhausted`](super::ReplError::InputExhausted) if the
    /// input closes first; any other error is fatal as well.
    pub fn run(&mut self) -> Result<()> {
        self.console.say(WELCOME)?;
        while !self.phase.is_terminal() {
            self.step()?;
        }
        Ok(())
    }

    /// Run the current phase once and move to the next one
    pub fn step(&mut self) -> Result<LoopPhase> {
        let next = match self.phase {
            LoopPhase::NeedsInit => self.initialize()?,
            LoopPhase::Menu => self.menu_iteration()?,
            LoopPhase::Terminated => LoopPhase::Terminated,
        };
        if next != self.phase {
            log::debug!("Phase {:?} -> {:?}", self.phase, next);
        }
        self.phase = next;
        Ok(next)
    }

    fn initialize(&mut self) -> Result<LoopPhase> {
        let choice: InitChoice = self
            .console
            .read_choice(InitChoice::MENU, INVALID_INIT_CHOICE)?;
        let sequence = choice.execute(&self.state, &mut self.console)?;
        log::info!(
            "Initialized sequence via {:?} with {} element(s)",
            choice,
            sequence.len()
        );
        self.state.replace(sequence);

        Ok(if self.state.needs_init() {
            LoopPhase::NeedsInit
        } else {
            LoopPhase::Menu
        })
    }

    fn menu_iteration(&mut self) -> Result<LoopPhase> {
        if self.state.needs_init() {
            return Ok(LoopPhase::NeedsInit);
        }

        self.console.say("Current array: ")?;
        self.console.say(&ops::render(&self.state.sequence))?;

        let choice: MenuChoice = self
            .console
            .read_choice(&MenuChoice::menu_text(), INVALID_MENU_CHOICE)?;
        log::debug!("Dispatching {:?}", choice);

        match choice.execute(&mut self.state, &mut self.console)? {
            CommandResult::Exit => Ok(LoopPhase::Terminated),
            CommandResult::Continue if self.state.needs_init() => {
                self.console.say(REINITIALIZING)?;
                Ok(LoopPhase::NeedsInit)
            }
            CommandResult::Continue => Ok(LoopPhase::Menu),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::input::LineSource;
    use crate::repl::ReplError;
    use crate::sequence::NumberSequence;
    use std::io::Cursor;

    type TestSession = Session<LineSource<Cursor<String>>, Vec<u8>>;

    fn session(values: &[i32], input: &str) -> TestSession {
        let source = LineSource::new(Cursor::new(input.to_string()));
        let console = Console::new(source, Vec::new());
        Session::new(console, ArrayState::with_sequence(NumberSequence::from(values)))
    }

    fn output(session: &TestSession) -> String {
        String::from_utf8_lossy(session.console().output()).into_owned()
    }

    #[test]
    fn test_initial_phase() {
        assert_eq!(session(&[], "").phase(), LoopPhase::NeedsInit);
        assert_eq!(session(&[1], "").phase(), LoopPhase::Menu);
    }

    #[test]
    fn test_init_then_menu() {
        let mut s = session(&[], "1\n4, 5\n");
        assert_eq!(s.step().unwrap(), LoopPhase::Menu);
        assert_eq!(s.state().sequence.as_slice(), &[4, 5]);
    }

    #[test]
    fn test_exit_terminates() {
        let mut s = session(&[1], "7\n");
        assert_eq!(s.step().unwrap(), LoopPhase::Terminated);
        assert!(s.phase().is_terminal());
        assert!(output(&s).ends_with("Thank you for using the system. Goodbye!\n"));
    }

    #[test]
    fn test_terminated_is_sticky() {
        let mut s = session(&[1], "7\n");
        s.step().unwrap();
        assert_eq!(s.step().unwrap(), LoopPhase::Terminated);
    }

    #[test]
    fn test_clear_goes_to_init() {
        let mut s = session(&[1, 2], "6\n");
        assert_eq!(s.step().unwrap(), LoopPhase::NeedsInit);
        assert!(output(&s).contains(REINITIALIZING));
    }

    #[test]
    fn test_exhausted_input() {
        let mut s = session(&[1], "");
        assert!(matches!(s.step(), Err(ReplError::InputExhausted)));
    }
}
