//! Session launching for the binary

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, IsTerminal, Write};

use super::args::Cli;
use super::paths::PersistentConfig;
use crate::repl::{ArrayState, Console, EditorSource, InputSource, LineSource, Session};

/// Load configuration, pick an input source and run a session to completion.
///
/// A terminal on stdin gets a line editor with history unless `--plain` is
/// given; anything else is read line by line.
pub fn run(cli: &Cli) -> Result<()> {
    let config = PersistentConfig::load(cli.config.as_deref())?.merge_with_cli(cli);
    let bounds = config
        .bounds()
        .context("Invalid random array length configuration")?;
    log::debug!("Random array length bounds: {}", bounds);

    let color = config.color_enabled() && io::stdout().is_terminal();
    colored::control::set_override(color);

    let state = ArrayState::with_bounds(bounds);

    if !cli.plain && io::stdin().is_terminal() {
        let mut source = EditorSource::new(&config.repl_config())?;
        let result = run_session(&mut source, io::stdout(), state, color);
        if let Err(e) = source.save_history() {
            eprintln!("{}: Failed to save history: {}", "Warning".yellow(), e);
        }
        result
    } else {
        let stdin = io::stdin();
        run_session(LineSource::new(stdin.lock()), io::stdout(), state, color)
    }
}

/// Run one session over the given input and output
pub fn run_session<I, W>(input: I, output: W, state: ArrayState, color: bool) -> Result<()>
where
    I: InputSource,
    W: Write,
{
    let console = Console::new(input, output).with_color(color);
    let mut session = Session::new(console, state);
    session.run()?;
    Ok(())
}
