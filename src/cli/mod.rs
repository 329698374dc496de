//! CLI interface for number-array
//!
//! Argument parsing, persistent configuration and session launching.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::Cli;
pub use paths::{config_dir, PersistentConfig};
