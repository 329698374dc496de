//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "number-array")]
#[command(about = "Interactive console for building and querying an integer array")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path (.json)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Minimum length of a randomly generated array
    #[arg(long)]
    pub min_len: Option<usize>,

    /// Maximum length of a randomly generated array
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Read plain lines from stdin even when attached to a terminal
    #[arg(long)]
    pub plain: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
