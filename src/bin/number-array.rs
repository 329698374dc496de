//! number-array - interactive integer array console
//!
//! Runs a single menu-driven session over stdin/stdout.

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use std::process;

use number_array::cli::commands;
use number_array::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = commands::run(&cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
