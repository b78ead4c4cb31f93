//! Command-line argument parsing.

use std::path::PathBuf;

/// Determines what action to take based on command line arguments.
#[derive(Debug, Clone)]
pub enum StartupAction {
    /// No argument provided - use the built-in demo roster.
    None,
    /// Roster JSON file to load.
    OpenRoster(PathBuf),
}

/// Parse command-line arguments and determine the startup action.
#[must_use]
pub fn parse_args() -> StartupAction {
    let mut args = std::env::args().skip(1);

    match args.next() {
        None => StartupAction::None,
        Some(arg) => parse_single_arg(&arg),
    }
}

/// Parse a single command-line argument.
fn parse_single_arg(arg: &str) -> StartupAction {
    let path = PathBuf::from(arg);

    if path.is_file() {
        StartupAction::OpenRoster(path)
    } else {
        log::warn!("Roster file not found: {}", path.display());
        StartupAction::None
    }
}
