//! Tracklist-to-Spotify CLI Library
//!
//! This library turns a 1001tracklists setlist page into a Spotify playlist.
//! It scrapes the page for the `Artist - Title` pairs of identified tracks,
//! resolves each pair to a track URI through the Spotify search API, creates
//! a playlist for the authenticated user and appends the resolved tracks.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `spotify` - Spotify Web API client implementation
//! - `tracklist` - Tracklist page fetching and extraction
//! - `types` - Data structures, wire formats and error types
//! - `utils` - Pure helpers for parsing and query sanitisation

pub mod cli;
pub mod config;
pub mod spotify;
pub mod tracklist;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`. Used for general status
/// updates while the pipeline progresses.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`. Used when a stage or a
/// single track resolution completes successfully.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the
/// program with code 1.
///
/// Accepts the same arguments as `println!`. Only for unrecoverable
/// failures; nothing after the macro invocation executes.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Accepts the same arguments as `println!`. Used for recoverable issues
/// such as tracks that could not be resolved.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
