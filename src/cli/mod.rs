//! # CLI Module
//!
//! User-facing command implementations. Each command coordinates the
//! lower layers (tracklist extraction, Spotify integration) and handles
//! progress feedback and error presentation; fatal stage failures go
//! through the `error!` macro, which terminates the run with a non-zero
//! exit code.
//!
//! ## Commands
//!
//! - [`playlist`] - the full pipeline: extract the tracklist, create a
//!   playlist, resolve every track, append the matches, and report what
//!   could not be resolved
//! - [`tracks`] - extraction dry run: print the identified tracks of a
//!   page without touching the Spotify account

mod playlist;
mod tracks;

pub use playlist::playlist;
pub use tracks::tracks;
