//! Playlist parsing.
//!
//! Turns raw M3U-style text into a sequence of (metadata, target) pairs:
//! `extinf` handles one metadata line, `parser` drives the two-state
//! pairing over the whole source.

mod extinf;
mod parser;

pub use extinf::ExtinfLine;
pub use parser::{open_playlist, Entries, ParsedItem};
