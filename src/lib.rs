//! strmsync - M3U playlist to .strm marker-file tree converter
//!
//! Parses line-oriented playlists, classifies entries into TV show, movie
//! and live categories, writes one marker file per accepted entry under an
//! idempotency policy, and optionally reconciles the output tree by
//! deleting markers no longer present upstream.

pub mod classify;
pub mod convert;
pub mod driver;
pub mod error;
pub mod model;
pub mod playlist;

pub use convert::convert;
pub use error::ConvertError;
pub use model::{Category, MovieLayout, RunOptions, RunSummary};
