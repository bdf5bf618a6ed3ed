//! Core data model: parsed playlist entries, run configuration, run summary.

mod entry;
mod options;
mod summary;

pub use entry::PlaylistEntry;
pub use options::{Category, MovieLayout, RunOptions};
pub use summary::{LastWritten, RunSummary};
