//! Conversion run machinery: marker-file writing, the ignored-entry log,
//! the delete-missing reconciliation pass, and the orchestrator that
//! sequences them over one playlist.

mod ignored;
mod pipeline;
mod reconcile;
mod writer;

pub use ignored::{IgnoredLog, IgnoredRecord};
pub use pipeline::convert;
pub(crate) use pipeline::convert_source;
pub use reconcile::{reconcile, DeleteStats};
pub use writer::{write_marker, WriteOutcome};
