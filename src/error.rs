use std::path::PathBuf;
use thiserror::Error;

/// Errors a conversion run can surface to the caller.
///
/// Classification never fails; rejected entries are routed to the
/// ignored-entry log instead. Only a missing input source and filesystem
/// access are hard failures.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The playlist source does not exist. Raised before any parsing begins,
    /// so no output has been touched.
    #[error("input playlist not found: {0:?}")]
    InputNotFound(PathBuf),

    /// Filesystem failure while reading the playlist or writing a marker
    /// file. Output may be partially written; re-running is safe because
    /// writes are idempotent.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
