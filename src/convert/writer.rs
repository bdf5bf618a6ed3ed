//! Idempotent marker-file writer.

use crate::error::ConvertError;
use std::fs;
use std::path::Path;

/// Per-file outcome of one write decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File created or overwritten.
    Written,
    /// Dry-run: nothing touched, counted as written for reporting.
    WouldWrite,
    /// File exists and overwriting is disabled.
    Skipped,
}

/// Write one marker file under the output root.
///
/// Content is exactly the target reference plus a single trailing newline;
/// media-server scanners depend on that. Parent directories are created as
/// needed. Write failures are fatal to the run.
pub fn write_marker(
    output_root: &Path,
    relative: &Path,
    url: &str,
    overwrite: bool,
    dry_run: bool,
) -> Result<WriteOutcome, ConvertError> {
    if dry_run {
        log::debug!("would write {:?}", relative);
        return Ok(WriteOutcome::WouldWrite);
    }

    let target = output_root.join(relative);

    if target.exists() && !overwrite {
        log::debug!("exists, skipping {:?}", relative);
        return Ok(WriteOutcome::Skipped);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
    }

    fs::write(&target, format!("{url}\n")).map_err(|e| ConvertError::io(&target, e))?;
    log::debug!("wrote {:?}", relative);
    Ok(WriteOutcome::Written)
}
